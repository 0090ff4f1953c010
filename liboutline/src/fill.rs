//! Text filler: paragraph segmentation, word-wrapping and alignment.
//!
//! The filler is the pure half of the engine. It knows nothing about
//! markup; it takes one paragraph at a time (segment raw text first with
//! [`paragraphy`]) and re-flows it into lines no wider than a limit,
//! enforcing the rule that a period ending a sentence is followed by two
//! spaces before the next sentence starts.

use crate::error::{OutlineError, Result};

/// Blank-like characters treated as token separators and line padding.
const BLANKS: &[char] = &[' ', '\t', '\x0c', '\x0b', '\r', '\n'];

/// Split raw text into paragraphs on blank-line boundaries.
///
/// Runs of non-blank lines are joined with single spaces; runs of one or
/// more blank (whitespace-only) lines separate paragraphs. Never
/// produces empty paragraphs: `"a\n\n\n\nb"` becomes `["a", "b"]`.
pub fn paragraphy(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.trim_matches(BLANKS).lines().collect();
    paragraphy_lines(&lines)
}

/// Like [`paragraphy`], but for text already split on hard line breaks.
pub fn paragraphy_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lines {
        let line = line.as_ref().trim_matches(BLANKS);
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs
}

/// Re-flow one paragraph into lines of at most `line_width` characters.
///
/// All whitespace clusters collapse to single spaces, except that a
/// period ending a sentence is followed by two spaces. Words are never
/// split, so a single word longer than `line_width` produces an
/// over-long line rather than an error.
///
/// Returns [`OutlineError::LineWidth`] if `line_width` is not greater
/// than 9. An empty (or all-blank) paragraph yields no lines.
pub fn fill(text: &str, line_width: usize) -> Result<Vec<String>> {
    let tokens: Vec<String> = text.split_whitespace().map(String::from).collect();
    fill_tokens(tokens, line_width)
}

/// Like [`fill`], but for a paragraph already split on hard line breaks.
/// The original line breaks carry no meaning; all lines contribute their
/// words to one flat token sequence.
pub fn fill_lines<S: AsRef<str>>(lines: &[S], line_width: usize) -> Result<Vec<String>> {
    let tokens: Vec<String> = lines
        .iter()
        .flat_map(|line| line.as_ref().split_whitespace())
        .map(String::from)
        .collect();
    fill_tokens(tokens, line_width)
}

/// Greedy line-packing over a flat token sequence.
///
/// `length` starts at -1 so the first token's separator contributes
/// nothing. A token ending in '.' gains one synthetic trailing space
/// before width accounting (so two sentences end up separated by two
/// spaces); a line may close exactly on the width, or one character over
/// it when that character is the synthetic space, which is then
/// stripped.
fn fill_tokens(mut tokens: Vec<String>, line_width: usize) -> Result<Vec<String>> {
    if line_width < 10 {
        return Err(OutlineError::LineWidth(line_width));
    }
    if tokens.is_empty() {
        return Ok(Vec::new());
    }

    let width = line_width as i64;
    let mut slices: Vec<usize> = Vec::new();
    let mut length: i64 = -1;

    for i in 0..tokens.len() {
        let mut period = false;
        if tokens[i].ends_with('.') {
            period = true;
            tokens[i].push(' ');
        }

        let new_length = length + tokens[i].chars().count() as i64 + 1;

        if new_length < width {
            length = new_length;
        } else if new_length == width || (period && new_length == width + 1) {
            // Line closes on this token; the synthetic space only served
            // the boundary check.
            slices.push(i + 1);
            if period {
                tokens[i].pop();
            }
            length = -1;
        } else {
            // Token would overflow; it opens the next line instead.
            slices.push(i);
            length = tokens[i].chars().count() as i64;
        }
    }

    if slices.last() != Some(&tokens.len()) {
        slices.push(tokens.len());
    }

    // The last token of the paragraph never keeps its synthetic space.
    if let Some(last) = tokens.last_mut() {
        if last.ends_with(' ') {
            last.pop();
        }
    }

    let mut result = Vec::with_capacity(slices.len());
    let mut begin = 0;
    for end in slices {
        result.push(tokens[begin..end].join(" "));
        begin = end;
    }

    Ok(result)
}

/// Alignment direction for [`align`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Centre,
}

impl TryFrom<char> for Alignment {
    type Error = OutlineError;

    /// Parse the traditional one-letter direction: 'l', 'r' or 'c'.
    fn try_from(c: char) -> Result<Self> {
        match c {
            'l' => Ok(Alignment::Left),
            'r' => Ok(Alignment::Right),
            'c' => Ok(Alignment::Centre),
            _ => Err(OutlineError::Alignment(c)),
        }
    }
}

/// Align lines left, right or centred with respect to the longest line.
///
/// Each line is trimmed first. If `collapse_spaces` is set, whitespace
/// clusters collapse to single spaces (double after a sentence-ending
/// period) and `tab_width` has no effect; otherwise a non-zero
/// `tab_width` expands tabs to that many spaces. Every line is then
/// padded to the length of the longest line.
pub fn align<S: AsRef<str>>(
    lines: &[S],
    alignment: Alignment,
    tab_width: usize,
    collapse_spaces: bool,
) -> Vec<String> {
    if lines.is_empty() {
        return Vec::new();
    }

    let normalize = |line: &str| -> String {
        let line = line.trim_matches(BLANKS);
        if collapse_spaces {
            let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
            collapsed.replace(". ", ".  ")
        } else if tab_width > 0 {
            line.replace('\t', &" ".repeat(tab_width))
        } else {
            line.to_string()
        }
    };

    let normalized: Vec<String> = lines.iter().map(|l| normalize(l.as_ref())).collect();
    let max_length = normalized
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    normalized
        .into_iter()
        .map(|line| pad(&line, max_length, alignment))
        .collect()
}

/// Pad a single line to `width` characters in the given direction.
fn pad(line: &str, width: usize, alignment: Alignment) -> String {
    let len = line.chars().count();
    let total = width.saturating_sub(len);
    let (left, right) = match alignment {
        Alignment::Left => (0, total),
        Alignment::Right => (total, 0),
        Alignment::Centre => (total / 2, total - total / 2),
    };
    format!("{}{}{}", " ".repeat(left), line, " ".repeat(right))
}
