//! Outline formatter: a document formatter for text displayed on a
//! purely text-based medium, like the command line terminal or the text
//! editor.
//!
//! The premise is that the display surface offers one font size and very
//! limited support for styles and colours, so document structure is
//! achieved through indentation. The formatter is a line-oriented state
//! machine: it classifies each input line of Outliner markup, buffers
//! consecutive text lines into a pending paragraph, and flushes the
//! buffer through the text filler whenever a mode-changing line appears.
//!
//! Supported items are level-1 to level-3 headings, paragraphs, ordered,
//! unordered and dictionary lists, comments, and verbatim sections.
//! Indentation follows heading levels automatically, and can also be
//! adjusted manually.

use std::io::Write;

use crate::error::{OutlineError, Result};
use crate::fill::fill;
use crate::style::{NumberStyle, TextStyle};

/// Characters stripped from markup line boundaries.
const STRIP: &[char] = &[' ', '\t'];

/// A line containing only this token toggles a verbatim section.
const VERBATIM_TOGGLE: &str = "##";
/// A line containing only this token increments the indentation level.
const INDENT_INC: &str = ">>";
/// A line containing only this token decrements the indentation level.
const INDENT_DEC: &str = "<<";

/// Construction-time options for [`Outliner`].
///
/// The defaults produce 70-column output with 4-space indentation
/// levels, bold all-caps level-1 headings, bold title-case level-2 and
/// level-3 headings, bold bullets and keys, `1.`-style numerals,
/// unspaced list items, spaced dictionary items, and comment lines that
/// are recognized but suppressed.
#[derive(Debug, Clone)]
pub struct OutlinerOptions {
    /// Treat lines starting with '#' as comments. When unset they are
    /// processed like normal text.
    pub process_comments: bool,
    /// Print recognized comments verbatim (with the '#', without
    /// indentation). No effect unless `process_comments` is set.
    pub print_comments: bool,
    /// Maximum line width for paragraphs. Must be greater than 9.
    pub line_width: usize,
    /// Number of spaces per indentation level. Must be greater than 0.
    pub level_width: usize,
    /// Print an empty line between items of ordered and unordered lists.
    pub spaced_list_items: bool,
    /// Print an empty line between items of dictionary lists.
    pub spaced_dict_items: bool,
    /// Largest number accepted as the literal index of an ordered list
    /// item line.
    pub max_first_index: u32,
    /// Style for level-1 headings.
    pub h1_style: TextStyle,
    /// Style for level-2 headings.
    pub h2_style: TextStyle,
    /// Style for level-3 headings.
    pub h3_style: TextStyle,
    /// Style for list bullets. For ordered lists it is applied on top of
    /// the rendered numeral.
    pub bullet_style: TextStyle,
    /// Numeral rendering for ordered lists.
    pub number_style: NumberStyle,
    /// Style for dictionary list keys.
    pub key_style: TextStyle,
}

impl Default for OutlinerOptions {
    fn default() -> Self {
        OutlinerOptions {
            process_comments: true,
            print_comments: false,
            line_width: 70,
            level_width: 4,
            spaced_list_items: false,
            spaced_dict_items: true,
            max_first_index: 9,
            h1_style: TextStyle::bold_yelling(),
            h2_style: TextStyle::bold_title(),
            h3_style: TextStyle::bold_title(),
            bullet_style: TextStyle::bold(),
            number_style: NumberStyle::arabic_dot(),
            key_style: TextStyle::bold(),
        }
    }
}

/// Buffer mode of the markup interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Paragraph,
    Ordered,
    Unordered,
    Dictionary,
}

/// Classification of one non-verbatim markup line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// Whitespace-only line: paragraph/item break.
    Blank,
    /// `>>` alone on a line.
    IndentInc,
    /// `<<` alone on a line.
    IndentDec,
    /// `* `, `** ` or `*** ` prefix; level 1 to 3 and the remainder.
    Heading(usize, &'a str),
    /// `- ` or `+ ` prefix without a dictionary infix.
    Bullet(&'a str),
    /// Bullet whose remainder contains ` :: `; key and description.
    DictItem(&'a str, &'a str),
    /// `N. ` prefix with N within the accepted range; N and remainder.
    Numbered(u32, &'a str),
    /// `#` prefix with comment processing enabled.
    Comment(&'a str),
    /// Anything else: plain text.
    Text(&'a str),
}

/// The outline formatter. Owns an output sink and writes formatted
/// lines to it; all state transitions happen in place.
///
/// ```
/// use liboutline::Outliner;
///
/// let mut out = Vec::new();
/// let mut ol = Outliner::new(&mut out).unwrap();
/// ol.put("* Introduction\nSome text under the heading.").unwrap();
/// ```
pub struct Outliner<W: Write> {
    sink: W,
    process_comments: bool,
    print_comments: bool,
    line_width: usize,
    level_width: usize,
    max_level: usize,
    spaced_list_items: bool,
    spaced_dict_items: bool,
    max_first_index: u32,
    h1_style: TextStyle,
    h2_style: TextStyle,
    h3_style: TextStyle,
    bullet_style: TextStyle,
    number_style: NumberStyle,
    key_style: TextStyle,
    level: usize,
    indent: String,
    /// Ordered list counter; `None` while in an unordered list.
    counter: Option<u32>,
}

impl<W: Write> Outliner<W> {
    /// Create a formatter with default options.
    pub fn new(sink: W) -> Result<Self> {
        Self::with_options(sink, OutlinerOptions::default())
    }

    /// Create a formatter with the given options. Fails if `line_width`
    /// is not greater than 9 or `level_width` is 0.
    pub fn with_options(sink: W, options: OutlinerOptions) -> Result<Self> {
        if options.line_width < 10 {
            return Err(OutlineError::LineWidth(options.line_width));
        }
        if options.level_width == 0 {
            return Err(OutlineError::LevelWidth);
        }
        let max_level = (options.line_width / options.level_width).max(1);
        let mut outliner = Outliner {
            sink,
            process_comments: options.process_comments,
            print_comments: options.print_comments,
            line_width: options.line_width,
            level_width: options.level_width,
            max_level,
            spaced_list_items: options.spaced_list_items,
            spaced_dict_items: options.spaced_dict_items,
            max_first_index: options.max_first_index,
            h1_style: options.h1_style,
            h2_style: options.h2_style,
            h3_style: options.h3_style,
            bullet_style: options.bullet_style,
            number_style: options.number_style,
            key_style: options.key_style,
            level: 0,
            indent: String::new(),
            counter: None,
        };
        outliner.set_level(0);
        Ok(outliner)
    }

    /// Set the style for level-1 headings. Affects subsequent output
    /// only.
    pub fn set_h1_style(&mut self, style: TextStyle) {
        self.h1_style = style;
    }

    /// Set the style for level-2 headings.
    pub fn set_h2_style(&mut self, style: TextStyle) {
        self.h2_style = style;
    }

    /// Set the style for level-3 headings.
    pub fn set_h3_style(&mut self, style: TextStyle) {
        self.h3_style = style;
    }

    /// Set the style for list bullets.
    pub fn set_bullet_style(&mut self, style: TextStyle) {
        self.bullet_style = style;
    }

    /// Set the numeral rendering for ordered lists.
    pub fn set_number_style(&mut self, style: NumberStyle) {
        self.number_style = style;
    }

    /// Set the style for dictionary list keys.
    pub fn set_key_style(&mut self, style: TextStyle) {
        self.key_style = style;
    }

    /// Change the maximum line width. Re-clamps the indentation level.
    pub fn set_line_width(&mut self, line_width: usize) -> Result<()> {
        if line_width < 10 {
            return Err(OutlineError::LineWidth(line_width));
        }
        self.line_width = line_width;
        self.max_level = (line_width / self.level_width).max(1);
        self.set_level(self.level);
        Ok(())
    }

    /// Change the number of spaces per indentation level. Re-clamps the
    /// indentation level.
    pub fn set_level_width(&mut self, level_width: usize) -> Result<()> {
        if level_width == 0 {
            return Err(OutlineError::LevelWidth);
        }
        self.level_width = level_width;
        self.max_level = (self.line_width / level_width).max(1);
        self.set_level(self.level);
        Ok(())
    }

    /// Print a level-1 heading. Following content indents one level
    /// deeper than the heading.
    pub fn h1(&mut self, line: &str) -> Result<()> {
        let style = self.h1_style.clone();
        self.heading(line, 0, style)
    }

    /// Print a level-2 heading.
    pub fn h2(&mut self, line: &str) -> Result<()> {
        let style = self.h2_style.clone();
        self.heading(line, 1, style)
    }

    /// Print a level-3 heading.
    pub fn h3(&mut self, line: &str) -> Result<()> {
        let style = self.h3_style.clone();
        self.heading(line, 2, style)
    }

    /// Print a heading at the given indentation level: blank line,
    /// filled and styled heading lines, then one level deeper for the
    /// content that follows.
    fn heading(&mut self, line: &str, level: usize, style: TextStyle) -> Result<()> {
        self.set_level(level);
        writeln!(self.sink)?;
        let width = self.line_width.saturating_sub(self.indent.len());
        for filled in fill(line, width)? {
            writeln!(self.sink, "{}{}", self.indent, style.apply(&filled))?;
        }
        self.set_level(level + 1);
        Ok(())
    }

    /// Increment the indentation level by 1 (clamped at the maximum
    /// level derived from the line width).
    pub fn increase_indent(&mut self) {
        self.set_level(self.level + 1);
    }

    /// Decrement the indentation level by 1 (floor at 0).
    pub fn decrease_indent(&mut self) {
        self.set_level(self.level.saturating_sub(1));
    }

    /// Set the indentation level and the indent string, clamping.
    fn set_level(&mut self, level: usize) {
        self.level = level.min(self.max_level - 1);
        self.indent = " ".repeat(self.level * self.level_width);
    }

    /// Print a verbatim section: original line breaks are kept and no
    /// re-flowing happens, but every line is indented to the current
    /// indentation level.
    pub fn verbatim(&mut self, text: &str) -> Result<()> {
        let lines: Vec<&str> = text.lines().collect();
        self.verbatim_lines(&lines)
    }

    /// Like [`Outliner::verbatim`], for text already split into lines.
    pub fn verbatim_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
        writeln!(self.sink)?;
        for line in lines {
            writeln!(self.sink, "{}{}", self.indent, line.as_ref())?;
        }
        Ok(())
    }

    /// Start an unordered (bulleted) list.
    pub fn unordered_list(&mut self) -> Result<()> {
        self.counter = None;
        if !self.spaced_list_items {
            writeln!(self.sink)?;
        }
        Ok(())
    }

    /// Start an ordered (numbered) list whose first item carries the
    /// number `first`.
    pub fn ordered_list(&mut self, first: u32) -> Result<()> {
        self.counter = Some(first);
        if !self.spaced_list_items {
            writeln!(self.sink)?;
        }
        Ok(())
    }

    /// Start a dictionary list, i.e. a list where each item is composed
    /// of a key and a description of the key.
    pub fn dictionary_list(&mut self) -> Result<()> {
        if !self.spaced_dict_items {
            writeln!(self.sink)?;
        }
        Ok(())
    }

    /// Print a list item. One of [`Outliner::unordered_list`] or
    /// [`Outliner::ordered_list`] must be called first. In an ordered
    /// list the counter increments by 1 per item.
    pub fn list_item(&mut self, text: &str) -> Result<()> {
        let width = self
            .line_width
            .saturating_sub(self.indent.len() + self.level_width * 2);
        let paragraph = fill(text, width)?;
        if paragraph.is_empty() {
            return Ok(());
        }

        let first_indent = format!("{}{}", self.indent, " ".repeat(self.level_width));
        let other_indent = format!("{}{}", self.indent, " ".repeat(self.level_width * 2));

        if self.spaced_list_items {
            writeln!(self.sink)?;
        }

        // The bullet cell is level_width wide; padding is measured on
        // the unstyled numeral so colourisation never shifts the text.
        let bullet = match self.counter {
            None => format!(
                "{}{}",
                self.bullet_style.apply("-"),
                " ".repeat(self.level_width.saturating_sub(1))
            ),
            Some(n) => {
                self.counter = Some(n + 1);
                let number = self.number_style.apply(n);
                let padding = self.level_width.saturating_sub(number.chars().count());
                format!("{}{}", self.bullet_style.apply(&number), " ".repeat(padding))
            }
        };

        writeln!(self.sink, "{}{}{}", first_indent, bullet, paragraph[0])?;
        for line in &paragraph[1..] {
            writeln!(self.sink, "{}{}", other_indent, line)?;
        }
        Ok(())
    }

    /// Print a dictionary list item. [`Outliner::dictionary_list`] must
    /// be called first. A key shorter than two level widths shares its
    /// line with the start of the description; a longer key pushes the
    /// description to the next line.
    pub fn dictionary_item(&mut self, key: &str, description: &str) -> Result<()> {
        let key_par = fill(key, self.line_width.saturating_sub(self.indent.len()))?;
        let text_par = fill(
            description,
            self.line_width
                .saturating_sub(self.indent.len() + self.level_width * 2),
        )?;
        if key_par.is_empty() || text_par.is_empty() {
            return Ok(());
        }

        if self.spaced_dict_items {
            writeln!(self.sink)?;
        }

        let indent_diff = 2 * self.level_width;
        let other_indent = format!("{}{}", self.indent, " ".repeat(indent_diff));

        for line in &key_par[..key_par.len() - 1] {
            let styled = self.key_style.apply(line);
            writeln!(self.sink, "{}{}", self.indent, styled)?;
        }
        let last = &key_par[key_par.len() - 1];
        let last_len = last.chars().count();
        let styled = self.key_style.apply(last);
        if last_len < indent_diff {
            writeln!(
                self.sink,
                "{}{}{}{}",
                self.indent,
                styled,
                " ".repeat(indent_diff - last_len),
                text_par[0]
            )?;
        } else {
            writeln!(self.sink, "{}{}", self.indent, styled)?;
            writeln!(self.sink, "{}{}", other_indent, text_par[0])?;
        }
        for line in &text_par[1..] {
            writeln!(self.sink, "{}{}", other_indent, line)?;
        }
        Ok(())
    }

    /// Print a single paragraph: blank line, then the text filled to the
    /// width remaining at the current indentation.
    fn paragraph(&mut self, text: &str) -> Result<()> {
        writeln!(self.sink)?;
        let width = self.line_width.saturating_sub(self.indent.len());
        for line in fill(text, width)? {
            writeln!(self.sink, "{}{}", self.indent, line)?;
        }
        Ok(())
    }

    /// Interpret a block of Outliner markup and write the formatted
    /// result to the sink.
    ///
    /// Lines starting with `* `, `** ` or `*** ` are headings; lines
    /// containing only `>>` or `<<` adjust the indentation; a line
    /// containing only `##` toggles a verbatim section; `- `/`+ ` start
    /// unordered list items (or dictionary items when the remainder
    /// contains ` :: `); `N. ` starts ordered list items; lines starting
    /// with `#` are comments (if comment processing is enabled); blank
    /// lines break paragraphs; everything else is paragraph text filled
    /// to the line width.
    pub fn put(&mut self, text: &str) -> Result<()> {
        let mut verbatim = false;
        let mut par: Vec<String> = Vec::new();
        let mut previous_empty = true;
        let mut mode = Mode::Paragraph;
        let mut dict_key: Option<String> = None;

        for raw in text.lines() {
            if raw.trim_matches(STRIP) == VERBATIM_TOGGLE {
                if verbatim {
                    verbatim = false;
                } else {
                    verbatim = true;
                    writeln!(self.sink)?;
                }
                continue;
            }
            if verbatim {
                writeln!(self.sink, "{}{}", self.indent, raw)?;
                continue;
            }

            match self.classify(raw.trim_matches(STRIP)) {
                Line::Blank => {
                    self.flush(&mut par, mode, &dict_key)?;
                    previous_empty = true;
                }
                Line::IndentInc => {
                    self.flush(&mut par, mode, &dict_key)?;
                    mode = Mode::Paragraph;
                    previous_empty = false;
                    self.increase_indent();
                }
                Line::IndentDec => {
                    self.flush(&mut par, mode, &dict_key)?;
                    mode = Mode::Paragraph;
                    previous_empty = false;
                    self.decrease_indent();
                }
                Line::Heading(level, rest) => {
                    self.flush(&mut par, mode, &dict_key)?;
                    mode = Mode::Paragraph;
                    previous_empty = false;
                    match level {
                        1 => self.h1(rest)?,
                        2 => self.h2(rest)?,
                        _ => self.h3(rest)?,
                    }
                }
                Line::Bullet(rest) => {
                    self.flush(&mut par, mode, &dict_key)?;
                    if mode != Mode::Unordered {
                        mode = Mode::Unordered;
                        self.unordered_list()?;
                    }
                    previous_empty = false;
                    par.push(rest.to_string());
                }
                Line::DictItem(key, rest) => {
                    self.flush(&mut par, mode, &dict_key)?;
                    if mode != Mode::Dictionary {
                        mode = Mode::Dictionary;
                        self.dictionary_list()?;
                    }
                    dict_key = Some(key.to_string());
                    previous_empty = false;
                    par.push(rest.to_string());
                }
                Line::Numbered(first, rest) => {
                    self.flush(&mut par, mode, &dict_key)?;
                    if mode != Mode::Ordered {
                        mode = Mode::Ordered;
                        self.ordered_list(first)?;
                    }
                    previous_empty = false;
                    par.push(rest.to_string());
                }
                Line::Comment(line) => {
                    if self.print_comments {
                        writeln!(self.sink, "{}", line)?;
                    }
                }
                Line::Text(line) => {
                    if previous_empty {
                        mode = Mode::Paragraph;
                    }
                    previous_empty = false;
                    par.push(line.to_string());
                }
            }
        }

        self.flush(&mut par, mode, &dict_key)
    }

    /// Classify one stripped, non-verbatim markup line.
    fn classify<'a>(&self, line: &'a str) -> Line<'a> {
        if line.is_empty() {
            return Line::Blank;
        }
        if line == INDENT_INC {
            return Line::IndentInc;
        }
        if line == INDENT_DEC {
            return Line::IndentDec;
        }
        if let Some(rest) = line.strip_prefix("* ") {
            return Line::Heading(1, rest);
        }
        if let Some(rest) = line.strip_prefix("** ") {
            return Line::Heading(2, rest);
        }
        if let Some(rest) = line.strip_prefix("*** ") {
            return Line::Heading(3, rest);
        }
        if let Some(rest) = strip_bullet(line) {
            return match find_dict_infix(rest) {
                Some((begin, end)) => Line::DictItem(&rest[..begin], &rest[end..]),
                None => Line::Bullet(rest),
            };
        }
        if let Some((first, rest)) = self.parse_ordered(line) {
            return Line::Numbered(first, rest);
        }
        if self.process_comments && line.starts_with('#') {
            return Line::Comment(line);
        }
        Line::Text(line)
    }

    /// Match an ordered list item line: digits, a period, then a space
    /// or tab. The literal number must not exceed `max_first_index` and
    /// must carry no superfluous leading zero.
    fn parse_ordered<'a>(&self, line: &'a str) -> Option<(u32, &'a str)> {
        let dot = line.find('.')?;
        let digits = &line[..dot];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if digits.len() > 1 && digits.starts_with('0') {
            return None;
        }
        let rest = &line[dot + 1..];
        if !rest.starts_with(' ') && !rest.starts_with('\t') {
            return None;
        }
        let n: u32 = digits.parse().ok()?;
        if n > self.max_first_index {
            return None;
        }
        Some((n, rest))
    }

    /// Flush the pending paragraph buffer under the given mode. A flush
    /// never renders an empty buffer, and a dictionary flush without a
    /// pending key renders nothing.
    fn flush(&mut self, par: &mut Vec<String>, mode: Mode, dict_key: &Option<String>) -> Result<()> {
        if par.is_empty() {
            return Ok(());
        }
        let text = par.join(" ");
        par.clear();
        match mode {
            Mode::Paragraph => self.paragraph(&text),
            Mode::Ordered | Mode::Unordered => self.list_item(&text),
            Mode::Dictionary => match dict_key {
                Some(key) => self.dictionary_item(key, &text),
                None => Ok(()),
            },
        }
    }
}

/// Strip a bullet marker: '-' or '+' followed by a space or tab.
fn strip_bullet(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some('-') | Some('+'), Some(' ') | Some('\t')) => Some(&line[2..]),
        _ => None,
    }
}

/// Find a dictionary infix: "::" surrounded by one space or tab on each
/// side. Returns the byte span of the whole infix.
fn find_dict_infix(s: &str) -> Option<(usize, usize)> {
    let bytes = s.as_bytes();
    if bytes.len() < 4 {
        return None;
    }
    for i in 0..bytes.len() - 3 {
        if (bytes[i] == b' ' || bytes[i] == b'\t')
            && bytes[i + 1] == b':'
            && bytes[i + 2] == b':'
            && (bytes[i + 3] == b' ' || bytes[i + 3] == b'\t')
        {
            return Some((i, i + 4));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Options with undecorated styles, so expected output carries no
    /// escape sequences.
    fn plain_options() -> OutlinerOptions {
        OutlinerOptions {
            h1_style: TextStyle::yelling(),
            h2_style: TextStyle::title(),
            h3_style: TextStyle::title(),
            bullet_style: TextStyle::normal(),
            key_style: TextStyle::normal(),
            ..OutlinerOptions::default()
        }
    }

    fn run(markup: &str) -> String {
        run_with(markup, plain_options())
    }

    fn run_with(markup: &str, options: OutlinerOptions) -> String {
        let mut out = Vec::new();
        let mut ol = Outliner::with_options(&mut out, options).unwrap();
        ol.put(markup).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_construction_validates_width() {
        let mut out = Vec::new();
        assert!(Outliner::with_options(
            &mut out,
            OutlinerOptions {
                line_width: 5,
                ..plain_options()
            }
        )
        .is_err());
    }

    #[test]
    fn test_construction_validates_level_width() {
        let mut out = Vec::new();
        assert!(Outliner::with_options(
            &mut out,
            OutlinerOptions {
                level_width: 0,
                ..plain_options()
            }
        )
        .is_err());
    }

    #[test]
    fn test_classify_cascade() {
        let mut out = Vec::new();
        let ol = Outliner::with_options(&mut out, plain_options()).unwrap();
        assert_eq!(ol.classify(""), Line::Blank);
        assert_eq!(ol.classify(">>"), Line::IndentInc);
        assert_eq!(ol.classify("<<"), Line::IndentDec);
        assert_eq!(ol.classify("* one"), Line::Heading(1, "one"));
        assert_eq!(ol.classify("** two"), Line::Heading(2, "two"));
        assert_eq!(ol.classify("*** three"), Line::Heading(3, "three"));
        assert_eq!(ol.classify("- item"), Line::Bullet("item"));
        assert_eq!(ol.classify("+ item"), Line::Bullet("item"));
        assert_eq!(ol.classify("-\titem"), Line::Bullet("item"));
        assert_eq!(
            ol.classify("- shoe :: a covering"),
            Line::DictItem("shoe", "a covering")
        );
        assert_eq!(ol.classify("3. third"), Line::Numbered(3, " third"));
        assert_eq!(ol.classify("# note"), Line::Comment("# note"));
        assert_eq!(ol.classify("plain"), Line::Text("plain"));
        // Four or more asterisks are not headings.
        assert_eq!(ol.classify("**** four"), Line::Text("**** four"));
        // Bullets require a separator.
        assert_eq!(ol.classify("-item"), Line::Text("-item"));
    }

    #[test]
    fn test_parse_ordered_bounds() {
        let mut out = Vec::new();
        let ol = Outliner::with_options(&mut out, plain_options()).unwrap();
        assert_eq!(ol.parse_ordered("0. zero"), Some((0, " zero")));
        assert_eq!(ol.parse_ordered("9.\ttab"), Some((9, "\ttab")));
        // Above the configured maximum, or malformed: plain text.
        assert_eq!(ol.parse_ordered("10. ten"), None);
        assert_eq!(ol.parse_ordered("01. one"), None);
        assert_eq!(ol.parse_ordered("1.x"), None);
        assert_eq!(ol.parse_ordered("x. y"), None);
    }

    #[test]
    fn test_heading_and_indent_walk() {
        let output = run("* Title\ntext under it\n>>\nindented text\n<<\nback out");
        assert_eq!(
            output,
            "\nTITLE\n\
             \n    text under it\n\
             \n        indented text\n\
             \n    back out\n"
        );
    }

    #[test]
    fn test_heading_levels_nest() {
        let output = run("* one\n** two\n*** three\ndeep text");
        assert_eq!(
            output,
            "\nONE\n\
             \n    Two\n\
             \n        Three\n\
             \n            deep text\n"
        );
    }

    #[test]
    fn test_ordered_list_renumbers() {
        let output = run("1. first\n1. second\n1. third");
        assert_eq!(
            output,
            "\n    1.  first\n    2.  second\n    3.  third\n"
        );
    }

    #[test]
    fn test_ordered_list_seeds_from_first_index() {
        let output = run("3. first\n1. second");
        assert_eq!(output, "\n    3.  first\n    4.  second\n");
    }

    #[test]
    fn test_unordered_list() {
        let output = run("- one\n+ two\n- three");
        assert_eq!(output, "\n    -   one\n    -   two\n    -   three\n");
    }

    #[test]
    fn test_dictionary_item() {
        let output = run("- shoe :: a covering for the foot");
        assert_eq!(output, "\nshoe    a covering for the foot\n");
    }

    #[test]
    fn test_dictionary_long_key_breaks_line() {
        let output = run("- trousers :: covers the legs");
        assert_eq!(output, "\ntrousers\n        covers the legs\n");
    }

    #[test]
    fn test_dictionary_items_are_spaced() {
        let output = run("- hat :: for the head\n- shoe :: for the foot");
        assert_eq!(
            output,
            "\nhat     for the head\n\nshoe    for the foot\n"
        );
    }

    #[test]
    fn test_dictionary_description_continues() {
        let output = run("- hat :: a covering for the head\n  that is not clothing");
        assert_eq!(
            output,
            "\nhat     a covering for the head that is not clothing\n"
        );
    }

    #[test]
    fn test_blank_line_ends_list_paragraph() {
        let output = run("- a\n- b\n\nplain text");
        assert_eq!(output, "\n    -   a\n    -   b\n\nplain text\n");
    }

    #[test]
    fn test_verbatim_section() {
        let output = run("##\nraw   line\n  indented raw\n##");
        assert_eq!(output, "\nraw   line\n  indented raw\n");
    }

    #[test]
    fn test_verbatim_keeps_current_indent() {
        let output = run(">>\n##\ncode here\n##");
        assert_eq!(output, "\n    code here\n");
    }

    #[test]
    fn test_comments_suppressed_by_default() {
        let output = run("text\n# hidden comment\nmore");
        assert_eq!(output, "\ntext more\n");
    }

    #[test]
    fn test_comments_printed_when_enabled() {
        let output = run_with(
            "text\n# a comment\nmore",
            OutlinerOptions {
                print_comments: true,
                ..plain_options()
            },
        );
        assert_eq!(output, "# a comment\n\ntext more\n");
    }

    #[test]
    fn test_comments_as_text_when_disabled() {
        let output = run_with(
            "text\n# not a comment",
            OutlinerOptions {
                process_comments: false,
                ..plain_options()
            },
        );
        assert_eq!(output, "\ntext # not a comment\n");
    }

    #[test]
    fn test_numbered_above_max_is_text() {
        let output = run("12. twelve");
        assert_eq!(output, "\n12. twelve\n");
    }

    #[test]
    fn test_spaced_list_items() {
        let output = run_with(
            "- one\n- two",
            OutlinerOptions {
                spaced_list_items: true,
                ..plain_options()
            },
        );
        assert_eq!(output, "\n    -   one\n\n    -   two\n");
    }

    #[test]
    fn test_decrease_indent_floors_at_zero() {
        let output = run("<<\n<<\ntext");
        assert_eq!(output, "\ntext\n");
    }

    #[test]
    fn test_indent_level_clamps_at_maximum() {
        let mut markup = String::new();
        for _ in 0..40 {
            markup.push_str(">>\n");
        }
        markup.push_str("deep");
        let output = run_with(
            &markup,
            OutlinerOptions {
                line_width: 40,
                level_width: 12,
                ..plain_options()
            },
        );
        // width 40 / level width 12 allows at most level 2.
        assert_eq!(output, format!("\n{}deep\n", " ".repeat(24)));
    }

    #[test]
    fn test_direct_api_list() {
        let mut out = Vec::new();
        let mut ol = Outliner::with_options(&mut out, plain_options()).unwrap();
        ol.ordered_list(5).unwrap();
        ol.list_item("five").unwrap();
        ol.list_item("six").unwrap();
        drop(ol);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n    5.  five\n    6.  six\n"
        );
    }

    #[test]
    fn test_style_change_affects_later_output_only() {
        let mut out = Vec::new();
        let mut ol = Outliner::with_options(&mut out, plain_options()).unwrap();
        ol.h3("before").unwrap();
        ol.set_h3_style(TextStyle::new(|s| format!("=== {} ===", s)));
        ol.h3("after").unwrap();
        drop(ol);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n        Before\n\n        === after ===\n"
        );
    }

    #[test]
    fn test_long_paragraph_wraps_at_indent() {
        let output = run_with(
            ">>\naaaa bbbb cccc dddd eeee",
            OutlinerOptions {
                line_width: 14,
                ..plain_options()
            },
        );
        // Indent 4 leaves 10 columns: two tokens per line.
        assert_eq!(
            output,
            "\n    aaaa bbbb\n    cccc dddd\n    eeee\n"
        );
    }

    #[test]
    fn test_empty_buffer_never_flushes() {
        let output = run("\n\n\n");
        assert_eq!(output, "");
    }
}
