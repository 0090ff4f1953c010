//! Style transforms for headings, bullets, numbers and keys.
//!
//! A style is a pure mapping from a one-line string (or, for ordered
//! list numerals, from an integer) to a one-line string. Styles are
//! cheap to clone and may be shared between any number of formatters;
//! a formatter never mutates a style.

use std::fmt;
use std::sync::Arc;

use crate::colour;
use crate::error::{OutlineError, Result};

/// A pure string-to-string transform.
///
/// The predefined constructors cover the common terminal renditions:
///
/// - [`yelling`](TextStyle::yelling): all-caps text
/// - [`title`](TextStyle::title): each word is capitalised
/// - [`normal`](TextStyle::normal): text is unchanged
/// - [`bold_yelling`](TextStyle::bold_yelling), [`bold_title`](TextStyle::bold_title),
///   [`bold`](TextStyle::bold): the same, in bold
///
/// Anything else can be built with [`TextStyle::new`]:
///
/// ```
/// use liboutline::TextStyle;
///
/// let banner = TextStyle::new(|s| format!("=== {} ===", s));
/// assert_eq!(banner.apply("example"), "=== example ===");
/// ```
#[derive(Clone)]
pub struct TextStyle(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl TextStyle {
    /// Wrap an arbitrary string transform.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        TextStyle(Arc::new(f))
    }

    /// Apply the transform.
    pub fn apply(&self, s: &str) -> String {
        (self.0)(s)
    }

    /// Text is unchanged.
    pub fn normal() -> Self {
        TextStyle::new(str::to_string)
    }

    /// All-caps text.
    pub fn yelling() -> Self {
        TextStyle::new(str::to_uppercase)
    }

    /// Each word is capitalised.
    pub fn title() -> Self {
        TextStyle::new(title_case)
    }

    /// Bold font weight.
    pub fn bold() -> Self {
        TextStyle::new(colour::bold)
    }

    /// All-caps text in bold.
    pub fn bold_yelling() -> Self {
        TextStyle::new(|s| colour::bold(&s.to_uppercase()))
    }

    /// Capitalised words in bold.
    pub fn bold_title() -> Self {
        TextStyle::new(|s| colour::bold(&title_case(s)))
    }
}

impl fmt::Debug for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TextStyle(..)")
    }
}

/// A pure integer-to-string transform for ordered list numerals.
///
/// Predefined constructors come in four numeral systems (arabic,
/// alphabetic, roman, capital roman) times four punctuation flavours,
/// e.g. `arabic_dot` renders 1 as `1.` and `roman_square` renders 4 as
/// `[iv]`.
#[derive(Clone)]
pub struct NumberStyle(Arc<dyn Fn(u32) -> String + Send + Sync>);

impl NumberStyle {
    /// Wrap an arbitrary numeral transform.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(u32) -> String + Send + Sync + 'static,
    {
        NumberStyle(Arc::new(f))
    }

    /// Apply the transform.
    pub fn apply(&self, n: u32) -> String {
        (self.0)(n)
    }

    pub fn arabic_dot() -> Self {
        NumberStyle::new(|n| format!("{}.", n))
    }

    pub fn arabic_colon() -> Self {
        NumberStyle::new(|n| format!("{}:", n))
    }

    pub fn arabic_bracket() -> Self {
        NumberStyle::new(|n| format!("{})", n))
    }

    pub fn arabic_square() -> Self {
        NumberStyle::new(|n| format!("[{}]", n))
    }

    pub fn alpha_dot() -> Self {
        NumberStyle::new(|n| format!("{}.", alpha(n)))
    }

    pub fn alpha_colon() -> Self {
        NumberStyle::new(|n| format!("{}:", alpha(n)))
    }

    pub fn alpha_bracket() -> Self {
        NumberStyle::new(|n| format!("{})", alpha(n)))
    }

    pub fn alpha_square() -> Self {
        NumberStyle::new(|n| format!("[{}]", alpha(n)))
    }

    pub fn roman_dot() -> Self {
        NumberStyle::new(|n| format!("{}.", roman(n).to_lowercase()))
    }

    pub fn roman_colon() -> Self {
        NumberStyle::new(|n| format!("{}:", roman(n).to_lowercase()))
    }

    pub fn roman_bracket() -> Self {
        NumberStyle::new(|n| format!("{})", roman(n).to_lowercase()))
    }

    pub fn roman_square() -> Self {
        NumberStyle::new(|n| format!("[{}]", roman(n).to_lowercase()))
    }

    pub fn cap_roman_dot() -> Self {
        NumberStyle::new(|n| format!("{}.", roman(n)))
    }

    pub fn cap_roman_colon() -> Self {
        NumberStyle::new(|n| format!("{}:", roman(n)))
    }

    pub fn cap_roman_bracket() -> Self {
        NumberStyle::new(|n| format!("{})", roman(n)))
    }

    pub fn cap_roman_square() -> Self {
        NumberStyle::new(|n| format!("[{}]", roman(n)))
    }
}

impl fmt::Debug for NumberStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NumberStyle(..)")
    }
}

/// Capitalise the first letter of every word, lowercase the rest.
/// Word boundaries are non-alphabetic characters.
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }
    result
}

const ROMAN_MAP: &[(u32, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Roman numeral representation of an integer greater than 0.
pub fn arabic_to_roman(n: u32) -> Result<String> {
    if n == 0 {
        return Err(OutlineError::RomanNumeral(n));
    }
    let mut n = n;
    let mut result = String::new();
    for &(arabic, numeral) in ROMAN_MAP {
        while arabic <= n {
            result.push_str(numeral);
            n -= arabic;
        }
    }
    Ok(result)
}

/// Roman numeral for styling. Styles are infallible, so 0 renders as an
/// empty numeral.
fn roman(n: u32) -> String {
    arabic_to_roman(n).unwrap_or_default()
}

/// Alphabetic numeral: 1 is "a", 2 is "b", and so on.
fn alpha(n: u32) -> String {
    char::from_u32(96 + n).unwrap_or('?').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("a level-2 heading"), "A Level-2 Heading");
        assert_eq!(title_case("ALREADY LOUD"), "Already Loud");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_text_styles() {
        assert_eq!(TextStyle::normal().apply("ab cd"), "ab cd");
        assert_eq!(TextStyle::yelling().apply("ab cd"), "AB CD");
        assert_eq!(TextStyle::title().apply("ab cd"), "Ab Cd");
        assert_eq!(TextStyle::bold().apply("x"), "\x1b[1mx\x1b[m");
        assert_eq!(TextStyle::bold_yelling().apply("ab"), "\x1b[1mAB\x1b[m");
        assert_eq!(TextStyle::bold_title().apply("ab"), "\x1b[1mAb\x1b[m");
    }

    #[test]
    fn test_styles_are_shareable() {
        let style = TextStyle::yelling();
        let clone = style.clone();
        assert_eq!(style.apply("a"), clone.apply("a"));
    }

    #[test]
    fn test_arabic_to_roman() {
        assert_eq!(arabic_to_roman(1).unwrap(), "I");
        assert_eq!(arabic_to_roman(4).unwrap(), "IV");
        assert_eq!(arabic_to_roman(9).unwrap(), "IX");
        assert_eq!(arabic_to_roman(14).unwrap(), "XIV");
        assert_eq!(arabic_to_roman(1994).unwrap(), "MCMXCIV");
        assert!(arabic_to_roman(0).is_err());
    }

    #[test]
    fn test_number_styles() {
        assert_eq!(NumberStyle::arabic_dot().apply(1), "1.");
        assert_eq!(NumberStyle::arabic_colon().apply(2), "2:");
        assert_eq!(NumberStyle::arabic_bracket().apply(3), "3)");
        assert_eq!(NumberStyle::arabic_square().apply(4), "[4]");
        assert_eq!(NumberStyle::alpha_dot().apply(1), "a.");
        assert_eq!(NumberStyle::alpha_square().apply(26), "[z]");
        assert_eq!(NumberStyle::roman_dot().apply(4), "iv.");
        assert_eq!(NumberStyle::cap_roman_bracket().apply(9), "IX)");
    }
}
