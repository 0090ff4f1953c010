//! ANSI colourisation for terminal output.
//!
//! Styles produced here wrap a string in SGR escape sequences. Three
//! palettes are supported: the classic 16-colour palette (8 named
//! colours plus their bright variants), the 256-colour indexed palette,
//! and a 25-step greyscale ramp mapped onto the indexed palette.

use std::fmt::Write as _;

/// A named colour of the classic 8-colour group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColour {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

impl NamedColour {
    /// Foreground SGR code for this colour.
    fn code(self) -> u8 {
        match self {
            NamedColour::Black => 30,
            NamedColour::Red => 31,
            NamedColour::Green => 32,
            NamedColour::Yellow => 33,
            NamedColour::Blue => 34,
            NamedColour::Purple => 35,
            NamedColour::Cyan => 36,
            NamedColour::White => 37,
        }
    }
}

/// A colour in one of the supported palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    /// One of the 8 named colours.
    Named(NamedColour),
    /// The brighter variant of a named colour.
    Bright(NamedColour),
    /// An index into the 256-colour palette.
    Indexed(u8),
    /// Greyscale ramp position, 0 (black) to 24 (white).
    Greyscale(u8),
}

impl Colour {
    /// Append this colour's SGR tokens. `base` is 38 for foreground and
    /// 48 for background.
    fn push_tokens(self, tokens: &mut Vec<String>, base: u8) {
        match self {
            Colour::Named(c) => {
                // Named colours use the short form: 30..37 foreground,
                // 40..47 background.
                tokens.push((c.code() + base - 38).to_string());
            }
            Colour::Bright(c) => {
                tokens.push((c.code() + 60 + base - 38).to_string());
            }
            Colour::Indexed(n) => {
                tokens.push(base.to_string());
                tokens.push("5".to_string());
                tokens.push(n.to_string());
            }
            Colour::Greyscale(n) => {
                let n = n.min(24);
                let index = if n == 24 { 231 } else { 232 + n as u16 };
                tokens.push(base.to_string());
                tokens.push("5".to_string());
                tokens.push(index.to_string());
            }
        }
    }
}

/// SGR attribute set, applied to strings with [`Sgr::paint`].
///
/// ```
/// use liboutline::colour::{Colour, NamedColour, Sgr};
///
/// let warn = Sgr::new().foreground(Colour::Named(NamedColour::Red)).bold();
/// assert_eq!(warn.paint("careful"), "\x1b[31;1mcareful\x1b[m");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Sgr {
    foreground: Option<Colour>,
    background: Option<Colour>,
    bold: bool,
    italics: bool,
    underline: bool,
    blinking: bool,
    inverted: bool,
    strikethrough: bool,
}

impl Sgr {
    /// An attribute set with nothing enabled.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreground(mut self, colour: Colour) -> Self {
        self.foreground = Some(colour);
        self
    }

    pub fn background(mut self, colour: Colour) -> Self {
        self.background = Some(colour);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italics(mut self) -> Self {
        self.italics = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn blinking(mut self) -> Self {
        self.blinking = true;
        self
    }

    /// Exchange foreground and background colours.
    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    /// Wrap `s` in the escape sequences for this attribute set.
    ///
    /// With no attributes enabled the result is still wrapped (in an
    /// empty SGR and a reset), which is harmless on any terminal.
    pub fn paint(&self, s: &str) -> String {
        let mut tokens: Vec<String> = Vec::new();

        if let Some(colour) = self.foreground {
            colour.push_tokens(&mut tokens, 38);
        }
        if let Some(colour) = self.background {
            colour.push_tokens(&mut tokens, 48);
        }
        if self.bold {
            tokens.push("1".to_string());
        }
        if self.italics {
            tokens.push("3".to_string());
        }
        if self.underline {
            tokens.push("4".to_string());
        }
        if self.blinking {
            tokens.push("5".to_string());
        }
        if self.inverted {
            tokens.push("7".to_string());
        }
        if self.strikethrough {
            tokens.push("9".to_string());
        }

        let mut result = String::with_capacity(s.len() + 16);
        let _ = write!(result, "\x1b[{}m{}\x1b[m", tokens.join(";"), s);
        result
    }
}

/// Make a string bold. Shorthand used by the predefined styles.
pub fn bold(s: &str) -> String {
    Sgr::new().bold().paint(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(bold("x"), "\x1b[1mx\x1b[m");
    }

    #[test]
    fn test_named_foreground() {
        let s = Sgr::new()
            .foreground(Colour::Named(NamedColour::Yellow))
            .paint("x");
        assert_eq!(s, "\x1b[33mx\x1b[m");
    }

    #[test]
    fn test_bright_background() {
        let s = Sgr::new()
            .background(Colour::Bright(NamedColour::Blue))
            .paint("x");
        assert_eq!(s, "\x1b[104mx\x1b[m");
    }

    #[test]
    fn test_indexed_palette() {
        let s = Sgr::new().foreground(Colour::Indexed(208)).paint("x");
        assert_eq!(s, "\x1b[38;5;208mx\x1b[m");
    }

    #[test]
    fn test_greyscale_endpoints() {
        let black = Sgr::new().foreground(Colour::Greyscale(0)).paint("x");
        assert_eq!(black, "\x1b[38;5;232mx\x1b[m");
        let white = Sgr::new().foreground(Colour::Greyscale(24)).paint("x");
        assert_eq!(white, "\x1b[38;5;231mx\x1b[m");
        // Out-of-range positions clamp to white.
        let over = Sgr::new().foreground(Colour::Greyscale(99)).paint("x");
        assert_eq!(over, "\x1b[38;5;231mx\x1b[m");
    }

    #[test]
    fn test_token_order() {
        let s = Sgr::new()
            .foreground(Colour::Named(NamedColour::Red))
            .background(Colour::Named(NamedColour::White))
            .bold()
            .underline()
            .inverted()
            .paint("x");
        assert_eq!(s, "\x1b[31;47;1;4;7mx\x1b[m");
    }
}
