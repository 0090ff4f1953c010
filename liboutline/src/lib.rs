//! Outliner markup engine.
//!
//! A small text-to-text compiler that turns a lightweight plain-text
//! markup language (headings, paragraphs, indentation commands, verbatim
//! blocks, lists, comments) into formatted output for a monospaced,
//! style-limited display surface such as a terminal or plain text
//! editor.
//!
//! # Formatting Pipeline
//!
//! The engine is split in two cooperating components:
//!
//! 1. **Text Filler** ([`fill`], [`paragraphy`], [`align`]): pure
//!    functions that segment raw text into paragraphs and re-flow each
//!    paragraph into lines no wider than a limit, enforcing the rule
//!    that a sentence-ending period is followed by two spaces.
//!
//! 2. **Outline Formatter** ([`Outliner`]): a stateful line-by-line
//!    interpreter that consumes the markup language and calls the filler
//!    and the configured [`TextStyle`]/[`NumberStyle`] transforms to
//!    produce the final output, while tracking indentation level, list
//!    mode, list counters and a verbatim-section toggle.
//!
//! # Example
//!
//! ```
//! use liboutline::Outliner;
//!
//! let mut out = Vec::new();
//! let mut ol = Outliner::new(&mut out).unwrap();
//! ol.put("* Shopping\n- bread\n- cheese").unwrap();
//! ```

pub mod colour;
mod error;
mod fill;
mod outline;
mod style;

pub use error::{OutlineError, Result};
pub use fill::{align, fill, fill_lines, paragraphy, paragraphy_lines, Alignment};
pub use outline::{Outliner, OutlinerOptions};
pub use style::{arabic_to_roman, title_case, NumberStyle, TextStyle};
