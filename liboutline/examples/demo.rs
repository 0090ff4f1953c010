//! Demo of the Outliner markup engine. Prints a formatted tour of the
//! markup language to stdout.

use std::io;

use liboutline::{Outliner, Result, TextStyle};

fn main() -> Result<()> {
    let stdout = io::stdout();
    let mut ol = Outliner::new(stdout.lock())?;

    ol.h1("liboutline demo")?;

    ol.put(
        "The Outliner is a document formatter for text displayed on a \
         purely text-based medium, like the command line terminal or the \
         text editor.

         The premise is that the text-based environment provides only one \
         font size and very limited support for styles and colours.  \
         Hence, structure is achieved solely through indentation.",
    )?;

    ol.put(
        "* headings\n\n\
         Lines starting with asterisks are formatted as headings.  Three \
         levels are supported:\n\
         ##\n\
         * level-1 heading\n\
         ** level-2 heading\n\
         *** level-3 heading\n\
         ##",
    )?;

    ol.put(
        "* lists

         Ordered, unordered and dictionary lists:

         1. first
         1. second (the stated number is ignored)

         - a bullet
         + another bullet

         - hat :: a covering for the head
         - shoe :: a covering for the foot",
    )?;

    ol.h2("custom styles")?;
    ol.set_h3_style(TextStyle::new(|s| format!("=== {} ===", s)));
    ol.h3("like this one")?;

    ol.put(
        "Any function from string to string works as a style, and styles \
         can be swapped at any time.  Only output rendered afterwards is \
         affected.",
    )?;

    Ok(())
}
