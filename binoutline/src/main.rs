//! Command-line tool for aligning, filling and outline-formatting text.
//!
//! Usage: outline [OPTIONS] [FILE]
//!
//! Options:
//!   -m, --mode <MODE>       a (align), f (fill), o (outline) [default: o]
//!   -a, --align <DIR>       l (left), r (right), c (centre) [default: l]
//!   -w, --width <N>         Maximum line width [default: 70]
//!   -l, --level-width <N>   Spaces per indentation level [default: 1]
//!   --comments              Treat '#' lines as comments and drop them
//!   --print-comments        Treat '#' lines as comments and print them
//!   --plain                 Undecorated heading/bullet styles (no ANSI)
//!   -h, --help              Print help
//!   -V, --version           Print version

use liboutline::{
    align, fill, paragraphy, Alignment, Outliner, OutlinerOptions, Result, TextStyle,
};
use std::fs;
use std::io::{self, Read, Write};
use std::process;

/// Formatting mode selected with -m.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Align lines, preserving original line breaks.
    Align,
    /// Fill paragraphs to the line width, then align.
    Fill,
    /// Interpret the input as Outliner markup.
    Outline,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut mode = Mode::Outline;
    let mut alignment = Alignment::Left;
    let mut line_width: usize = 70;
    let mut level_width: usize = 1;
    let mut process_comments = false;
    let mut print_comments = false;
    let mut plain = false;
    let mut input_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("outline {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-m" | "--mode" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: -m requires a mode argument");
                    process::exit(1);
                }
                mode = match args[i].as_str() {
                    "a" => Mode::Align,
                    "f" => Mode::Fill,
                    "o" => Mode::Outline,
                    other => {
                        eprintln!("Error: Unknown mode: {} (expected a, f or o)", other);
                        process::exit(1);
                    }
                };
            }
            "-a" | "--align" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: -a requires a direction argument");
                    process::exit(1);
                }
                let mut chars = args[i].chars();
                alignment = match (chars.next(), chars.next()) {
                    (Some(c), None) => match Alignment::try_from(c) {
                        Ok(a) => a,
                        Err(e) => {
                            eprintln!("Error: {}", e);
                            process::exit(1);
                        }
                    },
                    _ => {
                        eprintln!("Error: Unknown direction: {} (expected l, r or c)", args[i]);
                        process::exit(1);
                    }
                };
            }
            "-w" | "--width" => {
                i += 1;
                line_width = parse_number(&args, i, "-w");
            }
            "-l" | "--level-width" => {
                i += 1;
                level_width = parse_number(&args, i, "-l");
            }
            "--comments" => {
                process_comments = true;
            }
            "--print-comments" => {
                process_comments = true;
                print_comments = true;
            }
            "--plain" => {
                plain = true;
            }
            "-" => {
                // Explicit stdin; input_path stays None.
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            _ => {
                if input_path.is_some() {
                    eprintln!("Error: Multiple input files not supported");
                    process::exit(1);
                }
                input_path = Some(&args[i]);
            }
        }
        i += 1;
    }

    let input: String = match input_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                process::exit(1);
            }
            buffer
        }
    };

    let result = match mode {
        Mode::Align => Ok(align_text(&input, alignment)),
        Mode::Fill => fill_text(&input, alignment, line_width),
        Mode::Outline => outline_text(
            &input,
            line_width,
            level_width,
            process_comments,
            print_comments,
            plain,
        ),
    };

    match result {
        Ok(output) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            if let Err(e) = handle.write_all(output.as_bytes()) {
                eprintln!("Error writing to stdout: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn parse_number(args: &[String], i: usize, flag: &str) -> usize {
    if i >= args.len() {
        eprintln!("Error: {} requires a number argument", flag);
        process::exit(1);
    }
    match args[i].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Error: {} requires a number (got {})", flag, args[i]);
            process::exit(1);
        }
    }
}

/// Align lines, preserving original line breaks and collapsing space
/// clusters.
fn align_text(text: &str, alignment: Alignment) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let mut output = align(&lines, alignment, 4, true).join("\n");
    output.push('\n');
    output
}

/// Fill each paragraph to the line width, keep paragraph breaks, then
/// align. The filler already collapsed spaces and tabs.
fn fill_text(text: &str, alignment: Alignment, line_width: usize) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();
    for par in paragraphy(text) {
        lines.extend(fill(&par, line_width)?);
        lines.push(String::new());
    }
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let mut output = align(&lines, alignment, 0, false).join("\n");
    output.push('\n');
    Ok(output)
}

/// Interpret the input as Outliner markup.
fn outline_text(
    text: &str,
    line_width: usize,
    level_width: usize,
    process_comments: bool,
    print_comments: bool,
    plain: bool,
) -> Result<String> {
    let options = OutlinerOptions {
        line_width,
        level_width,
        process_comments,
        print_comments,
        h1_style: if plain {
            TextStyle::yelling()
        } else {
            TextStyle::bold_yelling()
        },
        h2_style: if plain {
            TextStyle::title()
        } else {
            TextStyle::bold_title()
        },
        h3_style: if plain {
            TextStyle::title()
        } else {
            TextStyle::bold_title()
        },
        bullet_style: if plain {
            TextStyle::normal()
        } else {
            TextStyle::bold()
        },
        key_style: if plain {
            TextStyle::normal()
        } else {
            TextStyle::bold()
        },
        ..OutlinerOptions::default()
    };

    let mut out = Vec::new();
    let mut ol = Outliner::with_options(&mut out, options)?;
    ol.put(text)?;
    drop(ol);
    // The formatter writes valid UTF-8 only.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn print_help() {
    println!(
        "outline - align, fill or outline-format plain text

USAGE:
    outline [OPTIONS] [FILE]

ARGS:
    [FILE]    Input file (reads from stdin if not provided)

OPTIONS:
    -m, --mode <MODE>        What to do with the input [default: o]
                             a: only align lines, preserving original
                                line breaks
                             f: fill lines to the maximum width,
                                preserving paragraph breaks, and align
                             o: interpret the input as Outliner markup

    -a, --align <DIR>        l (left), r (right) or c (centre)
                             [default: l]; ignored in mode o

    -w, --width <N>          Maximum line width [default: 70];
                             ignored in mode a

    -l, --level-width <N>    Spaces per indentation level [default: 1];
                             only used in mode o

    --comments               Treat lines starting with '#' as comments
                             and drop them (mode o)

    --print-comments         Treat lines starting with '#' as comments
                             and print them unformatted (mode o)

    --plain                  Do not emit ANSI escape codes for headings,
                             bullets and keys (mode o)

    -h, --help               Print help

    -V, --version            Print version

OUTLINER MARKUP:
    * text / ** text / *** text    level 1/2/3 heading
    blank line                     paragraph or item break
    >> / << (alone on a line)      indent increase / decrease
    ## (alone on a line)           toggle verbatim section
    - text / + text                unordered list item
    - key :: text                  dictionary list item
    N. text                        ordered list item

EXAMPLES:
    # Format a markup document for the terminal
    outline notes.txt

    # Re-flow a plain text file to 60 columns
    outline -m f -w 60 README.txt

    # Centre a block of lines
    outline -m a -a c banner.txt
"
    );
}
