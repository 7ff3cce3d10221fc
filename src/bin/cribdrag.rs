//! `cribdrag` — line-driven crib-dragging front end
//!
//! Loads two raw binary ciphertexts (encrypted by XOR against the same
//! repeating keystream) and drops into an interactive command loop: type a
//! guess into either stream, watch the derived bytes appear in the other,
//! swap fragments between streams, and read the interleaved view.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin cribdrag -- msg1.bin msg2.bin
//! cargo run --bin cribdrag -- --width 60 --no-pipes msg1.bin msg2.bin
//! ```
//!
//! Type `help` at the prompt for the command list, `quit` to exit.

use cribdrag::{BufferId, Session, Toggle};
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "cribdrag - crib-dragging editor for XOR-reused-keystream ciphertexts

USAGE:
    cribdrag [OPTIONS] <FILE_A> <FILE_B>

ARGS:
    <FILE_A>    Raw binary file containing the first ciphertext
    <FILE_B>    Raw binary file containing the second ciphertext

OPTIONS:
    -h, --help          Print this help message and exit
    --width <N>         Viewport width in columns (default: 80)
    --no-pipes          Start with the word-boundary ruler hidden
    --no-offsets        Start with the offset ruler hidden

COMMANDS (at the prompt):
    edit top|bottom <offset> <text>     Type a guess at a byte offset
    clear top|bottom <start> <end>      Clear a range back to unknown
    exchange <start> <end>              Swap a range between the streams
    toggle pipes|offsets                Flip a ruler on or off
    width <n>                           Change the viewport width
    show                                Redraw the interleaved view
    help                                Show this command list
    quit                                Exit

EXAMPLES:
    cribdrag msg1.bin msg2.bin
    > edit top 0 The
    > exchange 4 9
    > toggle pipes
";

/// Front-end configuration parsed from command-line arguments.
#[derive(Clone, Debug)]
struct Config {
    path_a: PathBuf,
    path_b: PathBuf,
    width: usize,
    show_pipes: bool,
    show_offsets: bool,
}

/// Result of CLI parsing.
enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut width = 80usize;
        let mut show_pipes = true;
        let mut show_offsets = true;
        let mut files: Vec<PathBuf> = Vec::new();

        let mut args = args.into_iter();
        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--no-pipes" => show_pipes = false,
                "--no-offsets" => show_offsets = false,

                "--width" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error("--width requires a value".to_string()),
                    };
                    match value.parse::<usize>() {
                        Ok(n) if n > 0 => width = n,
                        _ => {
                            return ParseResult::Error(format!(
                                "Invalid --width value: {value} (must be a positive integer)"
                            ));
                        }
                    }
                }

                other => {
                    if other.starts_with('-') {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    files.push(PathBuf::from(&arg));
                }
            }
        }

        if files.len() != 2 {
            return ParseResult::Error(format!(
                "expected exactly two ciphertext files, got {}",
                files.len()
            ));
        }
        let path_b = files.pop().expect("two files checked above");
        let path_a = files.pop().expect("two files checked above");

        ParseResult::Config(Config {
            path_a,
            path_b,
            width,
            show_pipes,
            show_offsets,
        })
    }
}

// ============================================================================
// Command Loop
// ============================================================================

/// What the command loop should do after executing one line.
enum Outcome {
    /// Nothing to show; read the next line.
    Continue,
    /// A mutation happened or a redraw was requested.
    Redraw,
    /// Print a message (errors, help), no redraw.
    Message(String),
    /// Leave the loop.
    Quit,
}

/// Execute one command line against the session.
fn execute(session: &mut Session, width: &mut usize, line: &str) -> Outcome {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Outcome::Continue;
    };

    match command {
        "help" => Outcome::Message(HELP_TEXT.to_string()),
        "quit" | "q" => Outcome::Quit,
        "show" => Outcome::Redraw,

        "width" => match parts.next().map(str::parse::<usize>) {
            Some(Ok(n)) if n > 0 => {
                *width = n;
                Outcome::Redraw
            }
            _ => Outcome::Message("usage: width <n>".to_string()),
        },

        "toggle" => match parts.next().map(str::parse::<Toggle>) {
            Some(Ok(toggle)) => {
                session.toggle(toggle);
                Outcome::Redraw
            }
            Some(Err(err)) => Outcome::Message(err.to_string()),
            None => Outcome::Message("usage: toggle pipes|offsets".to_string()),
        },

        "edit" => {
            // The guess text is everything after the offset, spaces included.
            let mut fields = line.splitn(4, char::is_whitespace).skip(1);
            let (Some(buf), Some(offset), Some(text)) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Outcome::Message("usage: edit top|bottom <offset> <text>".to_string());
            };
            let Some(id) = BufferId::from_str(buf) else {
                return Outcome::Message(format!("no such buffer: {buf}"));
            };
            let Ok(offset) = offset.parse::<usize>() else {
                return Outcome::Message(format!("bad offset: {offset}"));
            };
            let applied = session.edit(id, offset..offset, text.as_bytes());
            if applied.is_empty() {
                Outcome::Message(format!("offset {offset} is past the end of {id}"))
            } else {
                Outcome::Redraw
            }
        }

        "clear" => {
            let (Some(buf), Some(start), Some(end)) = (parts.next(), parts.next(), parts.next())
            else {
                return Outcome::Message("usage: clear top|bottom <start> <end>".to_string());
            };
            let Some(id) = BufferId::from_str(buf) else {
                return Outcome::Message(format!("no such buffer: {buf}"));
            };
            let (Ok(start), Ok(end)) = (start.parse::<usize>(), end.parse::<usize>()) else {
                return Outcome::Message("bad range".to_string());
            };
            session.clear(id, start..end);
            Outcome::Redraw
        }

        "exchange" => {
            let (Some(start), Some(end)) = (parts.next(), parts.next()) else {
                return Outcome::Message("usage: exchange <start> <end>".to_string());
            };
            let (Ok(start), Ok(end)) = (start.parse::<usize>(), end.parse::<usize>()) else {
                return Outcome::Message("bad range".to_string());
            };
            session.exchange(start..end);
            Outcome::Redraw
        }

        other => Outcome::Message(format!("unknown command: {other} (try help)")),
    }
}

fn print_view(session: &Session, width: usize) {
    for line in session.render(width) {
        println!("{line}");
    }
}

fn run(config: &Config) -> cribdrag::Result<()> {
    let mut session = Session::load_files(&config.path_a, &config.path_b)?;
    if !config.show_pipes {
        session.set_toggle(Toggle::Pipes, false);
    }
    if !config.show_offsets {
        session.set_toggle(Toggle::Offsets, false);
    }
    let mut width = config.width;

    print_view(&session, width);

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            // EOF: behave like quit.
            break;
        }

        match execute(&mut session, &mut width, input.trim()) {
            Outcome::Continue => {}
            Outcome::Redraw => print_view(&session, width),
            Outcome::Message(msg) => println!("{msg}"),
            Outcome::Quit => break,
        }
    }
    Ok(())
}

fn main() {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => {
            if let Err(err) = run(&config) {
                eprintln!("cribdrag: {err}");
                std::process::exit(1);
            }
        }
        ParseResult::Help => {
            print!("{HELP_TEXT}");
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        std::iter::once("cribdrag")
            .chain(list.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn test_parse_two_files() {
        match Config::from_args(args(&["a.bin", "b.bin"])) {
            ParseResult::Config(config) => {
                assert_eq!(config.path_a, PathBuf::from("a.bin"));
                assert_eq!(config.path_b, PathBuf::from("b.bin"));
                assert_eq!(config.width, 80);
                assert!(config.show_pipes);
            }
            _ => panic!("expected config"),
        }
    }

    #[test]
    fn test_parse_options() {
        match Config::from_args(args(&["--width", "60", "--no-pipes", "a", "b"])) {
            ParseResult::Config(config) => {
                assert_eq!(config.width, 60);
                assert!(!config.show_pipes);
                assert!(config.show_offsets);
            }
            _ => panic!("expected config"),
        }
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        assert!(matches!(
            Config::from_args(args(&["only-one.bin"])),
            ParseResult::Error(_)
        ));
    }

    #[test]
    fn test_parse_rejects_bad_width() {
        assert!(matches!(
            Config::from_args(args(&["--width", "0", "a", "b"])),
            ParseResult::Error(_)
        ));
    }

    #[test]
    fn test_execute_edit_and_quit() {
        let mut session = Session::load(b"abcd", b"wxyz");
        let mut width = 80;

        assert!(matches!(
            execute(&mut session, &mut width, "edit top 0 Hi"),
            Outcome::Redraw
        ));
        assert!(session.top().get(0).unwrap().is_known());

        assert!(matches!(
            execute(&mut session, &mut width, "quit"),
            Outcome::Quit
        ));
    }

    #[test]
    fn test_execute_preserves_spaces_in_guess() {
        let mut session = Session::load(b"abcdefgh", b"stuvwxyz");
        let mut width = 80;
        execute(&mut session, &mut width, "edit top 0 a b");
        assert_eq!(session.top().get(1).unwrap().byte(), Some(b' '));
    }

    #[test]
    fn test_execute_unknown_command() {
        let mut session = Session::load(b"ab", b"cd");
        let mut width = 80;
        assert!(matches!(
            execute(&mut session, &mut width, "frobnicate"),
            Outcome::Message(_)
        ));
    }
}
