//! Interactive stdin prompts for values missing from the command line.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Print `question` and read one trimmed line from `input`.
///
/// End of input yields an empty answer.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask on the terminal.
pub fn ask_stdin(question: &str) -> io::Result<String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    ask(&mut input, &mut io::stdout(), question)
}

/// Use `given`, else `fallback`, else ask on the terminal.
pub fn path_or_ask(
    given: Option<&PathBuf>,
    fallback: Option<&PathBuf>,
    question: &str,
) -> io::Result<PathBuf> {
    match given.or(fallback) {
        Some(path) => Ok(path.clone()),
        None => ask_stdin(question).map(PathBuf::from),
    }
}

/// Use `given`, else `fallback`, else ask on the terminal.
pub fn text_or_ask(given: Option<&str>, fallback: Option<&str>, question: &str) -> io::Result<String> {
    match given.or(fallback) {
        Some(text) => Ok(text.to_string()),
        None => ask_stdin(question),
    }
}
