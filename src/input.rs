//! Input acquisition for the command-line tool
//!
//! Input comes from trailing command-line words or, when none are given,
//! from a single line of piped standard input.

use crate::error::{ErrorCategory, ErrorKind, Result, Z85Error};
use std::io::{self, BufRead};

/// Usage text printed when no input source is available.
pub const USAGE: &str = "Usage: z85 --mode [encode|decode] \"data\"\nOr: echo \"data\" | z85 --mode [encode|decode]";

/// Trait for obtaining the raw input text from some source
pub trait InputSource {
    fn read_input(&mut self) -> Result<String>;
}

/// Joins command-line words with a single space
pub struct ArgsInputSource {
    args: Vec<String>,
}

impl ArgsInputSource {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }
}

impl InputSource for ArgsInputSource {
    fn read_input(&mut self) -> Result<String> {
        Ok(self.args.join(" "))
    }
}

/// Reads a single line from any buffered reader
pub struct ReaderInputSource {
    reader: Box<dyn BufRead>,
}

impl ReaderInputSource {
    pub fn new(reader: Box<dyn BufRead>) -> Self {
        Self { reader }
    }
}

impl InputSource for ReaderInputSource {
    fn read_input(&mut self) -> Result<String> {
        let mut line = String::new();
        self.reader.read_line(&mut line).map_err(|e| {
            let category = if e.kind() == io::ErrorKind::InvalidData {
                ErrorCategory::User
            } else {
                ErrorCategory::Internal
            };
            Z85Error::with_kind_and_source(
                category,
                ErrorKind::Io,
                format!("error reading standard input: {}", e),
                e,
            )
        })?;

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Reads a line from standard input
///
/// Callers decide whether stdin is usable with [`stdin_is_piped`].
pub struct StdinInputSource;

impl StdinInputSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinInputSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for StdinInputSource {
    fn read_input(&mut self) -> Result<String> {
        ReaderInputSource::new(Box::new(io::stdin().lock())).read_input()
    }
}

/// Whether standard input carries piped data.
///
/// Only pipes and regular files count. Terminals and other character
/// devices such as `/dev/null` do not.
#[cfg(unix)]
pub fn stdin_is_piped() -> Result<bool> {
    use std::fs::File;
    use std::os::fd::AsFd;
    use std::os::unix::fs::FileTypeExt;

    let metadata = io::stdin()
        .as_fd()
        .try_clone_to_owned()
        .map(File::from)
        .and_then(|file| file.metadata())
        .map_err(|e| {
            Z85Error::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::InputUnavailable,
                format!("error checking stdin: {}", e),
                e,
            )
        })?;
    Ok(!metadata.file_type().is_char_device())
}

#[cfg(not(unix))]
pub fn stdin_is_piped() -> Result<bool> {
    use std::io::IsTerminal;

    Ok(!io::stdin().is_terminal())
}

/// Picks the input source: arguments if any were given, otherwise piped stdin.
///
/// Fails with a usage error when there are no arguments and stdin is not piped.
pub fn select_source(args: Vec<String>, stdin_piped: bool) -> Result<Box<dyn InputSource>> {
    if !args.is_empty() {
        log::debug!("reading input from {} command-line argument(s)", args.len());
        Ok(Box::new(ArgsInputSource::new(args)))
    } else if stdin_piped {
        log::debug!("reading input from standard input");
        Ok(Box::new(StdinInputSource::new()))
    } else {
        Err(Z85Error::with_kind(ErrorCategory::User, ErrorKind::Usage, USAGE))
    }
}
