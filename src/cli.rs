//! Command-line operations
//!
//! Glue between an input source, the codec, and an output stream. In encode
//! mode the input is a hexadecimal string; in decode mode it is Z85 text and
//! the raw decoded bytes are written out.

use crate::codec;
use crate::error::{ErrorCategory, ErrorKind, Result, Z85Error};
use crate::input::InputSource;
use clap::ValueEnum;
use std::io::{self, Write};

/// Operation selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Hex-encoded bytes in, Z85 text out
    Encode,
    /// Z85 text in, raw bytes out
    Decode,
}

/// Read input from `source`, run `mode` over it and write the result to `out`.
pub fn run(mode: Mode, source: &mut dyn InputSource, out: &mut dyn Write) -> Result<()> {
    let input = source.read_input()?;
    log::debug!("{:?}: read {} bytes of input", mode, input.len());

    match mode {
        Mode::Encode => run_encode(&input, out)?,
        Mode::Decode => run_decode(&input, out)?,
    }

    out.flush().map_err(|e| write_error("failed to flush output", e))
}

/// Parse `input` as hex, Z85-encode it and write the text followed by a newline.
pub fn run_encode(input: &str, out: &mut dyn Write) -> Result<()> {
    let data = hex::decode(input.trim()).map_err(|e| {
        Z85Error::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::HexParse,
            format!("error decoding hex input: {}", e),
            e,
        )
    })?;
    let encoded = codec::encode(&data).map_err(|e| {
        let msg = format!("error encoding data: {}", e);
        e.with_context(msg)
    })?;
    writeln!(out, "{}", encoded).map_err(|e| write_error("error writing encoded data", e))
}

/// Z85-decode `input` and write the raw bytes.
pub fn run_decode(input: &str, out: &mut dyn Write) -> Result<()> {
    let decoded = codec::decode(input).map_err(|e| {
        let msg = format!("error decoding data: {}", e);
        e.with_context(msg)
    })?;
    out.write_all(&decoded)
        .map_err(|e| write_error("error writing decoded data", e))
}

fn write_error(msg: &str, err: io::Error) -> Z85Error {
    Z85Error::with_kind_and_source(
        ErrorCategory::Internal,
        ErrorKind::Io,
        format!("{}: {}", msg, err),
        err,
    )
}
