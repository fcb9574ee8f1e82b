//! Z85 encoding and decoding
//!
//! Every 4-byte group of binary data, read as a big-endian `u32`, maps to
//! exactly one 5-character group of base-85 digits, most significant
//! digit first. Input must be block aligned; there is no padding scheme.

use crate::alphabet::ALPHABET;
use crate::error::{ErrorCategory, ErrorKind, Result, Z85Error};

/// Bytes per block on the binary side.
pub const BINARY_BLOCK_LEN: usize = 4;

/// Characters per block on the text side.
pub const TEXT_BLOCK_LEN: usize = 5;

const BASE: u32 = 85;

/// Length of the text produced for `data_len` bytes, or `None` if unaligned.
pub fn encoded_len(data_len: usize) -> Option<usize> {
    if data_len % BINARY_BLOCK_LEN != 0 {
        return None;
    }
    Some(data_len / BINARY_BLOCK_LEN * TEXT_BLOCK_LEN)
}

/// Length of the bytes produced for `text_len` characters, or `None` if unaligned.
pub fn decoded_len(text_len: usize) -> Option<usize> {
    if text_len % TEXT_BLOCK_LEN != 0 {
        return None;
    }
    Some(text_len / TEXT_BLOCK_LEN * BINARY_BLOCK_LEN)
}

/// Encode a binary frame as Z85 text.
///
/// Fails with [`ErrorKind::InvalidLength`] unless `data.len()` is a multiple of 4.
pub fn encode(data: &[u8]) -> Result<String> {
    let out_len = encoded_len(data.len()).ok_or_else(|| {
        Z85Error::with_kind(
            ErrorCategory::User,
            ErrorKind::InvalidLength,
            format!(
                "binary frame length {} is not divisible by {}",
                data.len(),
                BINARY_BLOCK_LEN
            ),
        )
    })?;

    let mut out = String::with_capacity(out_len);
    for block in data.chunks_exact(BINARY_BLOCK_LEN) {
        let mut value = u32::from_be_bytes([block[0], block[1], block[2], block[3]]);

        // Division yields the least significant digit first.
        let mut digits = [0u8; TEXT_BLOCK_LEN];
        for digit in digits.iter_mut().rev() {
            *digit = ALPHABET.symbol((value % BASE) as u8);
            value /= BASE;
        }
        out.extend(digits.iter().map(|&b| b as char));
    }

    log::trace!("encoded {} bytes into {} characters", data.len(), out.len());
    Ok(out)
}

/// Decode Z85 text into a binary frame.
///
/// Fails with [`ErrorKind::InvalidLength`] unless the text length is a
/// multiple of 5, and with [`ErrorKind::InvalidCharacter`] on the first
/// character outside the alphabet. Lengths and positions are byte offsets.
///
/// Groups whose base-85 value exceeds `u32::MAX` wrap modulo 2^32; valid
/// encoder output never produces them.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let bytes = text.as_bytes();
    let out_len = decoded_len(bytes.len()).ok_or_else(|| {
        Z85Error::with_kind(
            ErrorCategory::User,
            ErrorKind::InvalidLength,
            format!(
                "string frame length {} is not divisible by {}",
                bytes.len(),
                TEXT_BLOCK_LEN
            ),
        )
    })?;

    let mut out = Vec::with_capacity(out_len);
    for (block_index, block) in bytes.chunks_exact(TEXT_BLOCK_LEN).enumerate() {
        let mut value: u32 = 0;
        for (i, &byte) in block.iter().enumerate() {
            let digit = ALPHABET
                .value(byte)
                .ok_or_else(|| invalid_character(text, block_index * TEXT_BLOCK_LEN + i))?;
            value = value.wrapping_add(u32::from(digit));
            if i < TEXT_BLOCK_LEN - 1 {
                value = value.wrapping_mul(BASE);
            }
        }
        out.extend_from_slice(&value.to_be_bytes());
    }

    log::trace!("decoded {} characters into {} bytes", bytes.len(), out.len());
    Ok(out)
}

fn invalid_character(text: &str, position: usize) -> Z85Error {
    // A non-ASCII byte may sit in the middle of a multi-byte character;
    // report the whole character that contains it.
    let start = (0..=position)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    let character = text[start..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
    log::debug!("rejecting character {:?} at position {}", character, start);
    Z85Error::with_kind(
        ErrorCategory::User,
        ErrorKind::InvalidCharacter,
        format!(
            "invalid character {:?} in string frame at position {}",
            character, start
        ),
    )
}
