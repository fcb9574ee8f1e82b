//! Z85 - binary-to-text encoding using base-85 arithmetic over 4-byte words

#![forbid(unsafe_code)]

pub mod alphabet;
pub mod cli;
pub mod codec;
pub mod error;
pub mod input;

pub use codec::{decode, encode};
pub use error::{ErrorCategory, ErrorKind, Result, Z85Error};
