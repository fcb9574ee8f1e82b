//! The 85-symbol Z85 alphabet
//!
//! Symbol at position `v` is the representation of digit value `v`. The
//! table is built at compile time together with its inverse, so decoding
//! a symbol is a single array lookup.

/// Symbols for digit values 0 through 84, in order.
const SYMBOLS: &[u8; 85] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

/// The Z85 alphabet, shared by encoder and decoder.
pub static ALPHABET: Alphabet = match Alphabet::new(SYMBOLS) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("invalid Z85 alphabet"),
};

/// Reasons a symbol table is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetError {
    NonAscii { byte: u8, index: usize },
    Duplicate { byte: u8, first: usize, second: usize },
}

/// Forward and reverse lookup tables for the 85 symbols.
#[derive(Debug)]
pub struct Alphabet {
    encode: [u8; 85],
    decode: [Option<u8>; 128],
}

impl Alphabet {
    pub const fn new(symbols: &[u8; 85]) -> Result<Self, AlphabetError> {
        let mut encode = [0u8; 85];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < symbols.len() {
            let byte = symbols[index];
            if byte >= 128 {
                return Err(AlphabetError::NonAscii { byte, index });
            }
            if let Some(first) = decode[byte as usize] {
                return Err(AlphabetError::Duplicate {
                    byte,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = byte;
            decode[byte as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    /// Symbol for a digit value. Panics if `value >= 85`.
    #[inline]
    pub fn symbol(&self, value: u8) -> u8 {
        self.encode[value as usize]
    }

    /// Digit value of a symbol, or `None` if the byte is not in the alphabet.
    #[inline]
    pub fn value(&self, byte: u8) -> Option<u8> {
        self.decode.get(byte as usize).copied().flatten()
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.value(byte).is_some()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.encode
    }
}
