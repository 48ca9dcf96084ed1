//! Error types that can be emitted from this library
//!

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`std::string::FromUtf8Error`]
    #[error(transparent)]
    UTF8Error(#[from] std::string::FromUtf8Error),

    /// Input ended before a field could be read in full
    #[error("unexpected end of input while reading {context}")]
    Truncated {
        /// The field being read when the input ran out
        context: &'static str,
    },

    /// A string terminator byte was present but not `0x00`
    #[error("string terminator is {found:#04x}, expected 0x00")]
    InvalidTerminator {
        /// The byte found in place of the terminator
        found: u8,
    },

    /// A stored key hash does not match the key it accompanies
    #[error("hash mismatch for entry {index} ({key:?}): stored {stored:#010x}, computed {computed:#010x}")]
    HashMismatch {
        /// 0-based position of the offending entry
        index: usize,
        /// The entry's key, decoded best-effort
        key: String,
        /// The hash stored in the file
        stored: u32,
        /// The hash computed from the key bytes
        computed: u32,
    },

    /// A text line has no `:=` separator
    #[error("line {line}: missing `:=` separator")]
    MalformedLine {
        /// 1-based line number
        line: usize,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
