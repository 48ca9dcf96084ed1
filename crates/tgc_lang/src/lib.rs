//! # LANG Format Documentation
//!
//! This crate provides utilities to read and create the **LANG** string table format used by
//! the game *Indiana Jones and the Great Circle*. The LANG format is a custom binary format that
//! stores an ordered list of string keys and values within a single file. LANG files are typically
//! identified with the `.lang` extension.
//!
//! ## File Structure
//!
//! A LANG file consists of a header, followed by a list of entries.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Table Size             | 4 bytes: Byte length of the entry data following the header|
//! | 0x0004         | Entry Count            | 4 bytes: The number of entries in this file                |
//!
//! ### Header
//!
//! The LANG header consists of the following fields:
//!
//! - **Table Size**: A 4-byte little-endian unsigned integer holding the byte length of everything
//!   after the 8-byte header (the entry data). Readers consume this field but do not rely on it;
//!   **Entry Count** alone bounds how much of the file is read, and any bytes past the last entry
//!   are ignored.
//! - **Entry Count**: A 4-byte big-endian unsigned integer indicating the number of entries.
//!
//! ### Entry List
//!
//! After the header, the LANG file contains one record per entry, stored sequentially in a
//! significant order. Each record has the following structure:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Key Hash               | 4 bytes: Big-endian 32-bit FNV-1a digest of the key     |
//! | 0x0004         | Key                    | Length-prefixed string: UTF8 key                        |
//! | ...            | Value                  | Length-prefixed string: UTF8 value                      |
//!
//! ### Length-Prefixed Strings
//!
//! Keys and values share one encoding: a 4-byte little-endian unsigned length `n`, then exactly
//! `n` bytes of payload, then a single terminator byte that must be `0x00`.
//!
//! ### Key Hashes
//!
//! Each record stores the 32-bit FNV-1a digest of the key's raw bytes. Writers always compute the
//! digest fresh from the key; readers compare it against a freshly computed digest only when hash
//! verification is requested.
//!
//! ## Text Representation
//!
//! The [`text`] module converts tables to and from an editable line format, one `key:=value` entry
//! per line with tab, newline, and carriage-return characters escaped. See [`text`] for the exact
//! rules and for the known ambiguity around fields containing a literal `:=`.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.lang`
//! - **Endianness**: Mixed. Little-endian for sizes and lengths, big-endian for the entry count
//!   and key hashes
//!

pub mod error;
pub mod hash;
pub mod read;
pub mod text;
pub mod types;
pub mod write;

pub use read::LangTableReader;
pub use types::{LangEntry, LangTable};
pub use write::LangTableWriter;
