//! Types for reading LANG string table files
//!

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{self, Read};

use crate::error::{Error, Result};
use crate::hash::fnv1a;
use crate::types::{LangEntry, LangTable};

fn truncated(err: io::Error, context: &'static str) -> Error {
    match err.kind() {
        io::ErrorKind::UnexpectedEof => Error::Truncated { context },
        _ => Error::IOError(err),
    }
}

/// Read one length-prefixed, NUL-terminated string.
fn read_sstring<R: Read>(reader: &mut R, context: &'static str) -> Result<Vec<u8>> {
    let length = reader
        .read_u32::<LittleEndian>()
        .map_err(|e| truncated(e, context))? as usize;

    let mut payload = vec![0u8; length];
    reader
        .read_exact(&mut payload)
        .map_err(|e| truncated(e, context))?;

    let terminator = reader.read_u8().map_err(|e| truncated(e, context))?;
    if terminator != 0x00 {
        return Err(Error::InvalidTerminator { found: terminator });
    }

    Ok(payload)
}

/// LANG file reader
///
/// ```no_run
/// use std::io::prelude::*;
///
/// fn list_entries(reader: impl Read) -> tgc_lang::error::Result<()> {
///     let lang = tgc_lang::LangTableReader::new(reader)?;
///
///     for entry in lang.entries() {
///         println!("{}: {}", &entry.key, &entry.value);
///     }
///
///     Ok(())
/// }
/// ```
pub struct LangTableReader {
    table: LangTable,
}

impl LangTableReader {
    /// Read a LANG file and parse its entries.
    ///
    /// Stored key hashes are consumed but not compared; use [`LangTableReader::verifying`] for
    /// that. Keys and values must still be valid UTF-8.
    pub fn new<R: Read>(reader: R) -> Result<LangTableReader> {
        Self::read(reader, false)
    }

    /// Read a LANG file, failing with [`Error::HashMismatch`] on the first entry whose stored
    /// hash does not match a fresh digest of its key bytes.
    pub fn verifying<R: Read>(reader: R) -> Result<LangTableReader> {
        Self::read(reader, true)
    }

    fn read<R: Read>(mut reader: R, verify: bool) -> Result<LangTableReader> {
        // The size field duplicates what the entry records already encode. Consume it unchecked.
        let _table_size = reader
            .read_u32::<LittleEndian>()
            .map_err(|e| truncated(e, "table size"))?;
        let count = reader
            .read_u32::<BigEndian>()
            .map_err(|e| truncated(e, "entry count"))?;

        let mut entries = Vec::with_capacity(count as usize);
        for index in 0..count as usize {
            let stored = reader
                .read_u32::<BigEndian>()
                .map_err(|e| truncated(e, "key hash"))?;
            let key = read_sstring(&mut reader, "entry key")?;
            let value = read_sstring(&mut reader, "entry value")?;

            if verify {
                let computed = fnv1a(&key);
                if computed != stored {
                    return Err(Error::HashMismatch {
                        index,
                        key: String::from_utf8_lossy(&key).into_owned(),
                        stored,
                        computed,
                    });
                }
            }

            entries.push(LangEntry::new(
                String::from_utf8(key)?,
                String::from_utf8(value)?,
            ));
        }

        // Exactly `count` entries are read; any bytes after the last one are ignored.
        Ok(LangTableReader {
            table: LangTable::new(entries),
        })
    }

    /// Number of entries contained in this file.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether this file contains no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the entries in this file, in file order
    pub fn entries(&self) -> &[LangEntry] {
        &self.table
    }

    /// Try to get a value from this file by its key
    pub fn by_key(&self, key: impl AsRef<str>) -> Option<&str> {
        self.table.by_key(key)
    }

    /// Get a reference to the parsed table
    pub fn table(&self) -> &LangTable {
        &self.table
    }

    /// Consume the reader and return the parsed table
    pub fn into_table(self) -> LangTable {
        self.table
    }
}
