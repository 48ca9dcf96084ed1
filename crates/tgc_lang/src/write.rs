//! Types for writing LANG string table files
//!

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::Write;
use tracing::instrument;

use crate::error::Result;
use crate::hash::fnv1a;
use crate::types::LangTable;

/// Write one length-prefixed, NUL-terminated string.
fn write_sstring<W: Write>(writer: &mut W, payload: &[u8]) -> Result<()> {
    writer.write_u32::<LittleEndian>(payload.len() as u32)?;
    writer.write_all(payload)?;
    writer.write_u8(0x00)?;
    Ok(())
}

/// LANG file generator
///
/// Entries are buffered in memory; nothing reaches the underlying writer until
/// [`LangTableWriter::finish`], which emits the header with the final table size and entry count
/// followed by the entry data. The sink therefore only needs [`Write`], not `Seek`.
///
/// ```
/// # fn doit() -> tgc_lang::error::Result<()>
/// # {
/// # use tgc_lang::LangTableWriter;
/// // We use a buffer here, though you'd normally use a `File`
/// let mut buf = Vec::new();
/// let mut lang = LangTableWriter::new(&mut buf);
///
/// lang.add_entry("greeting", "hello")?;
///
/// // Apply the changes you've made.
/// lang.finish()?;
///
/// # Ok(())
/// # }
/// # doit().unwrap();
/// ```
pub struct LangTableWriter<W: Write> {
    inner: W,
    records: Vec<u8>,
    count: u32,
}

impl<W: Write> LangTableWriter<W> {
    /// Initializes the writer.
    ///
    /// Call [`LangTableWriter::add_entry`] for each entry, then [`LangTableWriter::finish`] to
    /// produce the file.
    pub fn new(inner: W) -> LangTableWriter<W> {
        LangTableWriter {
            inner,
            records: Vec::new(),
            count: 0,
        }
    }

    /// Append one entry to the table.
    ///
    /// The key hash is always computed fresh from `key`; a hash carried along from a previously
    /// read file is never reused.
    #[instrument(skip(self, value), err)]
    pub fn add_entry(&mut self, key: &str, value: &str) -> Result<()> {
        self.records.write_u32::<BigEndian>(fnv1a(key.as_bytes()))?;
        write_sstring(&mut self.records, key.as_bytes())?;
        write_sstring(&mut self.records, value.as_bytes())?;
        self.count += 1;
        Ok(())
    }

    /// Append every entry of `table`, in table order.
    pub fn write_table(&mut self, table: &LangTable) -> Result<()> {
        for entry in table.iter() {
            self.add_entry(&entry.key, &entry.value)?;
        }
        Ok(())
    }

    /// Write the header and all buffered entries
    ///
    /// This will return the writer, but one should normally not append any data to the end of the file.
    #[instrument(skip(self), err)]
    pub fn finish(mut self) -> Result<W> {
        self.inner
            .write_u32::<LittleEndian>(self.records.len() as u32)?;
        self.inner.write_u32::<BigEndian>(self.count)?;
        self.inner.write_all(&self.records)?;

        Ok(self.inner)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_str_eq;
    use tracing_test::traced_test;

    use crate::error::Result;
    use crate::write::LangTableWriter;

    #[traced_test]
    #[test]
    fn lang_empty_write() -> Result<()> {
        let expected = vec![0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

        let writer = LangTableWriter::new(Vec::new());
        let result = writer.finish()?;
        assert_eq!(result.len(), expected.len());
        assert_str_eq!(format!("{:02X?}", result), format!("{:02X?}", expected));

        Ok(())
    }

    #[traced_test]
    #[test]
    fn lang_single_entry_write() -> Result<()> {
        #[rustfmt::skip]
        let expected = vec![
            // Header
            0x19, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x01,
            // Entry
            0xAF, 0xD0, 0x71, 0xE5,
            0x04, 0x00, 0x00, 0x00, 0x74, 0x65, 0x73, 0x74, 0x00,
            0x07, 0x00, 0x00, 0x00, 0x74, 0x65, 0x73, 0x74, 0x69, 0x6E, 0x67, 0x00,
        ];

        let mut writer = LangTableWriter::new(Vec::new());
        writer.add_entry("test", "testing")?;

        let result = writer.finish()?;
        assert_eq!(result.len(), expected.len());
        assert_str_eq!(format!("{:02X?}", result), format!("{:02X?}", expected));

        Ok(())
    }

    #[traced_test]
    #[test]
    fn lang_multiple_entries_write() -> Result<()> {
        #[rustfmt::skip]
        let expected = vec![
            // Header
            0x23, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x02,
            // Entries
            0xE4, 0x0C, 0x29, 0x2C,
            0x01, 0x00, 0x00, 0x00, 0x61, 0x00,
            0x01, 0x00, 0x00, 0x00, 0x31, 0x00,

            0xF7, 0x55, 0xA4, 0x38,
            0x04, 0x00, 0x00, 0x00, 0x62, 0x3A, 0x3D, 0x78, 0x00,
            0x01, 0x00, 0x00, 0x00, 0x79, 0x00,
        ];

        let mut writer = LangTableWriter::new(Vec::new());
        writer.add_entry("a", "1")?;
        writer.add_entry("b:=x", "y")?;

        let result = writer.finish()?;
        assert_eq!(result.len(), expected.len());
        assert_str_eq!(format!("{:02X?}", result), format!("{:02X?}", expected));

        Ok(())
    }

    #[test]
    fn header_tracks_size_and_count() -> Result<()> {
        let mut writer = LangTableWriter::new(Vec::new());
        writer.add_entry("menu.start", "Start Game")?;
        writer.add_entry("menu.quit", "Quit")?;
        writer.add_entry("menu.load", "Load Game")?;

        let result = writer.finish()?;

        let size = u32::from_le_bytes(result[0..4].try_into().unwrap());
        let count = u32::from_be_bytes(result[4..8].try_into().unwrap());
        assert_eq!(size as usize, result.len() - 8);
        assert_eq!(count, 3);

        Ok(())
    }

    #[test]
    fn empty_fields_write() -> Result<()> {
        #[rustfmt::skip]
        let expected = vec![
            // Header
            0x0E, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x01,
            // Entry with an empty key and value
            0x81, 0x1C, 0x9D, 0xC5,
            0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00,
        ];

        let mut writer = LangTableWriter::new(Vec::new());
        writer.add_entry("", "")?;

        let result = writer.finish()?;
        assert_str_eq!(format!("{:02X?}", result), format!("{:02X?}", expected));

        Ok(())
    }
}
