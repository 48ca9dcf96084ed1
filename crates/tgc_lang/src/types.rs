use derive_more::derive::{AsRef, Constructor, Deref, IntoIterator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single key/value pair of a LANG string table.
///
/// The on-disk key hash is not stored here; it is recomputed from `key` whenever the entry is
/// written out.
#[derive(Constructor, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LangEntry {
    /// The lookup key, UTF-8 text
    pub key: String,

    /// The localized value, UTF-8 text
    pub value: String,
}

/// An ordered LANG string table.
///
/// Entry order matches file order and is significant: it survives every conversion unchanged.
/// Keys are not required to be unique.
#[derive(Constructor, Clone, Debug, Default, PartialEq, Eq, AsRef, Deref, IntoIterator)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LangTable(Vec<LangEntry>);

impl LangTable {
    /// Try to get a value from this table by its key.
    ///
    /// Returns the first match in table order.
    pub fn by_key(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();
        self.0.iter().find(|e| e.key == key).map(|e| e.value.as_str())
    }
}
