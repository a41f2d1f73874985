//! Identifier management using string interning for efficient string storage and comparison
//!
//! This module provides the [`Id`] type with an efficient string-interner based approach.
//! Table, column, and domain names are all interned through the same global interner, so
//! an `Id` is a `Copy` handle that compares and hashes in constant time.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Efficient identifier type using string interning
///
/// This type provides efficient storage and comparison of string identifiers through
/// string interning. Identical names always intern to the same `Id`, regardless of
/// which entity kind (table, column, domain) they name.
///
/// # Examples
///
/// ```
/// use trellis_core::identifier::Id;
///
/// let table_id = Id::new("lexical_entries");
/// let column_id = Id::new("entry_id");
///
/// assert_eq!(table_id, Id::new("lexical_entries"));
/// assert_eq!(table_id, "lexical_entries");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_core::identifier::Id;
    ///
    /// let table_id = Id::new("senses");
    /// let domain_id = Id::new("LEXICAL CORE");
    /// ```
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get()
            .expect("Interner should be initialized before display")
            .lock()
            .expect("Failed to acquire interner lock");
        let name = interner
            .resolve(self.0)
            .expect("Id should exist in interner");
        write!(f, "{name}")
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        *self == Id::new(other)
    }
}

impl PartialEq<Id> for &str {
    fn eq(&self, other: &Id) -> bool {
        other == self
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Id::new(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_interns_to_same_id() {
        let first = Id::new("users");
        let second = Id::new("users");

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_names_are_distinct() {
        assert_ne!(Id::new("users"), Id::new("accounts"));
    }

    #[test]
    fn test_display_round_trip() {
        let id = Id::new("entry_sources");

        assert_eq!(id.to_string(), "entry_sources");
    }

    #[test]
    fn test_str_comparison() {
        let id = Id::new("tags");

        assert_eq!(id, "tags");
        assert_eq!("tags", id);
        assert_ne!(id, "sense_tags");
    }

    #[test]
    fn test_names_with_spaces() {
        let id = Id::new("TAXONOMY & TAGS");

        assert_eq!(id.to_string(), "TAXONOMY & TAGS");
    }
}
