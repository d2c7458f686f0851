//! Core record types for assistlist.
//!
//! An [`Entry`] pairs a parent/guardian record with a student record. Both
//! records are [`FieldMap`]s: ordered, free-form name/value pairs.

use std::fmt;

/// Ordered collection of unique `(name, value)` string pairs.
///
/// Iteration follows insertion order. Inserting a name that is already
/// present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: Vec<(String, String)>,
}

impl FieldMap {
    /// Create an empty field map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, keeping the original position of an existing name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    /// Look up the value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the map holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// One parent/guardian record paired with one student record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// Parent or guardian information.
    pub parent: FieldMap,
    /// Student information.
    pub student: FieldMap,
}

impl Entry {
    /// Create an entry from its two records.
    #[must_use]
    pub fn new(parent: FieldMap, student: FieldMap) -> Self {
        Self { parent, student }
    }

    /// One-line summary used when the operator picks an entry by number.
    #[must_use]
    pub fn summary(&self) -> EntrySummary<'_> {
        EntrySummary(self)
    }
}

/// Display adapter rendering `<parent last name>, <student first name>...`.
#[derive(Debug, Clone, Copy)]
pub struct EntrySummary<'a>(&'a Entry);

impl fmt::Display for EntrySummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.0.parent.get("Last Name").unwrap_or("None");
        let first = self.0.student.get("First Name").unwrap_or("None");
        write!(f, "{last}, {first}...")
    }
}
