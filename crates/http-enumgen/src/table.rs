//! Insertion-ordered identifier table with first-wins deduplication.

use std::collections::HashMap;

/// One enum member and the string its lookup case returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub identifier: String,
    pub canonical: String,
    /// Explicit enum value; only status members carry one.
    pub discriminant: Option<u16>,
}

/// A repeat that was discarded because its identifier was already taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedDuplicate {
    pub identifier: String,
    pub rejected: String,
    pub kept: String,
}

/// Ordered map from derived identifier to canonical string.
///
/// Iteration order is first-insertion order, which becomes both the
/// declared member order and the case order of the lookup function.
#[derive(Debug, Clone, Default)]
pub struct IdentifierTable {
    entries: Vec<TableEntry>,
    index: HashMap<String, usize>,
    dropped: Vec<DroppedDuplicate>,
}

impl IdentifierTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert without a discriminant. Returns whether the entry was added.
    pub fn insert(&mut self, identifier: &str, canonical: &str) -> bool {
        self.insert_entry(identifier, canonical, None)
    }

    /// Insert with an explicit enum value. Returns whether the entry was added.
    pub fn insert_with_discriminant(
        &mut self,
        identifier: &str,
        canonical: &str,
        discriminant: u16,
    ) -> bool {
        self.insert_entry(identifier, canonical, Some(discriminant))
    }

    fn insert_entry(&mut self, identifier: &str, canonical: &str, discriminant: Option<u16>) -> bool {
        if let Some(&pos) = self.index.get(identifier) {
            let kept = &self.entries[pos];
            tracing::debug!(
                "dropping duplicate identifier {identifier}: '{canonical}' collides with '{}'",
                kept.canonical
            );
            self.dropped.push(DroppedDuplicate {
                identifier: identifier.to_string(),
                rejected: canonical.to_string(),
                kept: kept.canonical.clone(),
            });
            return false;
        }

        self.index.insert(identifier.to_string(), self.entries.len());
        self.entries.push(TableEntry {
            identifier: identifier.to_string(),
            canonical: canonical.to_string(),
            discriminant,
        });
        true
    }

    /// Look up an entry by identifier.
    pub fn get(&self, identifier: &str) -> Option<&TableEntry> {
        self.index.get(identifier).map(|&pos| &self.entries[pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TableEntry> {
        self.entries.iter()
    }

    /// Every repeat discarded so far, in the order it was seen.
    pub fn dropped(&self) -> &[DroppedDuplicate] {
        &self.dropped
    }
}
