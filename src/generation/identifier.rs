//! # Identifier Derivation
//!
//! Display names become snake_case ids; the registry keeps them unique within
//! one generation run.

use super::GenerationIssue;
use std::collections::HashSet;

/// Derives the catalog id of a display name.
///
/// The name is lowercased and apostrophes are dropped. Every run of characters
/// that are not letters or digits becomes a single underscore; letters and
/// digits outside `[a-z0-9]` are removed. Ids never start or end with an
/// underscore.
///
/// # Examples
///
/// ```
/// use itemforge::derive_identifier;
///
/// assert_eq!(derive_identifier("Iron Sword"), "iron_sword");
/// assert_eq!(derive_identifier("  Dragon's   Plate-Armor! "), "dragons_plate_armor");
/// ```
pub fn derive_identifier(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut separator = false;

    for c in name.trim().to_lowercase().chars() {
        if c == '\'' || c == '\u{2019}' {
            continue;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if separator && !id.is_empty() {
                id.push('_');
            }
            separator = false;
            id.push(c);
        } else if !c.is_alphanumeric() {
            separator = true;
        }
    }

    id
}

/// Ids accepted so far in one generation run.
///
/// Owned by the catalog assembler and dropped with it; nothing is shared
/// between runs.
#[derive(Debug, Clone, Default)]
pub struct IdentifierRegistry {
    ids: HashSet<String>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Fails with `IdentifierCollision` when the id is already taken.
    pub fn check(&self, id: &str) -> Result<(), GenerationIssue> {
        if self.contains(id) {
            Err(GenerationIssue::IdentifierCollision { id: id.to_string() })
        } else {
            Ok(())
        }
    }

    /// Reserves an id, failing if it is already taken.
    pub fn register(&mut self, id: &str) -> Result<(), GenerationIssue> {
        self.check(id)?;
        self.ids.insert(id.to_string());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
