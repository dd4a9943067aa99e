//! Lookup table entries of a `LookupTableValue`.

use std::{collections::HashMap, fmt};

use crate::{utils::SignedHex, Result};

/// One row of a lookup table: every value in `from_values` maps to `to_value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupTableEntry {
    /// Source values of this row
    pub from_values: Vec<i64>,
    /// Result value shared by all sources of this row
    pub to_value: i64,
}

impl LookupTableEntry {
    /// Creates a new table row.
    pub fn new(from_values: impl Into<Vec<i64>>, to_value: i64) -> Self {
        LookupTableEntry {
            from_values: from_values.into(),
            to_value,
        }
    }

    /// Encodes the row into the engine's layout.
    #[must_use]
    pub fn to_raw(&self) -> LookupTableEntryRaw {
        LookupTableEntryRaw {
            from_values: self.from_values.clone(),
            from_count: self.from_values.len(),
            to_value: self.to_value,
        }
    }
}

impl fmt::Display for LookupTableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.from_values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", SignedHex::new(*value))?;
        }
        write!(f, "] -> {}", SignedHex::new(self.to_value))
    }
}

/// Folds a table into its value-to-result mapping.
///
/// Rows are folded in order, so a source value listed in several rows resolves to the result
/// of the last row containing it.
#[must_use]
pub fn build_mapping(table: &[LookupTableEntry]) -> HashMap<i64, i64> {
    table.iter().fold(HashMap::new(), |mut mapping, entry| {
        for from in &entry.from_values {
            mapping.insert(*from, entry.to_value);
        }
        mapping
    })
}

/// An ordered lookup table together with its derived value-to-result mapping.
///
/// The mapping is folded from the rows once, on construction, so [`LookupTable::get`] is a
/// single hash lookup. Two tables are equal when their rows are equal; the mapping is derived
/// and never compared.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    entries: Vec<LookupTableEntry>,
    mapping: HashMap<i64, i64>,
}

impl LookupTable {
    /// Builds a table from its rows, folding the mapping eagerly.
    pub fn new(entries: impl IntoIterator<Item = LookupTableEntry>) -> Self {
        let entries: Vec<LookupTableEntry> = entries.into_iter().collect();
        let mapping = build_mapping(&entries);
        LookupTable { entries, mapping }
    }

    /// The rows in engine order.
    #[must_use]
    pub fn entries(&self) -> &[LookupTableEntry] {
        &self.entries
    }

    /// The derived mapping from every source value to its result.
    #[must_use]
    pub fn mapping(&self) -> &HashMap<i64, i64> {
        &self.mapping
    }

    /// The result `from` maps to, if it is a source value of any row.
    #[must_use]
    pub fn get(&self, from: i64) -> Option<i64> {
        self.mapping.get(&from).copied()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for LookupTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for LookupTable {}

impl fmt::Display for LookupTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// The engine's layout of a lookup table row: a source array with its explicit length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupTableEntryRaw {
    /// Source values
    pub from_values: Vec<i64>,
    /// Number of source values the engine reported
    pub from_count: usize,
    /// Result value
    pub to_value: i64,
}

impl LookupTableEntryRaw {
    /// Convert a `LookupTableEntryRaw` into an owned [`LookupTableEntry`]
    ///
    /// # Errors
    /// Returns an error if `from_count` disagrees with the number of source values.
    pub fn to_owned(&self) -> Result<LookupTableEntry> {
        if self.from_count != self.from_values.len() {
            log::warn!(
                "lookup table row declares {} sources but carries {}",
                self.from_count,
                self.from_values.len()
            );
            return Err(malformed_error!(
                "Lookup table row declares {} sources, found {}",
                self.from_count,
                self.from_values.len()
            ));
        }

        Ok(LookupTableEntry {
            from_values: self.from_values.clone(),
            to_value: self.to_value,
        })
    }
}
