use std::collections::BTreeMap;

use tracing::warn;

/// Rows dropped at load because they referenced an entity that does not exist
/// (or repeated a key that must be unique), counted per table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    dropped: BTreeMap<&'static str, usize>,
}

impl IntegrityReport {
    pub fn dropped(&self, table: &str) -> usize {
        self.dropped.get(table).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.dropped.values().sum()
    }

    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }

    pub fn tables(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        self.dropped.iter().map(|(table, count)| (*table, *count))
    }

    /// Keeps the rows `check` accepts. Rejected rows are logged with the reason and counted.
    pub(crate) fn retain<T>(
        &mut self,
        table: &'static str,
        rows: Vec<T>,
        mut check: impl FnMut(&T) -> Result<(), String>,
    ) -> Vec<T> {
        let mut kept = Vec::with_capacity(rows.len());
        for row in rows {
            match check(&row) {
                Ok(()) => kept.push(row),
                Err(reason) => {
                    warn!(table, %reason, "dropping row");
                    *self.dropped.entry(table).or_insert(0) += 1;
                }
            }
        }
        kept
    }
}
