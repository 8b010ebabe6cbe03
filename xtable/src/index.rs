use std::collections::HashMap;

use crate::row::Row;

/// Identity hash -> row position, for rows that carry metadata.
///
/// When several rows share a hash the lowest position wins.
#[derive(Debug, Clone, Default)]
pub struct RowIndex {
    positions: HashMap<u64, usize>,
}

impl RowIndex {
    pub fn build(rows: &[Row]) -> Self {
        let mut positions = HashMap::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if let Some(hash) = row.identity_hash() {
                positions.entry(hash).or_insert(i);
            }
        }
        Self { positions }
    }

    pub fn get(&self, hash: u64) -> Option<usize> {
        self.positions.get(&hash).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Repair the index after `removed` was taken out of position `index`.
    /// `rows` is the table after the removal.
    pub fn remove_at(&mut self, rows: &[Row], removed: &Row, index: usize) {
        for pos in self.positions.values_mut() {
            if *pos > index {
                *pos -= 1;
            }
        }

        let Some(hash) = removed.identity_hash() else {
            return;
        };
        if self.positions.get(&hash) != Some(&index) {
            return;
        }
        self.positions.remove(&hash);
        // a later duplicate becomes the first occurrence
        if let Some(next) = rows.iter().position(|r| r.identity_hash() == Some(hash)) {
            self.positions.insert(hash, next);
        }
    }
}
