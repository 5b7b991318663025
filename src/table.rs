use crate::error::TallyError;
use crate::record;
use rustc_hash::FxHashMap;

/// Running statistics for one distinct key, kept in fixed-point units
/// (value x10) until formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub key: String,
    pub min: i32,
    pub max: i32,
    pub sum: i64,
    pub count: i32,
}

/// One worker's private fingerprint -> Aggregate mapping. Write-only and
/// merge-only; entries are never removed.
#[derive(Debug)]
pub struct AggregateTable {
    entries: FxHashMap<u64, Aggregate>,
}

impl AggregateTable {
    pub fn new() -> Self {
        // The key universe is small (hundreds), so a fixed pre-size covers it.
        Self {
            entries: FxHashMap::with_capacity_and_hasher(1000, Default::default()),
        }
    }

    /// Fold one observation into the table.
    ///
    /// On first observation of a key, `count` is left at its zero default
    /// and only incremented on subsequent observations. That asymmetry is
    /// inherited from the original algorithm and determines every displayed
    /// mean; see the formatter for the matching divisor.
    pub fn observe(&mut self, key_bytes: &[u8], value: i32) -> Result<(), TallyError> {
        let fp = record::fingerprint(key_bytes);
        match self.entries.get_mut(&fp) {
            Some(agg) => {
                if agg.min > value {
                    agg.min = value;
                }
                if agg.max < value {
                    agg.max = value;
                }
                agg.sum += value as i64;
                agg.count += 1;
            }
            None => {
                let key = std::str::from_utf8(key_bytes)
                    .map_err(|_| {
                        TallyError::Parse(format!(
                            "key is not valid UTF-8: {:?}",
                            String::from_utf8_lossy(key_bytes)
                        ))
                    })?
                    .to_string();
                self.entries.insert(
                    fp,
                    Aggregate {
                        key,
                        min: value,
                        max: value,
                        sum: value as i64,
                        count: 0,
                    },
                );
            }
        }
        Ok(())
    }

    /// Merge another table into this one. For a key present in both, the
    /// `+ 1` re-counts the other table's uncounted first observation, so
    /// the merged count equals what a single sequential table would hold
    /// for the same lines. That equality is what makes the merge
    /// commutative and associative, and the final output independent of
    /// worker count and chunk assignment.
    pub fn merge_from(&mut self, other: AggregateTable) {
        for (fp, theirs) in other.entries {
            match self.entries.get_mut(&fp) {
                Some(ours) => {
                    if theirs.min < ours.min {
                        ours.min = theirs.min;
                    }
                    if theirs.max > ours.max {
                        ours.max = theirs.max;
                    }
                    ours.sum += theirs.sum;
                    ours.count += theirs.count + 1;
                }
                None => {
                    self.entries.insert(fp, theirs);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn aggregates(&self) -> impl Iterator<Item = &Aggregate> {
        self.entries.values()
    }

    pub fn get(&self, key: &str) -> Option<&Aggregate> {
        self.entries.get(&record::fingerprint(key.as_bytes()))
    }
}

impl Default for AggregateTable {
    fn default() -> Self {
        Self::new()
    }
}
