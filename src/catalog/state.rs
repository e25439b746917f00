// Catalog state
// An ordered record collection plus its last-updated timestamp. One instance
// per record type, owned by AppState for the lifetime of the process.

use chrono::{DateTime, Utc};

use super::records::CatalogRecord;

/// Aggregate counts for one catalog
#[derive(Debug, Clone, Copy)]
pub struct CatalogStats {
    pub total: usize,
    pub premium: usize,
    pub free: usize,
}

/// In-memory catalog: insertion-ordered records and the append watermark
///
/// `last_updated` starts at construction time and advances on every append,
/// so it is monotonically non-decreasing and always equals the time of the
/// most recent append.
#[derive(Debug, Clone)]
pub struct CatalogState<T> {
    records: Vec<T>,
    last_updated: DateTime<Utc>,
}

impl<T: CatalogRecord + Clone> CatalogState<T> {
    pub fn new(records: Vec<T>, now: DateTime<Utc>) -> Self {
        Self {
            records,
            last_updated: now,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub const fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Filter by exact-match category and premium flag
    ///
    /// Both predicates are optional and combined as a conjunction. Records
    /// without a category never match a category filter. Insertion order is
    /// preserved.
    pub fn filtered(&self, category: Option<&str>, premium: Option<bool>) -> Vec<T> {
        self.records
            .iter()
            .filter(|r| category.is_none_or(|c| r.category() == Some(c)))
            .filter(|r| premium.is_none_or(|p| r.premium() == p))
            .cloned()
            .collect()
    }

    /// Append a record and advance the watermark
    pub fn append(&mut self, record: T, now: DateTime<Utc>) {
        self.records.push(record);
        self.last_updated = now;
    }

    /// Count records created strictly after `cutoff`
    pub fn added_since(&self, cutoff: DateTime<Utc>) -> usize {
        self.records
            .iter()
            .filter(|r| r.created_at() > cutoff)
            .count()
    }

    /// Total/premium/free counts
    pub fn stats(&self) -> CatalogStats {
        let premium = self.records.iter().filter(|r| r.premium()).count();
        CatalogStats {
            total: self.records.len(),
            premium,
            free: self.records.len() - premium,
        }
    }
}
