//! FILENAME: comps-engine/src/working_set.rs
//! Working-Set Manager - owns the mutable list of comparable companies.
//!
//! The working set is the canonical record list: ordered by arrival,
//! unique by ticker, mutated only by removal. The reference record is held
//! alongside but is never a member, even if the collaborator's snapshot
//! contained it.

use engine::CompanyRecord;
use log::debug;

/// The mutable record list plus the optional pinned reference record.
///
/// Invariant: no working-set record shares a ticker with the reference
/// record, and tickers within the set are unique (first occurrence wins).
#[derive(Debug, Clone)]
pub struct WorkingSet {
    records: Vec<CompanyRecord>,
    reference: Option<CompanyRecord>,
}

impl WorkingSet {
    /// Builds the working set from the collaborator's initial snapshot.
    ///
    /// Duplicate tickers are dropped (first occurrence wins) and any record
    /// matching the reference ticker is excluded. This is the only way
    /// records enter the set; there is no add operation.
    pub fn new(records: Vec<CompanyRecord>, reference: Option<CompanyRecord>) -> Self {
        let mut unique: Vec<CompanyRecord> = Vec::with_capacity(records.len());

        for record in records {
            if let Some(ref pinned) = reference {
                if record.ticker == pinned.ticker {
                    continue;
                }
            }
            if unique.iter().any(|r| r.ticker == record.ticker) {
                continue;
            }
            unique.push(record);
        }

        debug!(
            "working set initialized with {} records (reference: {:?})",
            unique.len(),
            reference.as_ref().map(|r| r.ticker.as_str())
        );

        WorkingSet {
            records: unique,
            reference,
        }
    }

    /// Records in arrival order.
    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    /// The pinned reference record, if one was supplied.
    pub fn reference(&self) -> Option<&CompanyRecord> {
        self.reference.as_ref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.records.iter().any(|r| r.ticker == ticker)
    }

    /// Removes the record with the given ticker.
    ///
    /// Returns true if a record was removed. Unknown tickers (including the
    /// reference ticker, which is never a member) are a no-op.
    pub fn remove(&mut self, ticker: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.ticker != ticker);
        let removed = self.records.len() != before;

        if removed {
            debug!("removed {ticker} from working set ({} left)", self.records.len());
        }

        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ticker: &str) -> CompanyRecord {
        CompanyRecord::new(ticker, "NYSE", format!("{ticker} Inc"))
    }

    #[test]
    fn test_reference_excluded_by_ticker() {
        let set = WorkingSet::new(
            vec![record("A"), record("REF"), record("B")],
            Some(record("REF")),
        );

        assert_eq!(set.len(), 2);
        assert!(!set.contains("REF"));
        assert_eq!(set.reference().unwrap().ticker, "REF");
    }

    #[test]
    fn test_duplicate_tickers_first_wins() {
        let first = record("A").with_description("first");
        let second = record("A").with_description("second");
        let set = WorkingSet::new(vec![first, second, record("B")], None);

        assert_eq!(set.len(), 2);
        assert_eq!(set.records()[0].description, "first");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut set = WorkingSet::new(vec![record("A"), record("B")], None);

        assert!(set.remove("A"));
        assert!(!set.remove("A"));
        assert!(!set.remove("ZZZ"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_removing_reference_ticker_is_noop() {
        let mut set = WorkingSet::new(vec![record("A")], Some(record("REF")));

        assert!(!set.remove("REF"));
        assert!(set.reference().is_some());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_standalone_reference_is_kept() {
        // Reference ticker absent from the snapshot: still a pinned row.
        let set = WorkingSet::new(vec![record("A")], Some(record("LONER")));
        assert_eq!(set.len(), 1);
        assert_eq!(set.reference().unwrap().ticker, "LONER");
    }
}
