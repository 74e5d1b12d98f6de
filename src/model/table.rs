//! The fixed risk assessment table.

use super::record::{RiskLevel, RiskRecord};
use indexmap::IndexMap;

/// Ordered, id-keyed collection of risk records.
///
/// The table is immutable after construction; iteration order is the
/// insertion order of [`RiskTable::builtin`].
#[derive(Debug, Clone)]
pub struct RiskTable {
    records: IndexMap<String, RiskRecord>,
}

impl RiskTable {
    /// Build the fixed assessment dataset (10 features, A through J).
    #[must_use]
    pub fn builtin() -> Self {
        use RiskLevel::{High, Low, Medium};

        let rows = [
            RiskRecord::new("A", 5, 0.9, 4.5, High),
            RiskRecord::new("B", 4, 0.6, 2.4, Medium),
            RiskRecord::new("C", 2, 0.7, 1.4, Medium),
            RiskRecord::new("D", 3, 0.5, 1.5, Medium),
            RiskRecord::new("E", 1, 0.8, 0.8, Low),
            RiskRecord::new("F", 4, 0.7, 2.8, High),
            RiskRecord::new("G", 3, 0.1, 0.3, Low),
            RiskRecord::new("H", 5, 0.5, 2.5, High),
            RiskRecord::new("I", 3, 0.3, 0.9, Low),
            RiskRecord::new("J", 4, 0.5, 2.0, Medium),
        ];

        let mut records = IndexMap::with_capacity(rows.len());
        for record in rows {
            let previous = records.insert(record.id.clone(), record);
            debug_assert!(previous.is_none(), "duplicate record id");
        }

        Self { records }
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RiskRecord> {
        self.records.get(id)
    }

    /// Iterate records in table order.
    pub fn records(&self) -> impl Iterator<Item = &RiskRecord> {
        self.records.values()
    }

    /// Record ids in table order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.records.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum score across the table, used to normalize the heatmap
    /// color scale. Returns 0.0 for an empty table.
    #[must_use]
    pub fn max_score(&self) -> f64 {
        self.records
            .values()
            .map(|r| r.score)
            .fold(0.0_f64, f64::max)
    }

    /// Score normalized to 0.0..=1.0 against the table maximum.
    #[must_use]
    pub fn normalized_score(&self, score: f64) -> f64 {
        let max = self.max_score();
        if max > 0.0 {
            (score / max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl Default for RiskTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_ten_records() {
        let table = RiskTable::builtin();
        assert_eq!(table.len(), 10);
        assert_eq!(
            table.ids(),
            vec!["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]
        );
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let table = RiskTable::builtin();
        let ids = table.ids();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
    }

    #[test]
    fn test_lookup_known_record() {
        let table = RiskTable::builtin();
        let e = table.get("E").expect("record E exists");
        assert_eq!(e.severity, 1);
        assert!((e.probability - 0.8).abs() < f64::EPSILON);
        assert!((e.score - 0.8).abs() < f64::EPSILON);
        assert_eq!(e.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_lookup_unknown_record() {
        let table = RiskTable::builtin();
        assert!(table.get("Z").is_none());
    }

    #[test]
    fn test_max_score() {
        let table = RiskTable::builtin();
        assert!((table.max_score() - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalized_score_range() {
        let table = RiskTable::builtin();
        for record in table.records() {
            let t = table.normalized_score(record.score);
            assert!((0.0..=1.0).contains(&t), "normalized score out of range");
        }
        assert!((table.normalized_score(4.5) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_invariants() {
        let table = RiskTable::builtin();
        for record in table.records() {
            assert!((1..=5).contains(&record.severity));
            assert!((0.0..=1.0).contains(&record.probability));
            assert!(record.score >= 0.0);
        }
    }
}
