//! Collision diagnostic report produced by [`TrackedBloomFilter::diagnose`].
//!
//! A report explains why a candidate string may test positive: for each
//! configured digest algorithm it lists the derived bit position and every
//! previously-inserted entry that also set that position.
//!
//! Computation and presentation are kept separate: the filter builds the
//! structured report, and rendering is a pure formatting concern implemented
//! via [`fmt::Display`]. This keeps the data inspectable in tests without
//! parsing strings.
//!
//! [`TrackedBloomFilter::diagnose`]: crate::filters::TrackedBloomFilter::diagnose
//!
//! # Examples
//!
//! ```
//! use bloomtrace::TrackedBloomFilter;
//!
//! let mut filter = TrackedBloomFilter::new(6, 3).unwrap();
//! filter.insert("word1");
//! filter.insert("word2");
//!
//! let report = filter.diagnose("word1");
//! assert_eq!(report.records.len(), 3);
//!
//! // One line per hash position
//! let rendered = report.to_string();
//! assert_eq!(rendered.lines().count(), 3);
//! ```

use std::fmt;

use crate::hash::DigestAlgorithm;

/// Co-location record for one hash position of a diagnosed candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRecord {
    /// Algorithm that derived this position.
    pub algorithm: DigestAlgorithm,

    /// Bit position the candidate maps to under `algorithm`.
    pub position: usize,

    /// Entries (other than the candidate itself) recorded at this position,
    /// in insertion order. Empty when no other entry ever set this bit.
    pub colliders: Vec<String>,
}

impl PositionRecord {
    /// Whether any other entry shares this bit position.
    #[must_use]
    pub fn has_collision(&self) -> bool {
        !self.colliders.is_empty()
    }
}

/// Structured collision report for a candidate string.
///
/// Contains one [`PositionRecord`] per configured digest algorithm, in
/// registry order. Produced by
/// [`TrackedBloomFilter::diagnose`](crate::filters::TrackedBloomFilter::diagnose).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionReport {
    /// The candidate string the report was computed for.
    pub candidate: String,

    /// One record per configured algorithm, in registry order.
    pub records: Vec<PositionRecord>,
}

impl CollisionReport {
    /// Whether no position shares a bit with any other entry.
    ///
    /// A clean report means a positive membership test for this candidate
    /// cannot be explained by collisions with other entries.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.records.iter().all(|record| !record.has_collision())
    }

    /// Total number of collider references across all positions.
    #[must_use]
    pub fn collider_count(&self) -> usize {
        self.records.iter().map(|record| record.colliders.len()).sum()
    }
}

impl fmt::Display for CollisionReport {
    /// Render the report as one line per hash position.
    ///
    /// Positions without colliders say so explicitly rather than printing
    /// an empty list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if record.has_collision() {
                write!(
                    f,
                    "{} -> bit {}: shared with {}",
                    record.algorithm,
                    record.position,
                    record.colliders.join(", ")
                )?;
            } else {
                write!(
                    f,
                    "{} -> bit {}: no collision observed at this position",
                    record.algorithm, record.position
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(algorithm: DigestAlgorithm, position: usize, colliders: &[&str]) -> PositionRecord {
        PositionRecord {
            algorithm,
            position,
            colliders: colliders.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_is_clean_empty_records() {
        let report = CollisionReport {
            candidate: "x".to_string(),
            records: vec![record(DigestAlgorithm::Sha1, 3, &[])],
        };
        assert!(report.is_clean());
        assert_eq!(report.collider_count(), 0);
    }

    #[test]
    fn test_is_clean_with_colliders() {
        let report = CollisionReport {
            candidate: "x".to_string(),
            records: vec![
                record(DigestAlgorithm::Sha1, 3, &[]),
                record(DigestAlgorithm::Sha256, 5, &["other"]),
            ],
        };
        assert!(!report.is_clean());
        assert_eq!(report.collider_count(), 1);
    }

    #[test]
    fn test_display_one_line_per_position() {
        let report = CollisionReport {
            candidate: "x".to_string(),
            records: vec![
                record(DigestAlgorithm::Sha1, 3, &["a", "b"]),
                record(DigestAlgorithm::Sha256, 5, &[]),
                record(DigestAlgorithm::Sha512, 1, &["c"]),
            ],
        };

        let rendered = report.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "sha1 -> bit 3: shared with a, b");
        assert_eq!(
            lines[1],
            "sha256 -> bit 5: no collision observed at this position"
        );
        assert_eq!(lines[2], "sha512 -> bit 1: shared with c");
    }

    #[test]
    fn test_display_empty_report() {
        // hash_count = 0 configuration produces a report with no records
        let report = CollisionReport {
            candidate: "x".to_string(),
            records: vec![],
        };
        assert_eq!(report.to_string(), "");
        assert!(report.is_clean());
    }
}
