//! Bloom filter with a tracked entry log and per-bit reverse index.
//!
//! # Overview
//!
//! `TrackedBloomFilter` is a classic k-hash Bloom filter that additionally
//! remembers every distinct string it has ever accepted and, for each bit
//! position, which entries set it. The extra bookkeeping buys diagnostic
//! power: [`diagnose`](TrackedBloomFilter::diagnose) can explain a positive
//! membership answer by naming the entries that share bit positions with a
//! candidate.
//!
//! Each configured hash function is an independent cryptographic digest
//! algorithm from the fixed registry in [`crate::hash`]; insertion computes
//! one bit position per algorithm and sets it.
//!
//! ### Operations
//!
//! - **Insert**: log the entry, derive one position per algorithm, set bits,
//!   record the entry reference in the reverse index
//! - **Query**: re-derive the same positions, answer `false` on the first
//!   unset bit (definitive absence), `true` otherwise (possible presence)
//! - **Diagnose**: re-derive the positions and report the co-located entries
//!
//! All operations run in O(k) digest computations (plus O(history) for the
//! duplicate check on insert).
//!
//! # Guarantees
//!
//! - **No false negatives**: once inserted, an entry always tests positive
//! - **Monotonic bits**: a set bit never reverts; there is no deletion
//! - **Idempotent insert**: re-inserting an entry changes nothing
//!
//! # Thread Safety
//!
//! **Not thread-safe.** The filter owns all of its state exclusively and is
//! meant for single-threaded, synchronous use.
//!
//! # Examples
//!
//! ```
//! use bloomtrace::TrackedBloomFilter;
//!
//! let mut filter = TrackedBloomFilter::new(128, 3).unwrap();
//! filter.insert("hello");
//! filter.insert("world");
//!
//! assert!(filter.contains("hello"));
//! assert!(filter.contains("world"));
//! assert_eq!(filter.entry_count(), 2);
//!
//! // Explain why a candidate might collide
//! let report = filter.diagnose("hello");
//! println!("{report}");
//! ```

use crate::core::BitArray;
use crate::error::Result;
use crate::filters::diagnose::{CollisionReport, PositionRecord};
use crate::hash::{hash_to_index, DigestAlgorithm, DIGEST_ALGORITHMS};

/// Bloom filter over strings with an entry log and collision reverse index.
///
/// # Memory Layout
///
/// ```text
/// TrackedBloomFilter {
///     bits: BitArray,                    // m bits packed into u64 words
///     algorithms: Vec<DigestAlgorithm>,  // first k registry algorithms
///     entries: Vec<String>,              // distinct entries, insertion order
///     index: Vec<Vec<usize>>,            // bit position -> entry references
/// }
/// ```
///
/// Entry references are 0-based indices into `entries`; the reverse index
/// and the diagnostic self-exclusion both use this scheme.
///
/// Unlike a plain Bloom filter, memory grows with the number of distinct
/// entries (the log stores every string). This is the cost of being able to
/// explain collisions.
#[derive(Debug, Clone)]
pub struct TrackedBloomFilter {
    /// Bit array of length `size`.
    bits: BitArray,

    /// Configured digest algorithms, a prefix of the registry.
    algorithms: Vec<DigestAlgorithm>,

    /// Every distinct entry ever inserted, in first-insertion order.
    entries: Vec<String>,

    /// For each bit position, the entry references that set it.
    ///
    /// Appends are deduplicated only against the last reference at a
    /// position: within one insert call two algorithms may derive the same
    /// position, and the adjacency check stops the double append. Across
    /// calls duplicates cannot arise because an entry is inserted at most
    /// once.
    index: Vec<Vec<usize>>,
}

impl TrackedBloomFilter {
    /// Default bit-array size used by [`Default`].
    pub const DEFAULT_SIZE: usize = 128;

    /// Default hash-function count used by [`Default`].
    pub const DEFAULT_HASH_COUNT: usize = 3;

    /// Create a new filter.
    ///
    /// Selects the first `hash_count` algorithms from the fixed registry;
    /// counts beyond the registry length are clamped down to it.
    ///
    /// # Arguments
    ///
    /// * `size` - Bit-array length (must be > 0)
    /// * `hash_count` - Number of digest algorithms, clamped to `[0, 3]`
    ///
    /// # Errors
    ///
    /// Returns [`BloomTraceError::InvalidFilterSize`] if `size` is 0.
    ///
    /// [`BloomTraceError::InvalidFilterSize`]: crate::error::BloomTraceError::InvalidFilterSize
    ///
    /// # Degenerate Configuration
    ///
    /// `hash_count = 0` is accepted: such a filter logs entries but sets no
    /// bits, and [`contains`](Self::contains) is vacuously `true` for every
    /// candidate (there is no hash check left to fail). Callers wanting a
    /// functioning membership test should configure at least one algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomtrace::TrackedBloomFilter;
    ///
    /// let filter = TrackedBloomFilter::new(128, 3).unwrap();
    /// assert_eq!(filter.size(), 128);
    /// assert_eq!(filter.hash_count(), 3);
    ///
    /// // Clamped to the registry length
    /// let filter = TrackedBloomFilter::new(128, 10).unwrap();
    /// assert_eq!(filter.hash_count(), 3);
    /// ```
    pub fn new(size: usize, hash_count: usize) -> Result<Self> {
        let bits = BitArray::new(size)?;
        let count = hash_count.min(DIGEST_ALGORITHMS.len());

        Ok(Self {
            bits,
            algorithms: DIGEST_ALGORITHMS[..count].to_vec(),
            entries: Vec::new(),
            index: vec![Vec::new(); size],
        })
    }

    /// Insert an entry.
    ///
    /// No-op when the entry is already present (exact string equality
    /// against the full history). Otherwise the entry is appended to the
    /// log, and for every configured algorithm the derived bit is set and
    /// the new entry reference is recorded in the reverse index.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomtrace::TrackedBloomFilter;
    ///
    /// let mut filter = TrackedBloomFilter::new(128, 3).unwrap();
    /// filter.insert("hello");
    /// filter.insert("hello"); // idempotent
    /// assert_eq!(filter.entry_count(), 1);
    /// ```
    pub fn insert(&mut self, entry: &str) {
        if self.entries.iter().any(|seen| seen == entry) {
            return;
        }

        self.entries.push(entry.to_string());
        let entry_ref = self.entries.len() - 1;

        for &algorithm in &self.algorithms {
            let position = hash_to_index(entry, algorithm, self.bits.len());
            self.bits.set(position);
            // Two algorithms can derive the same position for this entry;
            // only the adjacency check is needed to avoid a double append.
            if self.index[position].last() != Some(&entry_ref) {
                self.index[position].push(entry_ref);
            }
        }
    }

    /// Check if a candidate might have been inserted.
    ///
    /// # Returns
    ///
    /// - `false`: definitely never inserted (some derived bit is unset)
    /// - `true`: possibly inserted (all derived bits set — may be a false
    ///   positive caused by colliding entries)
    ///
    /// With `hash_count = 0` this is vacuously `true`; see
    /// [`new`](Self::new).
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomtrace::TrackedBloomFilter;
    ///
    /// let mut filter = TrackedBloomFilter::new(128, 3).unwrap();
    /// filter.insert("hello");
    ///
    /// assert!(filter.contains("hello"));
    /// ```
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        for &algorithm in &self.algorithms {
            let position = hash_to_index(candidate, algorithm, self.bits.len());
            if !self.bits.get(position) {
                return false;
            }
        }
        true
    }

    /// Explain which entries share bit positions with a candidate.
    ///
    /// For every configured algorithm, derives the candidate's bit position
    /// and collects the entries recorded there, excluding the candidate's
    /// own entry reference when the candidate was previously inserted.
    ///
    /// Never fails: a candidate whose positions were never touched simply
    /// yields records without colliders.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomtrace::TrackedBloomFilter;
    ///
    /// let mut filter = TrackedBloomFilter::new(6, 3).unwrap();
    /// filter.insert("word1");
    /// filter.insert("word2");
    /// filter.insert("word3");
    ///
    /// let report = filter.diagnose("word1");
    /// for record in &report.records {
    ///     // Every collider really does map to the reported position
    ///     assert!(record.colliders.iter().all(|c| c != "word1"));
    /// }
    /// ```
    #[must_use]
    pub fn diagnose(&self, candidate: &str) -> CollisionReport {
        let own_ref = self.entries.iter().position(|seen| seen == candidate);

        let records = self
            .algorithms
            .iter()
            .map(|&algorithm| {
                let position = hash_to_index(candidate, algorithm, self.bits.len());
                let colliders = self.index[position]
                    .iter()
                    .filter(|&&entry_ref| Some(entry_ref) != own_ref)
                    .map(|&entry_ref| self.entries[entry_ref].clone())
                    .collect();

                PositionRecord {
                    algorithm,
                    position,
                    colliders,
                }
            })
            .collect();

        CollisionReport {
            candidate: candidate.to_string(),
            records,
        }
    }

    /// Get the bit-array length.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.bits.len()
    }

    /// Get the number of configured digest algorithms.
    #[must_use]
    #[inline]
    pub fn hash_count(&self) -> usize {
        self.algorithms.len()
    }

    /// Get the configured digest algorithms, in registry order.
    #[must_use]
    pub fn algorithms(&self) -> &[DigestAlgorithm] {
        &self.algorithms
    }

    /// Get the distinct entries inserted so far, in first-insertion order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Get the number of distinct entries inserted so far.
    #[must_use]
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Count the number of bits currently set.
    ///
    /// The hash-count tuner samples this after every insertion; an insert
    /// that leaves the count unchanged flipped no new bit.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// Calculate the fill rate (fraction of bits set), in `[0.0, 1.0]`.
    #[must_use]
    pub fn fill_rate(&self) -> f64 {
        self.bits.fill_rate()
    }

    /// Check if the filter has no set bits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count_set_bits() == 0
    }
}

impl Default for TrackedBloomFilter {
    /// Create a filter with [`Self::DEFAULT_SIZE`] bits and
    /// [`Self::DEFAULT_HASH_COUNT`] algorithms.
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE, Self::DEFAULT_HASH_COUNT)
            .expect("default filter parameters are valid")
    }
}
