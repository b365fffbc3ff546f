//! bloomtrace: a Bloom filter that can explain its false positives.
//!
//! A classic k-hash Bloom filter over strings that additionally keeps an
//! append-only log of every distinct entry and a reverse index from bit
//! position to the entries that set it. It can produce:
//! - **False positives**: May report a string as present when it isn't
//! - **Zero false negatives**: If it says a string was never inserted, it wasn't
//! - **Collision diagnostics**: For any candidate, which entries share a
//!   bit position with it — the reason a false positive can occur
//!
//! # Quick Start
//!
//! ```
//! use bloomtrace::TrackedBloomFilter;
//!
//! let mut filter = TrackedBloomFilter::new(128, 3).unwrap();
//!
//! filter.insert("hello");
//! filter.insert("world");
//!
//! assert!(filter.contains("hello"));   // definitely possible
//! assert!(filter.contains("world"));
//!
//! // Why might a candidate collide?
//! let report = filter.diagnose("hello");
//! println!("{report}");
//! ```
//!
//! # Hash Functions
//!
//! Each of the filter's k hash functions is an independent cryptographic
//! digest algorithm (SHA-1, SHA-256, SHA-512, in that fixed registry order),
//! reduced to a bit index by summing the character codes of the hexadecimal
//! digest rendering. The digests are uniform index generators here, nothing
//! more — no integrity property is relied on. See [`hash`] for the
//! distribution caveat this derivation carries.
//!
//! # Tuning
//!
//! How many hash functions minimize collisions for a given load is an
//! empirical question under this derivation; [`tune::least_collision_hash_count`]
//! answers it by experiment:
//!
//! ```
//! use bloomtrace::tune::least_collision_hash_count;
//!
//! let k = least_collision_hash_count(20, 1280).unwrap();
//! assert!((1..=3).contains(&k));
//! ```
//!
//! # Concurrency
//!
//! Entirely single-threaded and synchronous. A filter owns its bit array,
//! entry log, and reverse index exclusively; wrap it in a lock if you need
//! to share it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_range_loop)]

/// Core storage primitives
pub mod core;

/// Error types and result alias
pub mod error;

/// Filter implementation and diagnostic reports
pub mod filters;

/// Digest algorithms and bit-index derivation
pub mod hash;

/// Empirical hash-count tuning
pub mod tune;

// Re-export commonly used types at crate root
pub use error::{BloomTraceError, Result};
pub use filters::{CollisionReport, PositionRecord, TrackedBloomFilter};
pub use hash::{DigestAlgorithm, DIGEST_ALGORITHMS};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bloomtrace::prelude::*;
///
/// let mut filter = TrackedBloomFilter::new(128, 3).unwrap();
/// filter.insert("hello");
/// assert!(filter.contains("hello"));
/// ```
pub mod prelude {
    pub use crate::error::{BloomTraceError, Result};
    pub use crate::filters::{CollisionReport, PositionRecord, TrackedBloomFilter};
    pub use crate::hash::{hash_to_index, DigestAlgorithm, DIGEST_ALGORITHMS};
    pub use crate::tune::least_collision_hash_count;
}
