//! Digest algorithms and bit-index derivation.
//!
//! The filter maps a string to a bit position by computing a cryptographic
//! digest, rendering it as a fixed-width hexadecimal string, summing the
//! ASCII codes of that string, and reducing the sum modulo the filter size.
//!
//! # Algorithm Registry
//!
//! The available algorithms form a fixed, ordered, process-wide registry.
//! A filter configured with `hash_count = k` uses the first `k` entries:
//!
//! | Order | Algorithm | Digest width | Hex width |
//! |-------|-----------|--------------|-----------|
//! | 0     | SHA-1     | 160 bits     | 40 chars  |
//! | 1     | SHA-256   | 256 bits     | 64 chars  |
//! | 2     | SHA-512   | 512 bits     | 128 chars |
//!
//! The digests are used purely as uniform index generators; none of their
//! integrity properties are relied on.
//!
//! # Distribution Note
//!
//! Summing hex character codes instead of taking raw digest bits narrows the
//! index distribution (the sum of a fixed number of characters drawn from
//! `0-9a-f` is close to normal, not uniform). This is a known approximation
//! carried by the index derivation contract; callers that depend on the
//! exact index sequence would break if it were replaced with a raw-bit
//! reduction.
//!
//! # Examples
//!
//! ```
//! use bloomtrace::hash::{hash_to_index, DigestAlgorithm};
//!
//! let index = hash_to_index("hello", DigestAlgorithm::Sha256, 128);
//! assert!(index < 128);
//!
//! // Deterministic: same input, same algorithm, same size, same index.
//! assert_eq!(index, hash_to_index("hello", DigestAlgorithm::Sha256, 128));
//! ```

use std::fmt;

use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

/// A digest algorithm from the fixed registry.
///
/// The variants are ordered by digest width; [`DIGEST_ALGORITHMS`] holds
/// them in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// SHA-1 (160-bit digest, 40 hex chars).
    Sha1,
    /// SHA-256 (256-bit digest, 64 hex chars).
    Sha256,
    /// SHA-512 (512-bit digest, 128 hex chars).
    Sha512,
}

/// The fixed, ordered registry of available digest algorithms.
///
/// Immutable process-wide configuration; filter construction selects a
/// prefix of this list and never mutates it.
pub const DIGEST_ALGORITHMS: [DigestAlgorithm; 3] = [
    DigestAlgorithm::Sha1,
    DigestAlgorithm::Sha256,
    DigestAlgorithm::Sha512,
];

impl DigestAlgorithm {
    /// Get the human-readable name of this algorithm.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Get the width of this algorithm's hexadecimal rendering, in characters.
    #[must_use]
    pub const fn hex_width(&self) -> usize {
        match self {
            Self::Sha1 => 40,
            Self::Sha256 => 64,
            Self::Sha512 => 128,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the lowercase hexadecimal digest of `value` under `algorithm`.
///
/// The result always has exactly [`DigestAlgorithm::hex_width`] characters.
///
/// # Examples
///
/// ```
/// use bloomtrace::hash::{hex_digest, DigestAlgorithm};
///
/// let hex = hex_digest(DigestAlgorithm::Sha1, "abc");
/// assert_eq!(hex, "a9993e364706816aba3e25717850c26c9cd0d89d");
/// ```
#[must_use]
pub fn hex_digest(algorithm: DigestAlgorithm, value: &str) -> String {
    match algorithm {
        DigestAlgorithm::Sha1 => hex::encode(Sha1::digest(value.as_bytes())),
        DigestAlgorithm::Sha256 => hex::encode(Sha256::digest(value.as_bytes())),
        DigestAlgorithm::Sha512 => hex::encode(Sha512::digest(value.as_bytes())),
    }
}

/// Map a string to a bit index in `[0, size)` under the given algorithm.
///
/// Sums the ASCII character codes of the hexadecimal digest rendering and
/// reduces the sum modulo `size`. Deterministic and stateless: the same
/// `(value, algorithm, size)` triple always yields the same index, across
/// calls and across filter instances.
///
/// # Panics
///
/// Panics if `size` is 0 (modulo by zero). Filter construction rejects
/// zero sizes before any index is derived.
#[must_use]
pub fn hash_to_index(value: &str, algorithm: DigestAlgorithm, size: usize) -> usize {
    let hex = hex_digest(algorithm, value);
    let sum: usize = hex.bytes().map(usize::from).sum();
    sum % size
}
