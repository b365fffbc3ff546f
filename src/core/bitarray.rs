//! Fixed-size bit array backing the tracked filter.
//!
//! # Overview
//!
//! `BitArray` is a fixed-size bit array backed by `Vec<u64>` words. Each
//! 64-bit word stores 64 bits, providing compact storage with O(1) set and
//! test operations.
//!
//! The array is monotonic in practice: the filter only ever sets bits, and
//! no reset API is exposed besides constructing a fresh array. This matches
//! the membership semantics of the tracked filter, which supports no
//! deletion.
//!
//! # Thread Safety
//!
//! **Not thread-safe.** The filter's execution model is single-threaded and
//! synchronous, so the storage uses plain (non-atomic) words.
//!
//! # Memory Layout
//!
//! Bits are packed into 64-bit words in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! ```
//!
//! # Examples
//!
//! ```
//! use bloomtrace::core::BitArray;
//!
//! let mut bits = BitArray::new(100).unwrap();
//! bits.set(42);
//! assert!(bits.get(42));
//! assert!(!bits.get(43));
//! assert_eq!(bits.count_ones(), 1);
//! ```

use crate::error::{BloomTraceError, Result};

/// Fixed-size bit array over `Vec<u64>` words.
///
/// # Type Properties
///
/// - `Clone`: Creates an independent copy
/// - `Debug`: Displays internal structure for debugging
#[derive(Debug, Clone)]
pub struct BitArray {
    /// Words, each storing 64 bits.
    words: Vec<u64>,

    /// Total number of bits in the array.
    len: usize,
}

impl BitArray {
    /// Create a new bit array with the specified number of bits.
    ///
    /// All bits are initialized to 0. The number of 64-bit words allocated
    /// is `⌈num_bits / 64⌉`.
    ///
    /// # Arguments
    ///
    /// * `num_bits` - Number of bits in the array (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns [`BloomTraceError::InvalidFilterSize`] if `num_bits` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomtrace::core::BitArray;
    ///
    /// let bits = BitArray::new(1000).unwrap();
    /// assert_eq!(bits.len(), 1000);
    /// assert_eq!(bits.count_ones(), 0);
    /// ```
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(BloomTraceError::invalid_filter_size(num_bits));
        }

        let num_words = (num_bits + 63) / 64;

        Ok(Self {
            words: vec![0u64; num_words],
            len: num_bits,
        })
    }

    /// Get the number of bits in the array.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if the array has zero length.
    ///
    /// Since `new` requires `num_bits > 0`, this always returns `false` for
    /// a successfully constructed `BitArray`. Provided for API completeness.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Set a bit to 1.
    ///
    /// Idempotent: setting an already-set bit has no additional effect.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize) {
        debug_assert!(
            index < self.len,
            "bit index {} out of bounds (len={})",
            index,
            self.len
        );

        let word = index / 64;
        let offset = index % 64;
        self.words[word] |= 1u64 << offset;
    }

    /// Test whether a bit is set.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `index >= len`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(
            index < self.len,
            "bit index {} out of bounds (len={})",
            index,
            self.len
        );

        let word = index / 64;
        let offset = index % 64;
        (self.words[word] & (1u64 << offset)) != 0
    }

    /// Count the number of set bits (population count).
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomtrace::core::BitArray;
    ///
    /// let mut bits = BitArray::new(128).unwrap();
    /// bits.set(0);
    /// bits.set(64);
    /// bits.set(127);
    /// assert_eq!(bits.count_ones(), 3);
    /// ```
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Calculate the fill rate (fraction of bits set), in `[0.0, 1.0]`.
    #[must_use]
    pub fn fill_rate(&self) -> f64 {
        self.count_ones() as f64 / self.len as f64
    }

    /// Get approximate memory usage in bytes (word storage plus metadata).
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>() + std::mem::size_of::<Self>()
    }
}
