//! Core storage primitives for bloomtrace.
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── bitarray.rs  - Fixed-size bit array implementation
//! └── mod.rs       - This file (public API)
//! ```
//!
//! # Examples
//!
//! ```
//! use bloomtrace::core::BitArray;
//!
//! let mut bits = BitArray::new(1000).unwrap();
//! bits.set(42);
//! assert!(bits.get(42));
//! assert_eq!(bits.count_ones(), 1);
//! ```

pub mod bitarray;

pub use bitarray::BitArray;
