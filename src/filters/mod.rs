//! Filter implementation and its diagnostic report types.
//!
//! # Module Organization
//!
//! ```text
//! filters/
//! ├── tracked.rs   - TrackedBloomFilter (bit array + entry log + reverse index)
//! ├── diagnose.rs  - CollisionReport / PositionRecord
//! └── mod.rs       - This file (public API)
//! ```
//!
//! # Examples
//!
//! ```
//! use bloomtrace::filters::TrackedBloomFilter;
//!
//! let mut filter = TrackedBloomFilter::new(128, 3).unwrap();
//! filter.insert("hello");
//! assert!(filter.contains("hello"));
//! ```

pub mod diagnose;
pub mod tracked;

pub use diagnose::{CollisionReport, PositionRecord};
pub use tracked::TrackedBloomFilter;
