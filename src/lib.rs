//! Closed integer interval consolidation and membership queries.
//!
//! A [`RawIntervals`] list holds ranges exactly as they were read. Normalizing
//! it sorts and merges overlapping ranges into an [`IntervalSet`], which answers
//! point queries by binary search and reports the number of covered integers.
//!
//! ```
//! use fresh_intervals::{Interval, RawIntervals};
//!
//! let raw: RawIntervals<u64> = vec![
//!     Interval::new(5, 10)?,
//!     Interval::new(1, 3)?,
//!     Interval::new(8, 12)?,
//! ]
//! .into_iter()
//! .collect();
//!
//! let set = raw.normalize()?;
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.total_length()?, 11);
//! assert!(set.contains(&7));
//! # Ok::<(), fresh_intervals::Error>(())
//! ```

mod error;
pub use error::Error;

mod interval;
pub use interval::Interval;

pub mod collections;
pub use collections::{total_length, Entry, IntervalSet, RawIntervals};

pub mod inventory;
pub use inventory::Inventory;
