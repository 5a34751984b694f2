//! # verba-stats
//!
//! counts every word it is fed and ranks them deterministically!
//! Most frequent first, ties broken alphabetically.

#![forbid(unsafe_code)]
#![deny(dead_code, unused_imports, unused_mut, missing_docs)]

/// The word statistics collector.
pub mod collector;
