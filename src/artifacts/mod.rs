//! Diff data structures and algorithms
//!
//! - `core`: Shared utilities (pager wrapper)
//! - `diff`: Line pairing, LCS alignment and line annotation
//! - `document`: HTML and terminal renderings of the paired rows

pub mod core;
pub mod diff;
pub mod document;
