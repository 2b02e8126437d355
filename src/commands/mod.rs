//! Command implementations
//!
//! - `compare`: Pair the lines of two files, diff every pair character by
//!   character and write the result as an HTML document

pub mod compare;
