//! Character-level diff of paired lines
//!
//! - `escape`: HTML escaping of raw text
//! - `lcs`: longest common subsequence alignment (score table + backtrack)
//! - `line_render`: turns an alignment into deletion/insertion annotated lines
//! - `pairing`: decides which old line is compared with which new line
//! - `row`: the row records handed to the document writers
//!
//! The same aligner works on characters (within a line pair) and on whole
//! lines (when lines are paired by their longest common subsequence).

pub mod escape;
pub mod lcs;
pub mod line_render;
pub mod pairing;
pub mod row;
