//! Side-by-side, character-level text diff
//!
//! `sidediff` pairs the lines of two files and, for every pair that differs,
//! aligns the two lines character by character with a longest common
//! subsequence. The result is rendered as an HTML table (and optionally as a
//! colored terminal preview) in which removed characters are struck out on the
//! left and inserted characters are highlighted on the right.
//!
//! - `areas`: input files and the comparison session that owns the output
//! - `artifacts`: the alignment algorithms, the row model and the renderers
//! - `commands`: the `compare` pipeline driven by the binary
//! - `errors`: error type shared by the library

use clap::ValueEnum;

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

/// How the lines of the two inputs are paired before the character diff runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LineAlignment {
    /// Line `i` of the old file is always compared with line `i` of the new file
    #[default]
    Positional,
    /// Lines are aligned with a longest common subsequence over whole lines first
    Lcs,
}
