//! Document writers for paired rows
//!
//! - `html`: the standalone HTML table written to the output file
//! - `terminal`: colored side-by-side preview for the terminal

pub mod html;
pub mod terminal;
