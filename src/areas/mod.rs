//! Comparison session components
//!
//! - `session`: Owns the workspace and the writer that user-facing output goes to
//! - `workspace`: Reading input files and creating the output file

pub mod session;
pub mod workspace;
