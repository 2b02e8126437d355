//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that disables paging of the terminal preview
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it to be compatible with Rust's standard I/O traits. The terminal
/// preview writes into it exactly like it writes into stdout.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "Some long output...")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Page only when a person is looking at stdout and paging wasn't switched off
pub fn should_page() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os(NO_PAGER_ENV).is_none()
}
