use crate::errors::{DiffError, DiffResult};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::{debug, warn};

/// Files are resolved against the workspace root; absolute paths are used as-is
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads a file as a sequence of lines without their terminators.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD so every line can be compared
    /// character by character.
    pub fn read_lines(&self, file: &Path) -> DiffResult<Vec<String>> {
        let data = std::fs::read(self.path.join(file)).map_err(|e| DiffError::io(file, e))?;

        let content = match String::from_utf8(data) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    file = %file.display(),
                    valid_up_to = e.utf8_error().valid_up_to(),
                    "file is not valid UTF-8, replacing invalid sequences"
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        let lines = content.lines().map(str::to_string).collect::<Vec<_>>();
        debug!(file = %file.display(), lines = lines.len(), "read input");

        Ok(lines)
    }

    pub fn create_file(&self, file: &Path) -> DiffResult<BufWriter<File>> {
        File::create(self.path.join(file))
            .map(BufWriter::new)
            .map_err(|e| DiffError::io(file, e))
    }
}
