//! Loads a source file once and indexes line starts so the diagnostic
//! printer can re-read an arbitrary line on demand without holding the
//! lexer's buffer alive.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::UtilError;

#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    contents: String,
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, UtilError> {
        let path = path.as_ref().to_path_buf();
        let contents = fs::read_to_string(&path).map_err(|source| UtilError::ReadSource {
            path: path.clone(),
            source,
        })?;
        Ok(Self::new(path, contents))
    }

    pub fn new(path: PathBuf, contents: String) -> Self {
        let line_starts = compute_line_starts(&contents);
        SourceFile { path, contents, line_starts }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Text of a 1-based source line, without its trailing newline.
    /// Returns an empty string for an out-of-range line rather than
    /// failing: the diagnostic printer must still be able to print
    /// *something* for a malformed position.
    pub fn line_text(&self, line: u32) -> &str {
        let idx = line.saturating_sub(1) as usize;
        let Some(&start) = self.line_starts.get(idx) else {
            return "";
        };
        let end = self
            .line_starts
            .get(idx + 1)
            .copied()
            .unwrap_or(self.contents.len());
        self.contents[start..end].trim_end_matches(['\n', '\r'])
    }
}

fn compute_line_starts(contents: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (byte_idx, byte) in contents.bytes().enumerate() {
        if byte == b'\n' {
            starts.push(byte_idx + 1);
        }
    }
    starts
}
