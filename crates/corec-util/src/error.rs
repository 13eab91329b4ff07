use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UtilError {
    #[error("could not read source file {path}: {source}")]
    ReadSource { path: PathBuf, source: std::io::Error },
}
