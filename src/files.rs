//! Paired acquisition of the input and output file handles.

use core::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// The owned input/output handle pair.
///
/// Both handles are open for the lifetime of the value and close together
/// when it drops, so a constructed pair never leaks one side.
pub struct FilePair {
    pub input: File,
    pub output: File,
}

/// Failure to acquire one side of the pair. Carries the offending path and
/// the underlying I/O error.
#[derive(Debug)]
pub enum Error {
    Input { path: PathBuf, source: io::Error },
    Output { path: PathBuf, source: io::Error },
}

impl Error {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Error::Input { path, .. } | Error::Output { path, .. } => path,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Input { path, .. } | Error::Output { path, .. } => {
                write!(f, "Couldn't open file: {}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Input { source, .. } | Error::Output { source, .. } => Some(source),
        }
    }
}

impl FilePair {
    /// Open `input_path` for reading and `output_path` for writing as a
    /// unit.
    ///
    /// The input is opened first; if that fails the output path is never
    /// touched. The output is opened with create-or-truncate semantics;
    /// if that fails the already-open input handle is dropped before the
    /// error returns, so a failed acquisition never holds a handle.
    ///
    /// # Errors
    ///
    /// [`Error::Input`] or [`Error::Output`] naming the path that could
    /// not be opened.
    pub fn open(input_path: &str, output_path: &str) -> Result<FilePair, Error> {
        let input = File::open(input_path).map_err(|source| Error::Input {
            path: PathBuf::from(input_path),
            source,
        })?;
        let output = File::create(output_path).map_err(|source| Error::Output {
            path: PathBuf::from(output_path),
            source,
        })?;
        Ok(FilePair { input, output })
    }
}
