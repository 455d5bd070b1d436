//! Invocation argument validation.
//!
//! The CLI takes exactly three positional values: input path, output path,
//! and word length. [`parse`] validates them as a unit and hands back an
//! immutable [`Args`], or the first failure it hits.

use core::fmt;

use crate::line::MAX_WORD_LEN;

/// The three validated invocation values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub input_path: String,
    pub output_path: String,
    pub word_len: u32,
}

/// Validation failures, one variant per rejected precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The positional argument count was not exactly three.
    WrongArgCount,
    EmptyInputPath,
    EmptyOutputPath,
    /// Input and output paths are textually identical.
    SamePath,
    EmptyWordLen,
    /// The word-length argument was not purely base-10 digits, or did not
    /// fit a `u32`. Carries the offending text.
    InvalidWordLen(String),
    /// The parsed word length fell outside `1..=MAX_WORD_LEN`.
    WordLenOutOfRange(u32),
}

impl Error {
    /// Whether the CLI prints the usage line for this failure.
    ///
    /// Failures caught by up-front validation show usage; the length
    /// parse and range failures detected afterwards print only the
    /// diagnostic.
    #[must_use]
    pub fn shows_usage(&self) -> bool {
        !matches!(self, Error::InvalidWordLen(_) | Error::WordLenOutOfRange(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WrongArgCount => write!(f, "expected exactly 3 arguments"),
            Error::EmptyInputPath => write!(f, "Input file path cannot be empty"),
            Error::EmptyOutputPath => write!(f, "Output file path cannot be empty"),
            Error::SamePath => write!(f, "Input and output files cannot be the same"),
            Error::EmptyWordLen => write!(f, "Invalid word length ''"),
            Error::InvalidWordLen(value) => write!(f, "Invalid word length '{value}'"),
            Error::WordLenOutOfRange(value) => write!(f, "Invalid word length '{value}'"),
        }
    }
}

impl std::error::Error for Error {}

/// Validate the raw positional arguments (program name excluded).
///
/// # Errors
///
/// Returns the first [`Error`] triggered, checking in order: argument
/// count, input path, output path, path distinctness, then the
/// word-length string and its numeric range.
pub fn parse(argv: impl Iterator<Item = String>) -> Result<Args, Error> {
    let argv: Vec<String> = argv.collect();
    let [input_path, output_path, word_len_arg] =
        <[String; 3]>::try_from(argv).map_err(|_| Error::WrongArgCount)?;

    if input_path.is_empty() {
        return Err(Error::EmptyInputPath);
    }
    if output_path.is_empty() {
        return Err(Error::EmptyOutputPath);
    }
    if input_path == output_path {
        return Err(Error::SamePath);
    }
    if word_len_arg.is_empty() {
        return Err(Error::EmptyWordLen);
    }
    // Strictly digits only: no sign, no whitespace, no trailing garbage.
    if !word_len_arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidWordLen(word_len_arg));
    }
    let word_len: u32 = word_len_arg
        .parse()
        .map_err(|_| Error::InvalidWordLen(word_len_arg.clone()))?;
    if word_len == 0 || word_len > MAX_WORD_LEN as u32 {
        return Err(Error::WordLenOutOfRange(word_len));
    }

    Ok(Args {
        input_path,
        output_path,
        word_len,
    })
}
