//! The length-filter pass.

use std::io::{Read, Write};

use crate::line::{trim_eol, LineReader, MAX_RAW_LINE};

/// Copy every line of `input` whose stripped byte length equals `word_len`
/// to `output`, one `\n`-terminated word per line.
///
/// Returns the number of lines written. Non-matching lines and empty
/// lines are skipped silently, non-ASCII bytes simply count toward the
/// byte length, and an empty input yields `Ok(0)`. Output is always
/// LF-terminated regardless of the input's line endings.
///
/// # Errors
///
/// Read and write faults surface as `Err`; the pass stops at the first
/// one.
pub fn filter_words<R: Read, W: Write>(
    input: R,
    output: &mut W,
    word_len: u32,
) -> std::io::Result<u64> {
    let mut reader = LineReader::new(input);
    let mut line = Vec::with_capacity(MAX_RAW_LINE);
    let mut written = 0u64;

    while reader.read_line(&mut line)? > 0 {
        let word = trim_eol(&line);
        if word.len() as u32 == word_len {
            output.write_all(word)?;
            output.write_all(b"\n")?;
            written += 1;
        }
    }
    Ok(written)
}
