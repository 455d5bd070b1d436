//! Byte-level line primitives.
//!
//! This module provides the bounded line-read and terminator-strip
//! operations the filter pass is built on. Everything here is
//! byte-oriented: a "line" is the bytes up to and including a `\n`, or up
//! to end of stream, with no assumption about encoding.

use std::io::Read;

use memchr::memchr;

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Longest word length the tool accepts.
pub const MAX_WORD_LEN: usize = 255;

/// Upper bound on the raw bytes taken per line read: a maximal word plus a
/// CRLF terminator.
pub const MAX_RAW_LINE: usize = MAX_WORD_LEN + 2;

/// Strip all trailing `\n` and `\r` bytes from `line`.
///
/// Handles LF and CRLF endings as well as repeated trailing terminator
/// bytes of either kind. Interior terminators are left alone.
#[must_use]
pub fn trim_eol(line: &[u8]) -> &[u8] {
    let mut end = line.len();
    while end > 0 && (line[end - 1] == LF || line[end - 1] == CR) {
        end -= 1;
    }
    &line[..end]
}

/// Buffered reader producing one bounded line per call.
///
/// Each [`read_line`](LineReader::read_line) call yields at most
/// [`MAX_RAW_LINE`] bytes; a longer physical line is split across
/// successive calls rather than rejected, mirroring a fixed-size line
/// buffer.
pub struct LineReader<R> {
    inner: R,
    buf: Box<[u8]>,
    pos: usize,
    filled: usize,
}

impl<R: Read> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_size(inner, 8192)
    }

    /// Create a `LineReader` with explicit internal buffer size.
    pub fn with_size(inner: R, buf_size: usize) -> Self {
        Self {
            inner,
            buf: vec![0; buf_size].into_boxed_slice(),
            pos: 0,
            filled: 0,
        }
    }

    /// Read the next line into `out`, replacing its contents.
    ///
    /// Returns the raw byte count, including any terminator bytes;
    /// `Ok(0)` signals end of stream.
    pub fn read_line(&mut self, out: &mut Vec<u8>) -> std::io::Result<usize> {
        out.clear();
        while out.len() < MAX_RAW_LINE {
            if self.pos == self.filled {
                let n = self.inner.read(&mut self.buf)?;
                if n == 0 {
                    break;
                }
                self.pos = 0;
                self.filled = n;
            }
            let pending = &self.buf[self.pos..self.filled];
            let room = MAX_RAW_LINE - out.len();
            match memchr(LF, pending) {
                Some(i) if i < room => {
                    out.extend_from_slice(&pending[..=i]);
                    self.pos += i + 1;
                    break;
                }
                _ => {
                    // No newline within reach; take what fits and continue.
                    let bytes_now = pending.len().min(room);
                    out.extend_from_slice(&pending[..bytes_now]);
                    self.pos += bytes_now;
                }
            }
        }
        Ok(out.len())
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
