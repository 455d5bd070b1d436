use std::io::{self, Read};

/// Chains several readers, surfacing each underlying read as-is so tests
/// can exercise short and split reads.
pub struct ChunkedReader<R, I> {
    rest: I,
    current: Option<R>,
}

impl<R: Read, I: Iterator<Item = R>> ChunkedReader<R, I> {
    pub fn new(mut rest: I) -> ChunkedReader<R, I> {
        let current = rest.next();
        ChunkedReader { rest, current }
    }
}

impl<R: Read, I: Iterator<Item = R>> Read for ChunkedReader<R, I> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            match self.current {
                Some(ref mut r) => {
                    let n = r.read(buf)?;
                    if n > 0 {
                        return Ok(n);
                    }
                }
                None => return Ok(0),
            }
            self.current = self.rest.next();
        }
    }
}
