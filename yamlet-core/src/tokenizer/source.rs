use std::io;

/// A source of raw, still encoded, input bytes.
///
/// The reader calls [`Source::read`] whenever it runs out of bytes to decode. An implementation
/// writes at most `buf.len()` bytes into `buf` and returns how many it wrote. Returning `Ok(0)`
/// signals the end of the input; an `Err` is unrecoverable and ends the parse with a reader
/// error.
pub trait Source {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// In-memory input.
pub struct StrSource<'input> {
    input: &'input [u8],
    pos: usize,
}

impl<'input> StrSource<'input> {
    pub fn new(input: &'input str) -> Self {
        Self::from_bytes(input.as_bytes())
    }

    pub fn from_bytes(input: &'input [u8]) -> Self {
        StrSource { input, pos: 0 }
    }
}

impl<'input> From<&'input str> for StrSource<'input> {
    fn from(value: &'input str) -> Self {
        StrSource::new(value)
    }
}

impl<'input> From<&'input [u8]> for StrSource<'input> {
    fn from(value: &'input [u8]) -> Self {
        StrSource::from_bytes(value)
    }
}

impl Source for StrSource<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let rest = &self.input[self.pos..];
        let len = rest.len().min(buf.len());
        buf[..len].copy_from_slice(&rest[..len]);
        self.pos += len;
        Ok(len)
    }
}

/// Adapter for anything implementing [`std::io::Read`].
pub struct ReadSource<R> {
    inner: R,
}

impl<R: io::Read> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        ReadSource { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: io::Read> Source for ReadSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            match self.inner.read(buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                res => return res,
            }
        }
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn str_source_in_chunks() {
        let mut src = StrSource::new("hello");
        let mut buf = [0u8; 2];
        assert_eq!(src.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf, b"he");
        assert_eq!(src.read(&mut buf).unwrap(), 2);
        assert_eq!(src.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], b'o');
        assert_eq!(src.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn read_source_wraps_io() {
        let mut src = ReadSource::new(io::Cursor::new(b"abc".to_vec()));
        let mut buf = [0u8; 8];
        assert_eq!(src.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], b"abc");
        assert_eq!(src.read(&mut buf).unwrap(), 0);
    }
}
