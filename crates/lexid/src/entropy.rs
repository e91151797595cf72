use std::io;

/// A source of entropy consumed one byte at a time.
///
/// The encoder calls [`next_byte`](EntropySource::next_byte) exactly once
/// per entropy byte, in increasing byte order, and stores whatever comes
/// back without validation. Implementations may be stateful (a stream
/// reader) or pure (a constant); a source that cannot produce a byte is
/// expected to degrade to `0` rather than fail, keeping encoding total.
pub trait EntropySource {
    /// Returns the next entropy byte.
    fn next_byte(&mut self) -> u8;
}

/// An entropy source that returns the same byte on every call.
///
/// Useful for deterministic tests and reproducible fixtures.
#[derive(Default, Clone, Copy, Debug)]
pub struct ConstEntropy(pub u8);

impl EntropySource for ConstEntropy {
    fn next_byte(&mut self) -> u8 {
        self.0
    }
}

/// An entropy source backed by a closure.
///
/// Wraps any `FnMut() -> u8`, giving ad-hoc and stateful sources without a
/// dedicated type.
pub struct FnEntropy<F>(pub F);

impl<F: FnMut() -> u8> EntropySource for FnEntropy<F> {
    fn next_byte(&mut self) -> u8 {
        (self.0)()
    }
}

/// An entropy source reading one byte per call from any [`io::Read`].
///
/// Covers open files, raw device handles such as `/dev/urandom`, and
/// buffered streams alike. A failed or short read yields a zero byte — a
/// deliberate soft degrade so that encoding never fails once the buffers
/// are valid.
#[derive(Debug)]
pub struct ReadEntropy<R> {
    reader: R,
}

impl<R> ReadEntropy<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Consumes the source and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: io::Read> EntropySource for ReadEntropy<R> {
    fn next_byte(&mut self) -> u8 {
        let mut byte = [0u8; 1];
        match self.reader.read(&mut byte) {
            Ok(1) => byte[0],
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn const_source_repeats_its_byte() {
        let mut source = ConstEntropy(0xAB);
        for _ in 0..10 {
            assert_eq!(source.next_byte(), 0xAB);
        }
    }

    #[test]
    fn fn_source_tracks_closure_state() {
        let mut counter = 0u8;
        let mut source = FnEntropy(|| {
            counter += 1;
            counter
        });
        assert_eq!(source.next_byte(), 1);
        assert_eq!(source.next_byte(), 2);
        assert_eq!(source.next_byte(), 3);
    }

    #[test]
    fn read_source_yields_stream_bytes_in_order() {
        let mut source = ReadEntropy::new(Cursor::new(vec![1, 2, 3]));
        assert_eq!(source.next_byte(), 1);
        assert_eq!(source.next_byte(), 2);
        assert_eq!(source.next_byte(), 3);
    }

    #[test]
    fn read_source_degrades_to_zero_at_eof() {
        let mut source = ReadEntropy::new(Cursor::new(Vec::<u8>::new()));
        assert_eq!(source.next_byte(), 0);
        assert_eq!(source.next_byte(), 0);
    }

    #[test]
    fn read_source_degrades_to_zero_on_error() {
        struct FailingReader;
        impl io::Read for FailingReader {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("unreadable"))
            }
        }

        let mut source = ReadEntropy::new(FailingReader);
        assert_eq!(source.next_byte(), 0);
    }
}
