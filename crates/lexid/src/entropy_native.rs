use crate::entropy::EntropySource;
use crate::error::{Error, Result};
use rand::rngs::OsRng;
use rand::{Rng, TryRngCore, rng};

/// An entropy source backed by the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and
/// automatically reseeded periodically. Each OS thread has its own
/// instance, so calls from multiple threads are contention-free. This type
/// does not store the RNG itself; it accesses the thread-local generator on
/// each call, which is why the zero-sized wrapper is freely `Send` + `Sync`
/// even though `ThreadRng` is not.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadEntropy;

impl EntropySource for ThreadEntropy {
    fn next_byte(&mut self) -> u8 {
        rng().random()
    }
}

/// Fills `buf` from the OS secure random source in a single bulk call.
///
/// # Errors
///
/// Returns [`Error::SecureRandomUnavailable`] when the OS source cannot
/// satisfy the request. [`crate::encode_secure`] treats that as a signal to
/// fall back to [`ThreadEntropy`]; callers that must not degrade can use
/// this function directly and handle the error themselves.
pub fn fill_secure(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(Error::SecureRandomUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_entropy_produces_varied_bytes() {
        let mut source = ThreadEntropy;
        let bytes: Vec<u8> = (0..32).map(|_| source.next_byte()).collect();
        // All 32 bytes identical would mean the generator is broken.
        assert!(bytes.iter().any(|&b| b != bytes[0]));
    }

    #[test]
    fn fill_secure_writes_the_whole_buffer() {
        let mut buf = [0u8; 10];
        fill_secure(&mut buf).expect("OS random source");
        // 2^-80 odds of a legitimate all-zero fill.
        assert_ne!(buf, [0u8; 10]);
    }
}
