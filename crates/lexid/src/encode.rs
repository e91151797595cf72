use crate::entropy::EntropySource;
use crate::entropy_native::{ThreadEntropy, fill_secure};
use crate::ulid::Ulid;

/// Encodes an identifier into a caller-owned 16-byte buffer.
///
/// Writes the low 48 bits of `timestamp` big-endian into bytes `0..=5`
/// (byte 0 = bits 47..=40, byte 5 = bits 7..=0). Higher bits of a wider
/// timestamp are silently discarded; this is a fixed contract, not a
/// validated input.
///
/// The entropy source is then invoked exactly once per byte for indices
/// `6..=15`, in strictly increasing order, and each returned byte is stored
/// verbatim. The ordering is part of the contract: stateful sources (for
/// example one reading sequential bytes from a stream) rely on it.
///
/// There is no failure mode: an absent buffer or source cannot be
/// expressed, and the fixed-size array rules out short or oversized
/// writes.
pub fn encode<S>(buf: &mut [u8; Ulid::BYTES], timestamp: u64, source: &mut S)
where
    S: EntropySource + ?Sized,
{
    encode_timestamp(buf, timestamp);
    for byte in &mut buf[Ulid::TIMESTAMP_BYTES..] {
        *byte = source.next_byte();
    }
}

/// Writes only the timestamp field, leaving bytes `6..=15` unmodified.
///
/// This is the skip path for callers that fill the entropy bytes through a
/// single bulk operation instead of a byte callback.
pub fn encode_timestamp(buf: &mut [u8; Ulid::BYTES], timestamp: u64) {
    buf[0] = (timestamp >> 40) as u8;
    buf[1] = (timestamp >> 32) as u8;
    buf[2] = (timestamp >> 24) as u8;
    buf[3] = (timestamp >> 16) as u8;
    buf[4] = (timestamp >> 8) as u8;
    buf[5] = timestamp as u8;
}

/// Encodes an identifier using one bulk fill from the OS secure random
/// source.
///
/// If the OS source is unavailable or fails, falls back exactly once to the
/// thread-local RNG byte path; the fallback itself is unconditional and
/// there is no further retry. The degrade is silent at this level — use
/// [`fill_secure`] directly to observe the failure.
pub fn encode_secure(buf: &mut [u8; Ulid::BYTES], timestamp: u64) {
    encode_timestamp(buf, timestamp);
    if fill_secure(&mut buf[Ulid::TIMESTAMP_BYTES..]).is_err() {
        #[cfg(feature = "tracing")]
        tracing::warn!("OS secure random unavailable; falling back to thread-local RNG");
        encode(buf, timestamp, &mut ThreadEntropy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::{ConstEntropy, FnEntropy};

    #[test]
    fn timestamp_packs_big_endian() {
        let mut buf = [0u8; Ulid::BYTES];
        encode(&mut buf, 0x0123_4567_89AB, &mut ConstEntropy(0));
        assert_eq!(&buf[..6], &[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB]);
    }

    #[test]
    fn skip_path_preserves_prefilled_entropy() {
        let mut buf = [0xEE; Ulid::BYTES];
        encode_timestamp(&mut buf, 1_000_000);
        assert_eq!(&buf[..6], &[0x00, 0x00, 0x00, 0x0F, 0x42, 0x40]);
        assert_eq!(&buf[6..], &[0xEE; 10]);
    }

    #[test]
    fn entropy_bytes_fill_in_increasing_order() {
        let mut calls = Vec::new();
        let mut next = 0u8;
        let mut source = FnEntropy(|| {
            calls.push(next);
            next += 1;
            next - 1
        });
        let mut buf = [0u8; Ulid::BYTES];
        encode(&mut buf, 0, &mut source);
        drop(source);
        assert_eq!(calls, (0..10).collect::<Vec<u8>>());
        assert_eq!(&buf[6..], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn secure_encode_still_packs_the_timestamp() {
        let mut buf = [0u8; Ulid::BYTES];
        encode_secure(&mut buf, 1_000_000);
        assert_eq!(&buf[..6], &[0x00, 0x00, 0x00, 0x0F, 0x42, 0x40]);
    }

    #[test]
    fn secure_encodes_differ_between_calls() {
        let mut a = [0u8; Ulid::BYTES];
        let mut b = [0u8; Ulid::BYTES];
        encode_secure(&mut a, 1_000_000);
        encode_secure(&mut b, 1_000_000);
        // 80 bits of entropy; a collision here means the fill did nothing.
        assert_ne!(&a[6..], &b[6..]);
    }
}
