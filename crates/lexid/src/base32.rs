use crate::ulid::Ulid;
use core::fmt;

/// Length of the canonical text form: 26 characters of 5 bits each.
///
/// 26 × 5 = 130 bits for a 128-bit value, so the first character carries
/// only 3 significant bits and its top 2 bits are always zero. The maximum
/// leading character is therefore `7`.
pub const ENCODED_LEN: usize = 26;

/// Crockford-style base32 alphabet. `I`, `L`, `O` and `U` are excluded to
/// avoid visual ambiguity; only uppercase is ever emitted.
const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Bit-slicing schedule: for each output character, the index of the source
/// byte holding the group's least significant bit and the right-shift that
/// aligns the group inside a two-byte window ending at that byte.
///
/// Treating the rendering as a 130-bit string whose top 2 bits are zero
/// padding, group `i` ends at source bit `5 * i + 2`. The table is fixed at
/// compile time so the per-character extraction is a plain indexed load.
const SCHEDULE: [(usize, u32); ENCODED_LEN] = {
    let mut table = [(0usize, 0u32); ENCODED_LEN];
    let mut i = 0;
    while i < ENCODED_LEN {
        let last_bit = 5 * i + 2;
        table[i] = (last_bit / 8, (7 - last_bit % 8) as u32);
        i += 1;
    }
    table
};

/// Renders a 16-byte identifier into its canonical 26-character base32 form.
///
/// The rendering is a pure function of the input bytes: the 128 bits are
/// consumed as 26 consecutive 5-bit groups, most-significant-bit first, and
/// each group indexes into the fixed alphabet. Zero allocation, no failure
/// modes.
///
/// - The index into `ALPHABET` is masked with `0x1F`, so it is always in
///   range `0..=31` and the table load cannot go out of bounds.
/// - `window` pairs each schedule byte with its predecessor (or zero for
///   byte 0), covering groups that straddle a byte boundary.
pub fn encode_base32(bytes: &[u8; Ulid::BYTES], buf: &mut [u8; ENCODED_LEN]) {
    for (out, &(idx, shift)) in buf.iter_mut().zip(SCHEDULE.iter()) {
        let hi = if idx == 0 { 0 } else { bytes[idx - 1] as u16 };
        let window = (hi << 8) | bytes[idx] as u16;
        *out = ALPHABET[((window >> shift) & 0x1F) as usize];
    }
}

/// A stack-held view of an identifier's canonical text.
///
/// Produced by [`Ulid::encode`]. Holds exactly [`ENCODED_LEN`] ASCII bytes
/// and implements [`fmt::Display`] and [`AsRef<str>`], so it can be printed
/// or compared without any heap allocation. Call
/// [`as_str`](UlidFormatter::as_str) to borrow the text.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct UlidFormatter {
    buf: [u8; ENCODED_LEN],
}

impl UlidFormatter {
    pub(crate) fn new(bytes: &[u8; Ulid::BYTES]) -> Self {
        let mut buf = [0u8; ENCODED_LEN];
        encode_base32(bytes, &mut buf);
        Self { buf }
    }

    /// Borrows the canonical text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: every byte comes out of `ALPHABET`, which is ASCII.
        unsafe { core::str::from_utf8_unchecked(&self.buf) }
    }
}

impl fmt::Display for UlidFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for UlidFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl AsRef<str> for UlidFormatter {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for UlidFormatter {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for UlidFormatter {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_all_zeros() {
        let id = Ulid::from_u128(0);
        assert_eq!(id.encode(), "00000000000000000000000000");
    }

    #[test]
    fn max_renders_all_z_with_leading_7() {
        let id = Ulid::from_u128(u128::MAX);
        assert_eq!(id.encode(), "7ZZZZZZZZZZZZZZZZZZZZZZZZZ");
    }

    #[test]
    fn max_timestamp_renders_leading_7z() {
        let id = Ulid::from_parts(Ulid::MAX_TIMESTAMP, [0; Ulid::ENTROPY_BYTES]);
        assert_eq!(id.encode(), "7ZZZZZZZZZ0000000000000000");
        assert_eq!(&id.encode().as_str()[..2], "7Z");
    }

    #[test]
    fn zero_timestamp_renders_leading_00() {
        let id = Ulid::from_parts(0, [0xFF; Ulid::ENTROPY_BYTES]);
        assert_eq!(&id.encode().as_str()[..2], "00");
    }

    #[test]
    fn leading_group_uses_top_three_bits() {
        // Only the top 3 bits of byte 0 feed character 0.
        let id = Ulid::from_u128(0b111 << 125);
        assert_eq!(id.encode(), "70000000000000000000000000");
    }

    #[test]
    fn known_reference_vectors() {
        // Vectors from the public ULID reference implementation.
        let id = Ulid::from_u128((1_469_922_850_259u128 << 80) | 1_012_768_647_078_601_740_696_923);
        assert_eq!(id.encode(), "01ARZ3NDEKTSV4RRFFQ69G5FAV");

        let id = Ulid::from_u128((1_611_559_180_765u128 << 80) | 885_339_478_614_498_720_052_741);
        assert_eq!(id.encode(), "01EWW6K6EXQDX5JV0E9CAHPXG5");
    }

    #[test]
    fn output_stays_within_the_alphabet() {
        let samples = [
            0u128,
            1,
            u128::MAX,
            0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEF,
            (1_000_000u128 << 80) | 0xABAB_ABAB_ABAB_ABAB_ABAB,
        ];
        for &value in &samples {
            let text = Ulid::from_u128(value).encode();
            assert_eq!(text.as_str().len(), ENCODED_LEN);
            for byte in text.as_str().bytes() {
                assert!(ALPHABET.contains(&byte), "{} not in alphabet", byte as char);
            }
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let id = Ulid::from_timestamp_const(1_000_000, 0xAB);
        assert_eq!(id.encode(), id.encode());
        assert_eq!(id.encode().as_str(), id.encode().as_str());
    }

    #[test]
    fn text_order_matches_byte_order() {
        let mut values = [
            (0u64, 0x00u8),
            (0, 0xFF),
            (1, 0x00),
            (1_000_000, 0xAB),
            (Ulid::MAX_TIMESTAMP, 0x00),
        ]
        .map(|(ts, v)| Ulid::from_timestamp_const(ts, v));
        values.sort();
        let mut texts: Vec<String> = values.iter().map(|id| id.to_string()).collect();
        let sorted_by_id = texts.clone();
        texts.sort();
        assert_eq!(texts, sorted_by_id);
    }
}
