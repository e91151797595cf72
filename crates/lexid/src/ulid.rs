use crate::base32::UlidFormatter;
use crate::encode::{encode, encode_secure};
use crate::entropy::{ConstEntropy, EntropySource};
use crate::entropy_native::ThreadEntropy;
use crate::time::{SystemClock, TimeSource};
use core::fmt;

/// A 128-bit lexicographically sortable identifier.
///
/// The value is an opaque 16-byte buffer: bytes `0..=5` hold a 48-bit
/// big-endian millisecond timestamp, bytes `6..=15` hold 80 bits of entropy.
/// The derived ordering compares all 16 bytes as an unsigned big-endian
/// integer, so identifiers with different timestamps always order by
/// timestamp regardless of their entropy.
///
/// `Ulid` is a plain value type: freely copied, compared, hashed, and
/// rendered. It owns no resources and performs no allocation.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Ulid {
    data: [u8; Self::BYTES],
}

impl Ulid {
    /// Total width of an identifier in bytes.
    pub const BYTES: usize = 16;
    /// Width of the timestamp field in bytes.
    pub const TIMESTAMP_BYTES: usize = 6;
    /// Width of the entropy field in bytes.
    pub const ENTROPY_BYTES: usize = Self::BYTES - Self::TIMESTAMP_BYTES;
    /// Largest encodable timestamp (48 bits).
    pub const MAX_TIMESTAMP: u64 = (1 << 48) - 1;

    /// Constructs an identifier directly from its 16-byte representation.
    #[must_use]
    pub const fn from_bytes(data: [u8; Self::BYTES]) -> Self {
        Self { data }
    }

    /// Returns the 16-byte representation.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; Self::BYTES] {
        self.data
    }

    /// Borrows the 16-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::BYTES] {
        &self.data
    }

    /// Constructs an identifier from the big-endian `u128` equivalent.
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self::from_bytes(value.to_be_bytes())
    }

    /// Returns the identifier as its big-endian `u128` equivalent.
    #[must_use]
    pub const fn to_u128(self) -> u128 {
        u128::from_be_bytes(self.data)
    }

    /// Constructs an identifier from a timestamp and caller-supplied entropy
    /// bytes.
    ///
    /// This is the bulk-fill path: the entropy bytes are stored verbatim and
    /// no entropy source is consulted. Timestamps wider than 48 bits are
    /// silently truncated to their low 48 bits.
    #[must_use]
    pub const fn from_parts(timestamp: u64, entropy: [u8; Self::ENTROPY_BYTES]) -> Self {
        let mut data = [0u8; Self::BYTES];
        data[0] = (timestamp >> 40) as u8;
        data[1] = (timestamp >> 32) as u8;
        data[2] = (timestamp >> 24) as u8;
        data[3] = (timestamp >> 16) as u8;
        data[4] = (timestamp >> 8) as u8;
        data[5] = timestamp as u8;
        let mut i = 0;
        while i < Self::ENTROPY_BYTES {
            data[Self::TIMESTAMP_BYTES + i] = entropy[i];
            i += 1;
        }
        Self { data }
    }

    /// Constructs an identifier from a timestamp and an entropy source.
    ///
    /// The source is invoked exactly once per entropy byte, in increasing
    /// byte order. See [`encode`] for the full contract.
    #[must_use]
    pub fn from_timestamp_and_entropy<S>(timestamp: u64, source: &mut S) -> Self
    where
        S: EntropySource + ?Sized,
    {
        let mut data = [0u8; Self::BYTES];
        encode(&mut data, timestamp, source);
        Self { data }
    }

    /// Constructs an identifier from a timestamp using the thread-local RNG
    /// ([`ThreadEntropy`]) for the entropy bytes.
    #[must_use]
    pub fn from_timestamp(timestamp: u64) -> Self {
        Self::from_timestamp_and_entropy(timestamp, &mut ThreadEntropy)
    }

    /// Constructs an identifier whose entropy bytes all equal `value`.
    ///
    /// Deterministic; intended for tests and reproducible fixtures.
    #[must_use]
    pub fn from_timestamp_const(timestamp: u64, value: u8) -> Self {
        Self::from_timestamp_and_entropy(timestamp, &mut ConstEntropy(value))
    }

    /// Constructs an identifier using one bulk fill from the OS secure
    /// random source.
    ///
    /// If the OS source is unavailable, falls back once to the thread-local
    /// RNG. See [`encode_secure`].
    #[must_use]
    pub fn from_timestamp_secure(timestamp: u64) -> Self {
        let mut data = [0u8; Self::BYTES];
        encode_secure(&mut data, timestamp);
        Self { data }
    }

    /// Constructs an identifier from the given clock and the thread-local
    /// RNG.
    #[must_use]
    pub fn from_clock<T: TimeSource>(clock: &T) -> Self {
        Self::from_timestamp(clock.current_millis())
    }

    /// Constructs an identifier from the given clock and entropy source.
    #[must_use]
    pub fn from_clock_and_entropy<T, S>(clock: &T, source: &mut S) -> Self
    where
        T: TimeSource,
        S: EntropySource + ?Sized,
    {
        Self::from_timestamp_and_entropy(clock.current_millis(), source)
    }

    /// Generates an identifier from the current wall-clock time and the
    /// thread-local RNG.
    ///
    /// This queries the system clock on every call. Callers that need
    /// timestamps resistant to wall-clock adjustments should hold a
    /// [`MonotonicClock`] and use [`Ulid::from_clock`] instead.
    ///
    /// [`MonotonicClock`]: crate::MonotonicClock
    #[must_use]
    pub fn now() -> Self {
        Self::from_clock(&SystemClock)
    }

    /// Extracts the 48-bit timestamp, widened to 64 bits.
    ///
    /// Inverse of the encoder's timestamp packing: reassembles bytes `0..=5`
    /// big-endian. The top 16 bits of the result are always zero.
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        (self.data[0] as u64) << 40
            | (self.data[1] as u64) << 32
            | (self.data[2] as u64) << 24
            | (self.data[3] as u64) << 16
            | (self.data[4] as u64) << 8
            | self.data[5] as u64
    }

    /// Borrows the 10 entropy bytes.
    #[must_use]
    pub fn entropy(&self) -> &[u8] {
        &self.data[Self::TIMESTAMP_BYTES..]
    }

    /// Renders the canonical 26-character base32 form.
    ///
    /// The formatter is a stack-held view implementing [`core::fmt::Display`]
    /// and [`AsRef<str>`]; no heap allocation takes place.
    #[must_use]
    pub fn encode(&self) -> UlidFormatter {
        UlidFormatter::new(&self.data)
    }
}

impl fmt::Display for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.encode().fmt(f)
    }
}

impl fmt::Debug for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.encode();
        f.debug_tuple("Ulid").field(&text.as_str()).finish()
    }
}

impl From<[u8; Ulid::BYTES]> for Ulid {
    fn from(data: [u8; Ulid::BYTES]) -> Self {
        Self::from_bytes(data)
    }
}

impl From<Ulid> for [u8; Ulid::BYTES] {
    fn from(id: Ulid) -> Self {
        id.to_bytes()
    }
}

impl From<u128> for Ulid {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<Ulid> for u128 {
    fn from(id: Ulid) -> Self {
        id.to_u128()
    }
}

impl PartialEq<str> for Ulid {
    fn eq(&self, other: &str) -> bool {
        self.encode() == *other
    }
}

impl PartialEq<&str> for Ulid {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<Ulid> for &str {
    fn eq(&self, other: &Ulid) -> bool {
        other == *self
    }
}
