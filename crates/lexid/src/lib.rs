//! Universally Unique Lexicographically Sortable Identifiers (ULIDs).
//!
//! A ULID is a 128-bit value: a 48-bit big-endian millisecond timestamp
//! followed by 80 bits of entropy.
//!
//! ```text
//!  Byte Index:  0              5 6             15
//!               +----------------+---------------+
//!  Field:       | timestamp (48) | entropy (80)  |
//!               +----------------+---------------+
//!               |<-- MSB --- 128 bits --- LSB -->|
//! ```
//!
//! Because the timestamp occupies the most significant bits, comparing two
//! identifiers byte-wise orders them by creation time first and entropy
//! second. The canonical text form is a fixed 26-character Crockford-style
//! base32 string that sorts identically to the binary value.
//!
//! The crate is split along the seams of the format:
//!
//! - [`Ulid`]: the 16-byte value type.
//! - [`encode`], [`encode_timestamp`], [`encode_secure`]: buffer-level
//!   encoding for callers that manage their own storage.
//! - [`encode_base32`] and [`UlidFormatter`]: the canonical text codec.
//! - [`EntropySource`] and its implementations: pluggable byte-level
//!   randomness.
//! - [`TimeSource`] and the built-in clocks: pluggable timestamps.
//!
//! Encoding is text-only: there is intentionally no parse path from the
//! canonical string back to the binary form.

mod base32;
mod encode;
mod entropy;
mod entropy_native;
mod error;
#[cfg(feature = "serde")]
mod serde;
mod time;
mod ulid;

pub use crate::base32::*;
pub use crate::encode::*;
pub use crate::entropy::*;
pub use crate::entropy_native::*;
pub use crate::error::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::time::*;
pub use crate::ulid::*;
