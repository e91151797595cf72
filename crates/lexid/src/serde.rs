use crate::ulid::Ulid;
use serde::{Serialize, Serializer};

impl Serialize for Ulid {
    /// Serializes as the canonical 26-character base32 string.
    ///
    /// There is no matching `Deserialize`: parsing the canonical text back
    /// into the binary form is out of scope for this crate. Deserialize
    /// from the raw bytes or the `u128` form instead if you need to round
    /// trip.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.encode().as_str())
    }
}

/// Field-level serialization as canonical text, for
/// `#[serde(serialize_with = "lexid::as_canonical::serialize")]`.
pub mod as_canonical {
    use super::*;

    pub fn serialize<S>(id: &Ulid, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.serialize(serializer)
    }
}
