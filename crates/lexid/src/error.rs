use core::fmt;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `lexid` can produce.
///
/// The error surface is deliberately small: encoding and rendering are
/// total functions over fixed-size buffers, and an absent buffer or
/// entropy source is unrepresentable in the type system. What remains is
/// entropy acquisition.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The OS secure random source was unavailable or returned a partial
    /// fill.
    ///
    /// Surfaced by [`crate::fill_secure`]; the convenience path
    /// [`crate::encode_secure`] swallows it and falls back to the
    /// thread-local RNG instead.
    SecureRandomUnavailable(rand::rand_core::OsError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SecureRandomUnavailable(err) => {
                write!(f, "OS secure random source unavailable: {err}")
            }
        }
    }
}

impl core::error::Error for Error {}
