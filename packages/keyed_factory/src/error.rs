use std::fmt::Debug;

use thiserror::Error;

/// Errors that can occur when registering creators or creating products.
///
/// Keys are rendered into the error with their `Debug` representation at
/// the moment of the failure, so the error stays self-describing even for
/// non-string key types.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A creation request used a key no creator is registered for.
    ///
    /// Unknown keys are always an explicit error; the factory never falls
    /// back to a default product.
    #[error("no creator is registered for the key {key}")]
    UnknownKey {
        /// The key that was looked up, rendered for display.
        key: String,
    },

    /// A registration would have silently overwritten an existing creator.
    ///
    /// The existing registration is kept. Overwriting is only ever explicit,
    /// via [`KeyedFactory::replace`][crate::KeyedFactory::replace].
    #[error("a creator is already registered for the key {key}")]
    DuplicateKey {
        /// The key that is already taken, rendered for display.
        key: String,
    },
}

impl Error {
    pub(crate) fn unknown_key<Q>(key: &Q) -> Self
    where
        Q: Debug + ?Sized,
    {
        Self::UnknownKey {
            key: format!("{key:?}"),
        }
    }

    pub(crate) fn duplicate_key<Q>(key: &Q) -> Self
    where
        Q: Debug + ?Sized,
    {
        Self::DuplicateKey {
            key: format!("{key:?}"),
        }
    }
}

/// A specialized `Result` type for factory operations, returning the
/// package's [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
