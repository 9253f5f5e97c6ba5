use std::any::type_name;
use std::error;

use thiserror::Error;

/// Errors that can occur when initializing a singleton instance.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller-supplied initializer returned an error.
    ///
    /// The slot for the type remains empty, so a later call may retry -
    /// unless the registry was configured with
    /// [`FailurePolicy`][crate::FailurePolicy]`::Poison`, in which case the
    /// failure also poisoned the slot.
    #[error("initializing the {type_name} singleton failed: {source}")]
    Construction {
        /// The type whose initialization was attempted.
        type_name: &'static str,

        /// The error the initializer returned.
        #[source]
        source: Box<dyn error::Error + Send + Sync>,
    },

    /// An earlier initializer failure permanently poisoned this type's slot.
    ///
    /// Only registries configured with
    /// [`FailurePolicy`][crate::FailurePolicy]`::Poison` produce this; the
    /// initializer passed to the failing call was not invoked.
    #[error("the {type_name} singleton slot was poisoned by an earlier failed initialization")]
    Poisoned {
        /// The type whose slot is poisoned.
        type_name: &'static str,
    },
}

impl Error {
    pub(crate) fn construction<T>(source: impl error::Error + Send + Sync + 'static) -> Self {
        Self::Construction {
            type_name: type_name::<T>(),
            source: Box::new(source),
        }
    }

    pub(crate) fn poisoned<T>() -> Self {
        Self::Poisoned {
            type_name: type_name::<T>(),
        }
    }
}

/// A specialized `Result` type for singleton initialization, returning the
/// package's [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
