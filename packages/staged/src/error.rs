use thiserror::Error;

/// Errors that can occur when staging field values for a builder.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A required field was read or consumed while it held no value.
    ///
    /// A builder surfaces this from its `build()` method to tell the caller
    /// exactly which field was forgotten.
    #[error("the required field '{field}' has not been set")]
    Missing {
        /// The name of the field that holds no value.
        field: &'static str,
    },

    /// A value offered to a field slot was rejected by the slot's validator.
    ///
    /// The slot keeps whatever it held before; the rejected value is dropped.
    #[error("invalid value for field '{field}': {problem}")]
    Invalid {
        /// The name of the field that rejected the value.
        field: &'static str,

        /// A human-readable description of the problem, produced by the
        /// field's validator.
        problem: String,
    },
}

/// A specialized `Result` type for staged construction, returning the
/// package's [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
