use thiserror::Error;

/// Errors that can occur when registering or instantiating prototypes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A lookup referenced a name no template is registered under.
    ///
    /// Unknown names are always an explicit error; the registry never
    /// falls back to a default template.
    #[error("no prototype is registered under the name '{name}'")]
    UnknownName {
        /// The name that was looked up.
        name: String,
    },

    /// A registration would have silently overwritten an existing template.
    ///
    /// The existing registration is kept. Overwriting is only ever explicit,
    /// via [`PrototypeRegistry::replace`][crate::PrototypeRegistry::replace].
    #[error("a prototype is already registered under the name '{name}'")]
    DuplicateName {
        /// The name that is already taken.
        name: String,
    },
}

/// A specialized `Result` type for prototype operations, returning the
/// package's [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
