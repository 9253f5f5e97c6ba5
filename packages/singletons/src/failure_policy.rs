/// Declares what a [`SingletonRegistry`][crate::SingletonRegistry] does with a
/// type's slot when the initializer for that type returns an error.
///
/// # Example
///
/// ```rust
/// use singletons::{FailurePolicy, SingletonRegistry};
///
/// let registry = SingletonRegistry::with_failure_policy(FailurePolicy::Poison);
/// assert_eq!(registry.failure_policy(), FailurePolicy::Poison);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum FailurePolicy {
    /// A failed initialization leaves the slot empty, so the next
    /// `get_or_try_init` call for the same type runs its initializer
    /// as if no attempt had been made.
    ///
    /// This is the default.
    #[default]
    Retry,

    /// The first failed initialization permanently poisons the slot.
    /// Every later access for the same type fails fast with
    /// [`Error::Poisoned`][crate::Error::Poisoned], without invoking
    /// the supplied initializer.
    ///
    /// Use this when an initialization failure indicates a condition that
    /// retrying cannot repair and repeated attempts would be wasteful or
    /// harmful.
    Poison,
}
