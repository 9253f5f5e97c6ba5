/// A cheap check a field slot applies to each candidate value before
/// accepting it.
///
/// Returning `Err` rejects the value; the message becomes the `problem` text
/// of [`Error::Invalid`][crate::Error::Invalid], so it should describe what
/// was wrong with the value rather than repeat the field name. Validators
/// are plain `fn` pointers, which keeps the slots cheap to copy, derivable
/// for `Debug` and usable in `const` initializers.
///
/// # Example
///
/// ```
/// use staged::Validator;
///
/// let not_blank: Validator<String> = |value| {
///     if value.trim().is_empty() {
///         return Err("must not be blank".to_string());
///     }
///
///     Ok(())
/// };
///
/// assert!(not_blank(&"Burger".to_string()).is_ok());
/// assert!(not_blank(&"   ".to_string()).is_err());
/// ```
pub type Validator<T> = fn(&T) -> Result<(), String>;
