use crate::{Error, Result, Validator};

/// A named slot for a field value with a fallback supplied when the slot is
/// created.
///
/// Reading the slot never fails: an unset slot simply yields the default it
/// was created with. Like [`RequiredField`][crate::RequiredField], the slot
/// can carry a validator that vets every value offered to
/// [`set`][Self::set].
///
/// The default itself is trusted and never validated - the validator exists
/// to vet caller-supplied values, while the default is chosen by whoever
/// wrote the builder.
///
/// # Example
///
/// ```
/// use staged::OptionalField;
///
/// let mut side = OptionalField::new("side", "Fries".to_string());
///
/// // Nothing set yet: the default shows through.
/// assert!(!side.is_set());
/// assert_eq!(side.get(), "Fries");
///
/// side.set("Salad".to_string())?;
/// assert_eq!(side.get(), "Salad");
/// # Ok::<(), staged::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct OptionalField<T> {
    name: &'static str,

    validator: Option<Validator<T>>,

    default: T,

    value: Option<T>,
}

impl<T> OptionalField<T> {
    /// Creates an unset slot for the field called `name` that falls back to
    /// `default`.
    #[must_use]
    pub const fn new(name: &'static str, default: T) -> Self {
        Self {
            name,
            validator: None,
            default,
            value: None,
        }
    }

    /// Creates an unset slot whose set values must pass `validator`.
    ///
    /// Only values offered to [`set`][Self::set] are validated; `default`
    /// is stored as given.
    #[must_use]
    pub const fn with_validator(name: &'static str, default: T, validator: Validator<T>) -> Self {
        Self {
            name,
            validator: Some(validator),
            default,
            value: None,
        }
    }

    /// The field name used in error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether a value has been set, as opposed to the default showing
    /// through.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Accepts `value` into the slot, replacing any previously set value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Invalid`] if the slot has a validator and it rejects
    /// `value`. The slot then keeps whatever it held before the call.
    pub fn set(&mut self, value: T) -> Result<()> {
        self.check(&value)?;
        self.value = Some(value);

        Ok(())
    }

    /// Borrows the set value, or the default if nothing was set.
    #[must_use]
    pub fn get(&self) -> &T {
        self.value.as_ref().unwrap_or(&self.default)
    }

    /// Consumes the slot, returning the set value or the default.
    ///
    /// This is the accessor for single-use builders whose `build()` consumes
    /// the builder; use [`to_value`][Self::to_value] to keep the slot intact
    /// for repeated builds.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value.unwrap_or(self.default)
    }

    fn check(&self, value: &T) -> Result<()> {
        let Some(validator) = self.validator else {
            return Ok(());
        };

        validator(value).map_err(|problem| Error::Invalid {
            field: self.name,
            problem,
        })
    }
}

impl<T> OptionalField<T>
where
    T: Clone,
{
    /// Returns a copy of the set value, or of the default if nothing was
    /// set, leaving the slot intact.
    #[must_use]
    pub fn to_value(&self) -> T {
        self.get().clone()
    }
}
