use crate::{Error, Result, Validator};

/// A named slot for a field value that must be supplied before the product
/// can be built.
///
/// The slot starts unset. [`set`][Self::set] stores a value, first running
/// the validator if the slot was created with one, and every accessor that
/// needs the value fails with [`Error::Missing`] naming the field while the
/// slot is unset. A builder composed of such slots therefore reports exactly
/// which field the caller forgot, without hand-rolled `Option` bookkeeping.
///
/// The accessors differ in what they leave behind. [`take`][Self::take]
/// empties the slot and suits single-use builders that consume themselves in
/// `build()`. [`get`][Self::get] and [`to_value`][Self::to_value] leave the
/// value in place, so a builder using them can build any number of times.
///
/// # Example
///
/// ```
/// use staged::RequiredField;
///
/// let mut main = RequiredField::new("main");
///
/// // Reading before any value was set names the missing field.
/// let missing = main.get().unwrap_err();
/// assert_eq!(missing.to_string(), "the required field 'main' has not been set");
///
/// main.set("Burger".to_string())?;
/// assert_eq!(main.get()?, "Burger");
/// # Ok::<(), staged::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct RequiredField<T> {
    name: &'static str,

    validator: Option<Validator<T>>,

    value: Option<T>,
}

impl<T> RequiredField<T> {
    /// Creates an unset slot for the field called `name`.
    ///
    /// `name` is the identifier used in error messages, so it should match
    /// whatever the builder's callers call the field.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            validator: None,
            value: None,
        }
    }

    /// Creates an unset slot whose values must pass `validator`.
    ///
    /// The validator runs on every [`set`][Self::set] call, before the value
    /// is stored, so a bad value is rejected at the call site that produced
    /// it rather than surfacing later at build time.
    ///
    /// # Example
    ///
    /// ```
    /// use staged::{Error, RequiredField};
    ///
    /// fn non_negative(cents: &i64) -> Result<(), String> {
    ///     if *cents < 0 {
    ///         return Err(format!("cost must not be negative, got {cents}"));
    ///     }
    ///
    ///     Ok(())
    /// }
    ///
    /// let mut cost = RequiredField::with_validator("cost", non_negative);
    ///
    /// let rejected = cost.set(-250);
    /// assert!(matches!(rejected, Err(Error::Invalid { field: "cost", .. })));
    ///
    /// cost.set(1250)?;
    /// assert_eq!(cost.get()?, &1250);
    /// # Ok::<(), staged::Error>(())
    /// ```
    #[must_use]
    pub const fn with_validator(name: &'static str, validator: Validator<T>) -> Self {
        Self {
            name,
            validator: Some(validator),
            value: None,
        }
    }

    /// The field name used in error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the slot currently holds a value.
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

    /// Borrows the value, leaving the slot set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Missing`] naming the field if no value was set.
    pub fn get(&self) -> Result<&T> {
        self.value.as_ref().ok_or(Error::Missing { field: self.name })
    }

    /// Removes and returns the value, leaving the slot unset.
    ///
    /// This is the accessor for single-use builders whose `build()` consumes
    /// the builder; use [`to_value`][Self::to_value] to keep the slot intact
    /// for repeated builds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Missing`] naming the field if no value was set.
    pub fn take(&mut self) -> Result<T> {
        self.value.take().ok_or(Error::Missing { field: self.name })
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

impl<T> RequiredField<T>
where
    T: Clone,
{
    /// Returns a copy of the value, leaving the slot set.
    ///
    /// This is the accessor for reusable builders that hand out a fresh
    /// product on every `build()` call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Missing`] naming the field if no value was set.
    pub fn to_value(&self) -> Result<T> {
        self.get().cloned()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(RequiredField<String>: Clone, Debug, Send, Sync);

    fn not_blank(value: &String) -> std::result::Result<(), String> {
        if value.trim().is_empty() {
            return Err("must not be blank".to_string());
        }

        Ok(())
    }

    #[test]
    fn new_slot_is_unset() {
        let main = RequiredField::<String>::new("main");

        assert!(!main.is_set());
        assert_eq!(main.name(), "main");
    }

    #[test]
    fn unset_access_names_the_field() {
        let mut main = RequiredField::<String>::new("main");

        assert!(matches!(main.get(), Err(Error::Missing { field: "main" })));
        assert!(matches!(main.take(), Err(Error::Missing { field: "main" })));
        assert!(matches!(
            main.to_value(),
            Err(Error::Missing { field: "main" })
        ));
    }

    #[test]
    fn set_value_is_readable() {
        let mut main = RequiredField::new("main");

        main.set("Burger".to_string()).unwrap();

        assert!(main.is_set());
        assert_eq!(main.get().unwrap(), "Burger");
    }

    #[test]
    fn setting_again_replaces_the_value() {
        let mut main = RequiredField::new("main");

        main.set("Burger".to_string()).unwrap();
        main.set("Salad".to_string()).unwrap();

        assert_eq!(main.get().unwrap(), "Salad");
    }

    #[test]
    fn take_empties_the_slot() {
        let mut main = RequiredField::new("main");
        main.set("Burger".to_string()).unwrap();

        assert_eq!(main.take().unwrap(), "Burger");
        assert!(!main.is_set());
        assert!(main.take().is_err());
    }

    #[test]
    fn to_value_leaves_the_slot_set() {
        let mut main = RequiredField::new("main");
        main.set("Burger".to_string()).unwrap();

        assert_eq!(main.to_value().unwrap(), "Burger");
        assert!(main.is_set());
        assert_eq!(main.to_value().unwrap(), "Burger");
    }

    #[test]
    fn validator_rejects_at_set_time() {
        let mut main = RequiredField::with_validator("main", not_blank);

        let rejected = main.set("   ".to_string());

        let Err(Error::Invalid { field, problem }) = rejected else {
            panic!("a blank value must be rejected");
        };
        assert_eq!(field, "main");
        assert_eq!(problem, "must not be blank");
        assert!(!main.is_set());
    }

    #[test]
    fn rejected_value_keeps_the_previous_one() {
        let mut main = RequiredField::with_validator("main", not_blank);
        main.set("Burger".to_string()).unwrap();

        assert!(main.set("   ".to_string()).is_err());

        assert_eq!(main.get().unwrap(), "Burger");
    }

    #[test]
    fn validator_accepts_good_values() {
        let mut main = RequiredField::with_validator("main", not_blank);

        main.set("Burger".to_string()).unwrap();

        assert_eq!(main.get().unwrap(), "Burger");
    }

    #[test]
    fn slots_work_in_const_context() {
        const MAIN: RequiredField<u32> = RequiredField::new("main");

        assert!(!MAIN.is_set());
    }
}
