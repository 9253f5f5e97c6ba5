#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Named field slots that give hand-written builders required-field tracking
//! and immediate validation.
//!
//! A staged builder accumulates field values one call at a time and only
//! produces the finished product once every required field is present and
//! every validated field holds an acceptable value. Rust builders usually
//! hand-roll that bookkeeping with `Option` fields and ad-hoc checks; this
//! package extracts it into two reusable slot types:
//!
//! * [`RequiredField<T>`] - must be set before the value can be read out;
//!   accessing an unset slot fails with an error naming the field.
//! * [`OptionalField<T>`] - falls back to a default supplied when the slot
//!   is created.
//!
//! Either slot can carry a [`Validator`] that inspects each candidate value
//! at `set` time, so a bad value is rejected at the call site that produced
//! it rather than surfacing later at build time. Slots are independent of
//! each other: a builder's setters may run in any order, with only `build()`
//! required to come last.
//!
//! This is part of the [Forma project](https://github.com/forma-rs/forma)
//! that provides building blocks for controlled object creation in Rust.
//!
//! # Example
//!
//! A builder for a meal order, with a required main dish, a validated
//! non-negative cost and an optional side that defaults to fries. The
//! product is plain owned data; nothing can change it after `build()`
//! returns it.
//!
//! ```
//! use staged::{Error, OptionalField, RequiredField};
//!
//! #[derive(Debug)]
//! struct MealOrder {
//!     main: String,
//!     side: String,
//!     cost_cents: i64,
//! }
//!
//! #[derive(Debug)]
//! struct MealOrderBuilder {
//!     main: RequiredField<String>,
//!     side: OptionalField<String>,
//!     cost_cents: RequiredField<i64>,
//! }
//!
//! fn non_negative(cents: &i64) -> Result<(), String> {
//!     if *cents < 0 {
//!         return Err(format!("cost must not be negative, got {cents}"));
//!     }
//!
//!     Ok(())
//! }
//!
//! impl MealOrderBuilder {
//!     fn new() -> Self {
//!         Self {
//!             main: RequiredField::new("main"),
//!             side: OptionalField::new("side", "Fries".to_string()),
//!             cost_cents: RequiredField::with_validator("cost", non_negative),
//!         }
//!     }
//!
//!     fn main(mut self, dish: impl Into<String>) -> Result<Self, Error> {
//!         self.main.set(dish.into())?;
//!         Ok(self)
//!     }
//!
//!     fn cost_cents(mut self, cents: i64) -> Result<Self, Error> {
//!         self.cost_cents.set(cents)?;
//!         Ok(self)
//!     }
//!
//!     fn build(mut self) -> Result<MealOrder, Error> {
//!         Ok(MealOrder {
//!             main: self.main.take()?,
//!             side: self.side.into_value(),
//!             cost_cents: self.cost_cents.take()?,
//!         })
//!     }
//! }
//!
//! // Building before the required main dish is set fails, naming the field.
//! let unfinished = MealOrderBuilder::new().build();
//! assert!(matches!(unfinished, Err(Error::Missing { field: "main" })));
//!
//! // A negative cost is rejected by the call that supplied it.
//! let rejected = MealOrderBuilder::new().cost_cents(-250);
//! assert!(rejected.is_err());
//!
//! // With every required field set, the build succeeds.
//! let order = MealOrderBuilder::new()
//!     .main("Burger")?
//!     .cost_cents(1250)?
//!     .build()?;
//! assert_eq!(order.main, "Burger");
//! assert_eq!(order.side, "Fries");
//! assert_eq!(order.cost_cents, 1250);
//! # Ok::<(), staged::Error>(())
//! ```

mod error;
mod optional;
mod required;
mod validator;

pub use error::*;
pub use optional::*;
pub use required::*;
pub use validator::*;
