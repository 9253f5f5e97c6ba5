//! Integration tests for the `staged` package.
//!
//! These tests drive the field slots through complete hand-written builders,
//! the way a consuming program composes them: a single-use builder that
//! consumes itself on `build()` and a reusable one that copies its fields
//! out on every build.

use staged::{Error, OptionalField, RequiredField};

#[derive(Debug, Eq, PartialEq)]
struct MealOrder {
    main: String,
    side: String,
    cost_cents: i64,
}

fn non_negative(cents: &i64) -> Result<(), String> {
    if *cents < 0 {
        return Err(format!("cost must not be negative, got {cents}"));
    }

    Ok(())
}

/// A single-use builder: `build()` consumes it via `take`/`into_value`.
#[derive(Debug)]
struct MealOrderBuilder {
    main: RequiredField<String>,
    side: OptionalField<String>,
    cost_cents: RequiredField<i64>,
}

impl MealOrderBuilder {
    fn new() -> Self {
        Self {
            main: RequiredField::new("main"),
            side: OptionalField::new("side", "Fries".to_string()),
            cost_cents: RequiredField::with_validator("cost", non_negative),
        }
    }

    fn main(mut self, dish: &str) -> Result<Self, Error> {
        self.main.set(dish.to_string())?;
        Ok(self)
    }

    fn side(mut self, side: &str) -> Result<Self, Error> {
        self.side.set(side.to_string())?;
        Ok(self)
    }

    fn cost_cents(mut self, cents: i64) -> Result<Self, Error> {
        self.cost_cents.set(cents)?;
        Ok(self)
    }

    fn build(mut self) -> Result<MealOrder, Error> {
        Ok(MealOrder {
            main: self.main.take()?,
            side: self.side.into_value(),
            cost_cents: self.cost_cents.take()?,
        })
    }
}

/// A reusable builder: `build()` borrows it via `to_value`, so the same
/// configuration can produce any number of identical products.
#[derive(Debug)]
struct MealTemplate {
    main: RequiredField<String>,
    side: OptionalField<String>,
    cost_cents: RequiredField<i64>,
}

impl MealTemplate {
    fn new() -> Self {
        Self {
            main: RequiredField::new("main"),
            side: OptionalField::new("side", "Fries".to_string()),
            cost_cents: RequiredField::with_validator("cost", non_negative),
        }
    }

    fn build(&self) -> Result<MealOrder, Error> {
        Ok(MealOrder {
            main: self.main.to_value()?,
            side: self.side.to_value(),
            cost_cents: self.cost_cents.to_value()?,
        })
    }
}

#[test]
fn build_without_main_names_the_missing_field() {
    let unfinished = MealOrderBuilder::new().build();

    let error = unfinished.expect_err("the required main dish was never set");
    assert!(matches!(error, Error::Missing { field: "main" }));
    assert!(error.to_string().contains("'main'"));
}

#[test]
fn build_succeeds_once_required_fields_are_set() {
    let order = MealOrderBuilder::new()
        .main("Burger")
        .unwrap()
        .cost_cents(1250)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(
        order,
        MealOrder {
            main: "Burger".to_string(),
            side: "Fries".to_string(),
            cost_cents: 1250,
        }
    );
}

#[test]
fn setters_run_in_any_order() {
    let cost_first = MealOrderBuilder::new()
        .cost_cents(995)
        .unwrap()
        .side("Salad")
        .unwrap()
        .main("Wrap")
        .unwrap()
        .build()
        .unwrap();

    let main_first = MealOrderBuilder::new()
        .main("Wrap")
        .unwrap()
        .side("Salad")
        .unwrap()
        .cost_cents(995)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(cost_first, main_first);
}

#[test]
fn optional_side_falls_back_to_its_default() {
    let order = MealOrderBuilder::new()
        .main("Burger")
        .unwrap()
        .cost_cents(1250)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(order.side, "Fries");

    let with_side = MealOrderBuilder::new()
        .main("Burger")
        .unwrap()
        .side("Salad")
        .unwrap()
        .cost_cents(1250)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(with_side.side, "Salad");
}

#[test]
fn negative_cost_is_rejected_by_the_offending_call() {
    let rejected = MealOrderBuilder::new().cost_cents(-250);

    let error = rejected.expect_err("a negative cost must be rejected");
    let Error::Invalid { field, problem } = error else {
        panic!("expected a validation failure");
    };
    assert_eq!(field, "cost");
    assert!(problem.contains("-250"));
}

#[test]
fn reusable_builder_produces_identical_products() {
    let mut template = MealTemplate::new();
    template.main.set("Burger".to_string()).unwrap();
    template.cost_cents.set(1250).unwrap();

    let first = template.build().unwrap();
    let second = template.build().unwrap();

    assert_eq!(first, second);

    // The template still holds its configuration after building.
    assert!(template.main.is_set());
    assert_eq!(template.build().unwrap(), first);
}

#[test]
fn reusable_builder_also_names_missing_fields() {
    let mut template = MealTemplate::new();
    template.main.set("Burger".to_string()).unwrap();

    let error = template.build().expect_err("the cost was never set");
    assert!(matches!(error, Error::Missing { field: "cost" }));
}
