//! Example that demonstrates the exact usage shown in the README.md file.
//!
//! This shows how field slots drive a hand-written meal order builder.

use staged::{Error, OptionalField, RequiredField};

#[derive(Debug)]
struct MealOrder {
    main: String,
    side: String,
    cost_cents: i64,
}

#[derive(Debug)]
struct MealOrderBuilder {
    main: RequiredField<String>,
    side: OptionalField<String>,
    cost_cents: RequiredField<i64>,
}

fn non_negative(cents: &i64) -> Result<(), String> {
    if *cents < 0 {
        return Err(format!("cost must not be negative, got {cents}"));
    }

    Ok(())
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

fn main() {
    println!("=== Staged README Example ===");

    let unfinished = MealOrderBuilder::new().build();
    println!("building too early: {}", unfinished.unwrap_err());

    let rejected = MealOrderBuilder::new().cost_cents(-250);
    println!("offering a bad value: {}", rejected.unwrap_err());

    let order = MealOrderBuilder::new()
        .main("Burger")
        .unwrap()
        .cost_cents(1250)
        .unwrap()
        .build()
        .unwrap();
    println!(
        "built: {} with {} for {} cents",
        order.main, order.side, order.cost_cents
    );

    println!("README example completed successfully!");
}
