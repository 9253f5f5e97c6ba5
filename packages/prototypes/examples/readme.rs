//! Example that demonstrates the exact usage shown in the README.md file.
//!
//! This shows how named templates produce independent copies on demand.

use prototypes::PrototypeRegistry;

#[derive(Clone, Debug)]
struct Circle {
    radius: u32,
}

fn main() {
    println!("=== Prototypes README Example ===");

    let mut registry = PrototypeRegistry::new();
    registry.register("circle", Circle { radius: 10 }).unwrap();

    let mut first = registry.instantiate("circle").unwrap();
    let second = registry.instantiate("circle").unwrap();
    println!("two copies of the template: {first:?} and {second:?}");

    first.radius = 20;
    println!("after mutating one copy: {first:?} and {second:?}");

    match registry.instantiate("square") {
        Ok(_) => unreachable!("square was never registered"),
        Err(error) => println!("as expected: {error}"),
    }

    println!("README example completed successfully!");
}
