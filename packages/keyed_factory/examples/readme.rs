//! Example that demonstrates the exact usage shown in the README.md file.
//!
//! This shows how a factory decouples callers from concrete product types.

use keyed_factory::KeyedFactory;

trait Shape {
    fn corners(&self) -> usize;
}

struct Square;

impl Shape for Square {
    fn corners(&self) -> usize {
        4
    }
}

struct Circle;

impl Shape for Circle {
    fn corners(&self) -> usize {
        0
    }
}

fn main() {
    println!("=== Keyed Factory README Example ===");

    let mut factory: KeyedFactory<&str, Box<dyn Shape>> = KeyedFactory::new();
    factory.register("square", |()| Box::new(Square)).unwrap();
    factory.register("circle", |()| Box::new(Circle)).unwrap();

    for key in ["square", "circle"] {
        let shape = factory.create(key).unwrap();
        println!("a {key} has {} corners", shape.corners());
    }

    match factory.create("triangle") {
        Ok(_) => unreachable!("triangle was never registered"),
        Err(error) => println!("as expected: {error}"),
    }

    println!("README example completed successfully!");
}
