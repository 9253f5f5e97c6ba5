#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Creation functions selected by a runtime key.
//!
//! A [`KeyedFactory`] maps discriminator keys - type tags, configuration
//! strings, enum values - to creation functions registered up front. Code
//! that needs a product asks the factory by key and receives a value
//! exposing an agreed capability set, typically as a boxed trait object;
//! which concrete type was constructed stays a private detail of the
//! registration site. This is the factory-method pattern rendered as a
//! dispatch table instead of an inheritance hierarchy.
//!
//! This is part of the [Forma project](https://github.com/forma-rs/forma)
//! that provides building blocks for controlled object creation in Rust.
//!
//! # Example
//!
//! ```
//! use keyed_factory::KeyedFactory;
//!
//! /// The capability set every product exposes.
//! trait Shape {
//!     fn corners(&self) -> usize;
//! }
//!
//! struct Square;
//!
//! impl Shape for Square {
//!     fn corners(&self) -> usize {
//!         4
//!     }
//! }
//!
//! struct Circle;
//!
//! impl Shape for Circle {
//!     fn corners(&self) -> usize {
//!         0
//!     }
//! }
//!
//! let mut factory: KeyedFactory<String, Box<dyn Shape>> = KeyedFactory::new();
//! factory.register("square".to_string(), |()| Box::new(Square))?;
//! factory.register("circle".to_string(), |()| Box::new(Circle))?;
//!
//! // Callers pick a product by key alone.
//! let shape = factory.create("square")?;
//! assert_eq!(shape.corners(), 4);
//!
//! // Unregistered keys are an explicit error, never a silent default.
//! assert!(factory.create("triangle").is_err());
//! # Ok::<(), keyed_factory::Error>(())
//! ```
//!
//! Creators can also take arguments, passed through by
//! [`create_with`][KeyedFactory::create_with]:
//!
//! ```
//! use keyed_factory::KeyedFactory;
//!
//! let mut factory: KeyedFactory<&str, String, usize> = KeyedFactory::new();
//! factory.register("stars", |count: usize| "*".repeat(count))?;
//!
//! assert_eq!(factory.create_with("stars", 3)?, "***");
//! # Ok::<(), keyed_factory::Error>(())
//! ```

mod error;
mod factory;

pub use error::*;
pub use factory::*;
