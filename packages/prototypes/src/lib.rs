#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Named template values that produce independent copies on demand.
//!
//! A [`PrototypeRegistry`] owns fully configured template values, each
//! registered under a name. [`instantiate`][PrototypeRegistry::instantiate]
//! looks a template up and hands back a fresh copy, so callers obtain
//! ready-to-use values without knowing how to configure one themselves -
//! the classic prototype pattern, with the copy function made explicit.
//!
//! This is part of the [Forma project](https://github.com/forma-rs/forma)
//! that provides building blocks for controlled object creation in Rust.
//!
//! # Deep and shallow copies
//!
//! [`register`][PrototypeRegistry::register] stores [`Clone::clone`] as the
//! copy function. For a type that owns all of its data - plain fields,
//! strings, vectors - `clone` already produces a deep copy: no copy shares
//! mutable state with another copy or with the template. For a type holding
//! shared handles such as [`Arc`][std::sync::Arc], `clone` is a shallow
//! copy: the handle is duplicated while the data behind it stays shared by
//! every copy. That aliasing is sometimes exactly what is wanted and
//! sometimes a bug, so the choice is explicit here: accept what `Clone`
//! does, or register the type via
//! [`register_with_copier`][PrototypeRegistry::register_with_copier] with a
//! copy function that duplicates the shared parts too.
//!
//! # Example
//!
//! ```
//! use prototypes::PrototypeRegistry;
//!
//! #[derive(Clone, Debug, Eq, PartialEq)]
//! struct Circle {
//!     radius: u32,
//! }
//!
//! let mut registry = PrototypeRegistry::new();
//! registry.register("circle", Circle { radius: 10 })?;
//!
//! let mut first = registry.instantiate("circle")?;
//! let second = registry.instantiate("circle")?;
//! assert_eq!(first, second);
//!
//! // The copies are independent: changing one leaves the other and the
//! // template untouched.
//! first.radius = 20;
//! assert_eq!(second.radius, 10);
//! assert_eq!(registry.template("circle"), Some(&Circle { radius: 10 }));
//!
//! // Unregistered names are an explicit error, never a silent default.
//! assert!(registry.instantiate("square").is_err());
//! # Ok::<(), prototypes::Error>(())
//! ```

mod error;
mod registry;

pub use error::*;
pub use registry::*;
