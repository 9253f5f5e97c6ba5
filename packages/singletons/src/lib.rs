#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! At most one lazily constructed instance of each type, owned by a registry
//! you construct explicitly.
//!
//! The classic singleton hides process-wide state behind a static variable,
//! which makes the lifecycle invisible and the tests miserable. This package
//! keeps the useful half of the pattern - "exactly one instance, built on
//! first use, shared by everyone" - and drops the hidden global: you create a
//! [`SingletonRegistry`], share it the way you share any other value
//! (typically inside an `Arc`), and every consumer that asks for a type `T`
//! receives the same `Arc<T>`.
//!
//! This is part of the [Forma project](https://github.com/forma-rs/forma)
//! that provides building blocks for controlled object creation in Rust.
//!
//! # Guarantees
//!
//! * For each type, the initializer runs **at most once**, even when many
//!   threads race to be the first caller; every caller observes the same
//!   instance.
//! * A failed initialization leaves the slot empty, so a later call may try
//!   again - unless the registry was explicitly configured with
//!   [`FailurePolicy::Poison`].
//! * Once a slot holds an instance, that instance is never replaced or
//!   dropped for as long as the registry lives. There is deliberately no
//!   `remove` or `clear`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use singletons::SingletonRegistry;
//!
//! struct ConnectionPool {
//!     url: String,
//! }
//!
//! let registry = SingletonRegistry::new();
//!
//! // The first call for a type constructs the instance.
//! let pool = registry.get_or_init(|| ConnectionPool {
//!     url: "postgres://localhost".to_string(),
//! });
//!
//! // Every later call returns the same shared instance; the closure
//! // passed here is never invoked.
//! let same_pool = registry.get_or_init(|| unreachable!());
//!
//! assert!(Arc::ptr_eq(&pool, &same_pool));
//! assert_eq!(same_pool.url, "postgres://localhost");
//! ```
//!
//! Initialization that can fail reports the failure to the caller and, by
//! default, leaves the slot empty for a retry:
//!
//! ```
//! use singletons::SingletonRegistry;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("the license server is unreachable")]
//! struct LicenseUnavailable;
//!
//! struct License {
//!     seats: usize,
//! }
//!
//! let registry = SingletonRegistry::new();
//!
//! let attempt = registry.get_or_try_init(|| Err::<License, _>(LicenseUnavailable));
//! assert!(attempt.is_err());
//!
//! // The failure did not stick - the next attempt may succeed.
//! let license = registry
//!     .get_or_try_init(|| Ok::<_, LicenseUnavailable>(License { seats: 5 }))
//!     .unwrap();
//! assert_eq!(license.seats, 5);
//! ```
//!
//! # Sharing the instance
//!
//! Instances are handed out as `Arc<T>`: the value is shared, never
//! exclusively owned by any caller. A type that needs interior mutation
//! should bring its own synchronization (`Mutex`, atomics, ...)
//! exactly as it would behind any other `Arc`.

mod error;
mod failure_policy;
mod registry;

pub use error::*;
pub use failure_policy::*;
pub use registry::*;
