use std::any::type_name;
use std::collections::hash_map;
use std::fmt::{self, Debug, Formatter};

use foldhash::{HashMap, HashMapExt};

use crate::{Error, Result};

/// What the registry stores for one name: the template itself and the copy
/// function applied to it on every instantiation.
struct Prototype<T> {
    template: T,

    copier: fn(&T) -> T,
}

/// Named template values that produce independent copies on demand.
///
/// Each registration stores a fully configured template together with the
/// copy function that [`instantiate`][Self::instantiate] applies to it -
/// [`Clone::clone`] by default, or a caller-supplied function for types
/// whose `clone` would share state the copies must not share (see the
/// [package docs][crate] for that distinction). The template itself never
/// leaves the registry; callers only ever receive copies of it.
///
/// Names are unique. Registering a taken name is an error and the original
/// registration is kept; overwriting happens only through the explicit
/// [`replace`][Self::replace] call.
///
/// The registry is not internally synchronized. Mutation requires
/// `&mut self`, so the borrow checker already serializes it; to serve
/// several threads, finish registering before sharing the registry
/// read-only, or wrap it in a lock. It is `Send` and `Sync` whenever `T`
/// is.
///
/// # Example
///
/// ```
/// use prototypes::PrototypeRegistry;
///
/// #[derive(Clone, Debug, Eq, PartialEq)]
/// struct Circle {
///     radius: u32,
/// }
///
/// let mut registry = PrototypeRegistry::new();
/// registry.register("circle", Circle { radius: 10 })?;
///
/// let copy = registry.instantiate("circle")?;
/// assert_eq!(copy, Circle { radius: 10 });
/// # Ok::<(), prototypes::Error>(())
/// ```
pub struct PrototypeRegistry<T> {
    entries: HashMap<String, Prototype<T>>,
}

impl<T> PrototypeRegistry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Stores `template` under `name`, with [`Clone::clone`] as the copy
    /// function.
    ///
    /// For a type that owns all of its data, `clone` produces fully
    /// independent copies. For a type holding shared handles such as
    /// [`Arc`][std::sync::Arc], `clone` duplicates the handles but not the
    /// data behind them; register such a type via
    /// [`register_with_copier`][Self::register_with_copier] if the copies
    /// must not share that data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if `name` is already registered.
    /// The existing registration is kept.
    pub fn register(&mut self, name: impl Into<String>, template: T) -> Result<()>
    where
        T: Clone,
    {
        self.register_with_copier(name, template, T::clone)
    }

    /// Stores `template` under `name` together with the copy function that
    /// [`instantiate`][Self::instantiate] will apply to it.
    ///
    /// This is the path for types whose `Clone` implementation would alias
    /// state the copies must own outright: the copier receives the template
    /// by reference and returns the copy to hand out.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::{Arc, Mutex};
    ///
    /// use prototypes::PrototypeRegistry;
    ///
    /// #[derive(Clone, Debug)]
    /// struct Tally {
    ///     count: Arc<Mutex<u64>>,
    /// }
    ///
    /// fn copy_tally(tally: &Tally) -> Tally {
    ///     let count = *tally.count.lock().expect("no other holder panicked");
    ///
    ///     Tally {
    ///         count: Arc::new(Mutex::new(count)),
    ///     }
    /// }
    ///
    /// let mut registry = PrototypeRegistry::new();
    /// registry.register_with_copier(
    ///     "tally",
    ///     Tally {
    ///         count: Arc::new(Mutex::new(0)),
    ///     },
    ///     copy_tally,
    /// )?;
    ///
    /// // Each copy owns its own counter instead of sharing the template's.
    /// let copy = registry.instantiate("tally")?;
    /// *copy.count.lock().expect("no other holder") = 5;
    ///
    /// let other = registry.instantiate("tally")?;
    /// assert_eq!(*other.count.lock().expect("no other holder"), 0);
    /// # Ok::<(), prototypes::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if `name` is already registered.
    /// The existing registration is kept.
    pub fn register_with_copier(
        &mut self,
        name: impl Into<String>,
        template: T,
        copier: fn(&T) -> T,
    ) -> Result<()> {
        match self.entries.entry(name.into()) {
            hash_map::Entry::Occupied(occupied) => Err(Error::DuplicateName {
                name: occupied.key().clone(),
            }),
            hash_map::Entry::Vacant(vacant) => {
                vacant.insert(Prototype { template, copier });
                Ok(())
            }
        }
    }

    /// Stores `template` under `name` unconditionally, returning the
    /// previous template if the name was taken.
    ///
    /// This is the explicit overwrite path - [`register`][Self::register]
    /// refuses to replace silently. The copy function is reset to
    /// [`Clone::clone`]; use
    /// [`replace_with_copier`][Self::replace_with_copier] to keep custom
    /// copy semantics.
    pub fn replace(&mut self, name: impl Into<String>, template: T) -> Option<T>
    where
        T: Clone,
    {
        self.replace_with_copier(name, template, T::clone)
    }

    /// Stores `template` and `copier` under `name` unconditionally,
    /// returning the previous template if the name was taken.
    pub fn replace_with_copier(
        &mut self,
        name: impl Into<String>,
        template: T,
        copier: fn(&T) -> T,
    ) -> Option<T> {
        self.entries
            .insert(name.into(), Prototype { template, copier })
            .map(|previous| previous.template)
    }

    /// Produces a fresh copy of the template registered under `name` by
    /// applying its copy function.
    ///
    /// The template itself stays in the registry, unchanged, ready for the
    /// next instantiation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownName`] if nothing is registered under
    /// `name`.
    pub fn instantiate(&self, name: &str) -> Result<T> {
        let prototype = self.entries.get(name).ok_or_else(|| Error::UnknownName {
            name: name.to_string(),
        })?;

        Ok((prototype.copier)(&prototype.template))
    }

    /// Borrows the template registered under `name`, if any.
    ///
    /// This is a read-only peek; producing a copy goes through
    /// [`instantiate`][Self::instantiate].
    #[must_use]
    pub fn template(&self, name: &str) -> Option<&T> {
        self.entries.get(name).map(|prototype| &prototype.template)
    }

    /// Removes the registration for `name`, returning its template.
    ///
    /// Returns `None` if nothing is registered under `name`.
    pub fn remove(&mut self, name: &str) -> Option<T> {
        self.entries.remove(name).map(|prototype| prototype.template)
    }

    /// Whether a template is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for PrototypeRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(coverage_nightly, coverage(off))] // No API contract to test.
impl<T> Debug for PrototypeRegistry<T> {
    #[cfg_attr(test, mutants::skip)] // No API contract.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.entries.keys().collect();
        names.sort_unstable();

        f.debug_struct(type_name::<Self>())
            .field("names", &names)
            .finish()
    }
}
