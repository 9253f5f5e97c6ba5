use std::any::{Any, TypeId, type_name};
use std::collections::hash_map;
use std::convert::Infallible;
use std::error;
use std::fmt::{self, Debug, Formatter};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hash_hasher::HashedMap;

use crate::{Error, FailurePolicy, Result};

// HashedMap takes the raw value from Hash::hash() and uses it directly as the
// key. This is OK because TypeId already returns a hashed value as its raw
// value, no need to hash it again.
type SlotMap = HashedMap<TypeId, Slot>;

/// What a registry knows about one type.
enum Slot {
    /// The initializer succeeded; this is the instance every caller shares.
    Ready(Arc<dyn Any + Send + Sync>),

    /// The initializer failed at least once and the registry is configured
    /// with [`FailurePolicy::Poison`], so the type is out of service.
    Poisoned,
}

/// Owns at most one lazily initialized instance of each Rust type.
///
/// The first [`get_or_init`][Self::get_or_init] or
/// [`get_or_try_init`][Self::get_or_try_init] call for a type runs the
/// initializer it was given; every later call returns the stored instance
/// and never invokes its initializer argument. Instances are handed out as
/// [`Arc<T>`] and live for as long as the registry does.
///
/// The registry is an ordinary value, so the usual sharing rules apply:
/// borrow it or wrap it in an [`Arc`] to serve multiple threads. Separate
/// registries are fully independent - each can hold its own instance of the
/// same type.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use singletons::SingletonRegistry;
///
/// struct FlagStore {
///     verbose: bool,
/// }
///
/// let registry = SingletonRegistry::new();
///
/// let flags = registry.get_or_init(|| FlagStore { verbose: true });
/// let again = registry.get_or_init(|| unreachable!());
///
/// assert!(Arc::ptr_eq(&flags, &again));
/// assert!(again.verbose);
/// ```
pub struct SingletonRegistry {
    slots: RwLock<SlotMap>,

    failure_policy: FailurePolicy,
}

impl SingletonRegistry {
    /// Creates an empty registry with the default failure handling,
    /// [`FailurePolicy::Retry`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_failure_policy(FailurePolicy::default())
    }

    /// Creates an empty registry that reacts to initializer failures
    /// according to `failure_policy`.
    #[must_use]
    pub fn with_failure_policy(failure_policy: FailurePolicy) -> Self {
        Self {
            slots: RwLock::new(SlotMap::default()),
            failure_policy,
        }
    }

    /// The failure handling this registry was created with.
    #[must_use]
    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Returns the `T` instance, first initializing it via `init` if this
    /// is the earliest access for `T`.
    ///
    /// When multiple threads race to be the first, exactly one runs its
    /// initializer and all of them receive the same instance. See
    /// [`get_or_try_init`][Self::get_or_try_init] for the details of the
    /// locking this implies.
    ///
    /// # Panics
    ///
    /// Panics if the slot for `T` was poisoned by an earlier failed
    /// initialization. Only registries created with
    /// [`FailurePolicy::Poison`] can reach that state; use
    /// [`get_or_try_init`][Self::get_or_try_init] if you need to observe
    /// it as an error instead.
    #[must_use]
    pub fn get_or_init<T, F>(&self, init: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        match self.get_or_try_init(|| Ok::<_, Infallible>(init())) {
            Ok(instance) => instance,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the `T` instance, first initializing it via `init` if this
    /// is the earliest access for `T`.
    ///
    /// If `init` returns an error, nothing is stored and the error comes
    /// back as [`Error::Construction`]. Under the default
    /// [`FailurePolicy::Retry`] the slot stays empty, so the next call for
    /// `T` gets a fresh attempt. Under [`FailurePolicy::Poison`] the slot
    /// is poisoned instead and every later access for `T` fails fast with
    /// [`Error::Poisoned`], without running its initializer.
    ///
    /// The initializer runs under the registry's exclusive lock, which is
    /// what makes the at-most-once guarantee hold. Two consequences:
    ///
    /// * Every other call on the same registry blocks until the
    ///   initializer returns, so keep initializers brief.
    /// * The initializer must not touch the same registry - that
    ///   deadlocks.
    ///
    /// # Example
    ///
    /// ```
    /// use singletons::SingletonRegistry;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// #[error("no configuration file found")]
    /// struct ConfigMissing;
    ///
    /// struct Config {
    ///     verbose: bool,
    /// }
    ///
    /// let registry = SingletonRegistry::new();
    ///
    /// let outcome = registry.get_or_try_init(|| Err::<Config, _>(ConfigMissing));
    /// assert!(outcome.is_err());
    ///
    /// // The failure left the slot empty, so trying again is fine.
    /// let config =
    ///     registry.get_or_try_init(|| Ok::<_, ConfigMissing>(Config { verbose: false }))?;
    /// assert!(!config.verbose);
    /// # Ok::<(), singletons::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`] if `init` was invoked and returned
    /// an error, and [`Error::Poisoned`] if an earlier failure poisoned
    /// the slot for `T`.
    pub fn get_or_try_init<T, E, F>(&self, init: F) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
        E: error::Error + Send + Sync + 'static,
        F: FnOnce() -> std::result::Result<T, E>,
    {
        let type_id = TypeId::of::<T>();

        // Fast path: a slot that exists is never removed or replaced, so a
        // read lock is enough for every access after the first.
        {
            let slots = self.read_slots();

            if let Some(slot) = slots.get(&type_id) {
                return Self::existing(slot);
            }
        }

        let mut slots = self.write_slots();

        // Double-check under the write lock - another thread may have won
        // the race between our two lock acquisitions.
        match slots.entry(type_id) {
            hash_map::Entry::Occupied(entry) => Self::existing(entry.get()),
            hash_map::Entry::Vacant(entry) => match init() {
                Ok(instance) => {
                    let instance = Arc::new(instance);

                    // Stays `Arc<T>` here; it unsizes at the constructor.
                    let stored = Arc::clone(&instance);
                    entry.insert(Slot::Ready(stored));
                    Ok(instance)
                }
                Err(source) => {
                    if self.failure_policy == FailurePolicy::Poison {
                        entry.insert(Slot::Poisoned);
                    }

                    Err(Error::construction::<T>(source))
                }
            },
        }
    }

    /// Returns the already initialized `T` instance, or `None` if no
    /// initialization for `T` has succeeded in this registry.
    ///
    /// This never runs an initializer. A poisoned slot also yields `None`.
    #[must_use]
    pub fn get<T>(&self) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let slots = self.read_slots();

        match slots.get(&TypeId::of::<T>())? {
            Slot::Ready(instance) => Some(Self::typed(instance)),
            Slot::Poisoned => None,
        }
    }

    /// Whether this registry holds an initialized `T` instance.
    #[must_use]
    pub fn contains<T>(&self) -> bool
    where
        T: 'static,
    {
        matches!(
            self.read_slots().get(&TypeId::of::<T>()),
            Some(Slot::Ready(_))
        )
    }

    /// The number of initialized instances this registry holds.
    ///
    /// Poisoned slots are not counted - only instances a caller can
    /// actually obtain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_slots()
            .values()
            .filter(|slot| matches!(slot, Slot::Ready(_)))
            .count()
    }

    /// Whether this registry holds no initialized instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves a slot that already exists for `T`.
    fn existing<T>(slot: &Slot) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        match slot {
            Slot::Ready(instance) => Ok(Self::typed(instance)),
            Slot::Poisoned => Err(Error::poisoned::<T>()),
        }
    }

    fn typed<T>(instance: &Arc<dyn Any + Send + Sync>) -> Arc<T>
    where
        T: Send + Sync + 'static,
    {
        Arc::clone(instance).downcast().unwrap_or_else(|_| {
            unreachable!("slots are keyed by TypeId, so a slot for T always holds a T")
        })
    }

    fn read_slots(&self) -> RwLockReadGuard<'_, SlotMap> {
        // A panicking initializer poisons the lock but never the map: a
        // slot is only inserted after its initializer has already returned.
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_slots(&self) -> RwLockWriteGuard<'_, SlotMap> {
        // See read_slots() for why ignoring lock poisoning is valid here.
        self.slots.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SingletonRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(coverage_nightly, coverage(off))] // No API contract to test.
impl Debug for SingletonRegistry {
    #[cfg_attr(test, mutants::skip)] // No API contract.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("len", &self.len())
            .field("failure_policy", &self.failure_policy)
            .finish()
    }
}
