use std::any::type_name;
use std::borrow::Borrow;
use std::collections::hash_map;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

use foldhash::{HashMap, HashMapExt};

use crate::{Error, Result};

/// The stored creation function for one key.
type Creator<P, A> = Box<dyn Fn(A) -> P + Send + Sync>;

/// Maps discriminator keys to creation functions, so the concrete product
/// made for a key is decided at registration time instead of being spelled
/// out at every creation site.
///
/// `K` is the discriminator key, `P` the product every creator returns and
/// `A` the argument value passed through to the creator (`()` when creators
/// take no input). `P` is typically a boxed trait object: the factory is
/// then polymorphic over exactly the capability set that trait declares,
/// and callers never learn which concrete type served their key.
///
/// Keys are unique. Registering a taken key is an error and the original
/// creator is kept; overwriting happens only through the explicit
/// [`replace`][Self::replace] call. Looking up a key nothing was registered
/// under is likewise an explicit error - there is no silent default
/// product.
///
/// The factory is not internally synchronized. Mutation requires
/// `&mut self`, so the borrow checker already serializes it; a populated
/// factory can be shared read-only across threads without further locking,
/// since creators are required to be `Send + Sync`. The factory itself is
/// `Send` and `Sync` whenever `K` is.
///
/// # Example
///
/// ```
/// use keyed_factory::KeyedFactory;
///
/// trait Greeter {
///     fn greet(&self) -> String;
/// }
///
/// struct Human;
///
/// impl Greeter for Human {
///     fn greet(&self) -> String {
///         "hello".to_string()
///     }
/// }
///
/// struct Robot;
///
/// impl Greeter for Robot {
///     fn greet(&self) -> String {
///         "BEEP".to_string()
///     }
/// }
///
/// let mut factory: KeyedFactory<&str, Box<dyn Greeter>> = KeyedFactory::new();
/// factory.register("human", |()| Box::new(Human))?;
/// factory.register("robot", |()| Box::new(Robot))?;
///
/// // The caller sees the `Greeter` capability set, never a concrete type.
/// let greeter = factory.create("robot")?;
/// assert_eq!(greeter.greet(), "BEEP");
/// # Ok::<(), keyed_factory::Error>(())
/// ```
pub struct KeyedFactory<K, P, A = ()> {
    creators: HashMap<K, Creator<P, A>>,
}

impl<K, P, A> KeyedFactory<K, P, A>
where
    K: Eq + Hash + Debug,
{
    /// Creates an empty factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            creators: HashMap::new(),
        }
    }

    /// Associates `key` with `creator`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if a creator is already registered
    /// for `key`. The existing registration is kept.
    pub fn register<F>(&mut self, key: K, creator: F) -> Result<()>
    where
        F: Fn(A) -> P + Send + Sync + 'static,
    {
        match self.creators.entry(key) {
            hash_map::Entry::Occupied(occupied) => Err(Error::duplicate_key(occupied.key())),
            hash_map::Entry::Vacant(vacant) => {
                vacant.insert(Box::new(creator));
                Ok(())
            }
        }
    }

    /// Associates `key` with `creator` unconditionally, dropping any
    /// creator previously registered for it.
    ///
    /// This is the explicit overwrite path - [`register`][Self::register]
    /// refuses to replace silently.
    pub fn replace<F>(&mut self, key: K, creator: F)
    where
        F: Fn(A) -> P + Send + Sync + 'static,
    {
        _ = self.creators.insert(key, Box::new(creator));
    }

    /// Invokes the creator registered for `key` with `args` and returns its
    /// product.
    ///
    /// The key may be any borrowed form of `K`, so a `String`-keyed factory
    /// is queried with a plain `&str`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKey`] if no creator is registered for `key`.
    pub fn create_with<Q>(&self, key: &Q, args: A) -> Result<P>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + Debug + ?Sized,
    {
        let creator = self.creators.get(key).ok_or_else(|| Error::unknown_key(key))?;

        Ok(creator(args))
    }

    /// Removes the creator registered for `key`, returning whether one was
    /// registered.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.creators.remove(key).is_some()
    }

    /// Whether a creator is registered for `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.creators.contains_key(key)
    }

    /// The registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.creators.keys()
    }

    /// The number of registered creators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.creators.len()
    }

    /// Whether the factory has no creators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }
}

impl<K, P> KeyedFactory<K, P, ()>
where
    K: Eq + Hash + Debug,
{
    /// Invokes the creator registered for `key` and returns its product.
    ///
    /// This is [`create_with`][Self::create_with] for factories whose
    /// creators take no arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKey`] if no creator is registered for `key`.
    pub fn create<Q>(&self, key: &Q) -> Result<P>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + Debug + ?Sized,
    {
        self.create_with(key, ())
    }
}

impl<K, P, A> Default for KeyedFactory<K, P, A>
where
    K: Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(coverage_nightly, coverage(off))] // No API contract to test.
impl<K, P, A> Debug for KeyedFactory<K, P, A>
where
    K: Debug,
{
    #[cfg_attr(test, mutants::skip)] // No API contract.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("keys", &self.creators.keys().collect::<Vec<_>>())
            .field(
                "creators",
                &format_args!(
                    "Box<dyn Fn({args}) -> {product}>",
                    args = type_name::<A>(),
                    product = type_name::<P>()
                ),
            )
            .finish()
    }
}
