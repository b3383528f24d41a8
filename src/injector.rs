//! Asynchronous, name-keyed dependency injection container

use crate::{
    error::Error,
    locals::Locals,
    names,
    value::{FromValue, Value}
};
use futures_util::{future::try_join_all, FutureExt};
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock}
};

use self::cell::{DepCell, ProducerFn};

pub use self::factory::{Factory, FromDeps};

pub(crate) mod cell;
pub mod factory;

/// Inner HashMap of registered dependency cells
type CellMap = HashMap<Box<str>, Arc<DepCell>>;

/// Represents an asynchronous dependency injection container that maps
/// string names to lazily-constructed, memoized values.
///
/// Cloning an [`Injector`] produces another handle to the same registry.
/// There is no ambient instance; every consumer receives the injector it
/// depends on explicitly.
///
/// # Example
/// ```
/// use istra::{Injector, Error};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Error> {
/// let injector = Injector::new();
///
/// injector.instance("a", 1);
/// injector.factory("b", &["a"], |a: i32| async move {
///     Ok::<_, Error>(a + 1)
/// })?;
///
/// let b: i32 = injector.get("b").await?;
/// assert_eq!(b, 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Injector {
    registry: Arc<RwLock<CellMap>>
}

impl Injector {
    /// Creates a new, empty injector
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to an already-known value.
    ///
    /// The value is stored as-is; a callable is stored, not invoked.
    /// Re-registration replaces the previous binding.
    pub fn instance<T: Send + Sync + 'static>(&self, name: &str, value: T) {
        #[cfg(feature = "tracing")]
        tracing::trace!("registered instance: {name}");
        self.insert_cell(name, DepCell::eager(Value::new(value)));
    }

    /// Binds `name` to a lazy factory.
    ///
    /// `deps` declares the factory's parameters as dependency names, in
    /// order; they are resolved through this injector, recursively, when the
    /// factory eventually runs. The factory does not run at registration; it
    /// runs at most once, on first demand, and every consumer shares the
    /// settled outcome.
    ///
    /// The declared names are validated immediately, before anything is
    /// registered.
    pub fn factory<F, Args>(&self, name: &str, deps: &[&str], producer: F) -> Result<(), Error>
    where
        F: Factory<Args>,
        Args: FromDeps + Send
    {
        self.factory_with(name, deps, producer, Locals::new())
    }

    /// Binds `name` to a lazy factory with a captured set of [`Locals`].
    ///
    /// The overrides are fixed at registration time and consulted before the
    /// registry whenever the factory's own dependencies are resolved.
    pub fn factory_with<F, Args>(
        &self,
        name: &str,
        deps: &[&str],
        producer: F,
        locals: Locals
    ) -> Result<(), Error>
    where
        F: Factory<Args>,
        Args: FromDeps + Send
    {
        let dep_names = parse_deps::<Args>(deps)?;
        #[cfg(feature = "tracing")]
        tracing::trace!("registered factory: {name}");
        #[cfg(feature = "tracing")]
        let _name: Box<str> = name.into();
        let producer: ProducerFn = Arc::new(move |injector: Injector| {
            let dep_names = dep_names.clone();
            let locals = locals.clone();
            let producer = producer.clone();
            #[cfg(feature = "tracing")]
            let _name = _name.clone();
            async move {
                #[cfg(feature = "tracing")]
                tracing::debug!("producing dependency: {_name}");
                let args = injector.resolve_args::<Args>(&dep_names, &locals).await?;
                producer.call(args).await.map(Value::new)
            }
            .boxed()
        });
        self.insert_cell(name, DepCell::lazy(producer));
        Ok(())
    }

    /// Resolves the value bound to `name` and returns it as a `T`.
    ///
    /// A lazy binding is produced on first demand; later calls observe the
    /// already-settled outcome. The name is looked up exactly as registered;
    /// a name that was never registered fails with [`Error::NotRegistered`].
    /// Requesting a type other than the one stored fails with
    /// [`Error::ResolveFailed`].
    pub async fn get<T: Clone + Send + Sync + 'static>(&self, name: &str) -> Result<T, Error> {
        let value = self.resolve_registered(name).await?;
        T::from_value(name, &value)
    }

    /// Resolves the value bound to `name` as a shared, untyped [`Value`]
    pub async fn get_value(&self, name: &str) -> Result<Value, Error> {
        self.resolve_registered(name).await
    }

    /// Calls `target` with its dependencies resolved by name.
    ///
    /// `deps` declares the target's parameters in order; each resolved value
    /// is passed back in the same position regardless of how long it took to
    /// settle. The result is the target's own return value.
    pub async fn invoke<F, Args>(&self, deps: &[&str], target: F) -> Result<F::Output, Error>
    where
        F: Factory<Args>,
        Args: FromDeps + Send
    {
        self.invoke_with(deps, target, Locals::new()).await
    }

    /// Calls `target` with its dependencies resolved by name, consulting
    /// `locals` before the registry.
    ///
    /// An override present in `locals` is used directly, without touching
    /// the registry; it lives for this call only and is never recorded.
    pub async fn invoke_with<F, Args>(
        &self,
        deps: &[&str],
        target: F,
        locals: Locals
    ) -> Result<F::Output, Error>
    where
        F: Factory<Args>,
        Args: FromDeps + Send
    {
        let dep_names = parse_deps::<Args>(deps)?;
        let args = self.resolve_args::<Args>(&dep_names, &locals).await?;
        target.call(args).await
    }

    async fn resolve_args<Args: FromDeps>(
        &self,
        dep_names: &[Box<str>],
        locals: &Locals
    ) -> Result<Args, Error> {
        let values = self.resolve_values(dep_names, locals).await?;
        Args::from_deps(dep_names, &values)
    }

    /// Resolves each name, preferring `locals`, and joins the results back
    /// in declared order
    async fn resolve_values(
        &self,
        dep_names: &[Box<str>],
        locals: &Locals
    ) -> Result<Vec<Value>, Error> {
        try_join_all(dep_names.iter().map(|name| self.resolve_one(name, locals))).await
    }

    async fn resolve_one(&self, name: &str, locals: &Locals) -> Result<Value, Error> {
        match locals.get(name) {
            Some(value) => Ok(value.clone()),
            None => self.resolve_registered(name).await
        }
    }

    async fn resolve_registered(&self, name: &str) -> Result<Value, Error> {
        #[cfg(feature = "tracing")]
        tracing::trace!("resolving dependency: {name}");
        let cell = self
            .cell(name)
            .ok_or_else(|| Error::not_registered(name))?;
        cell.force(self).await
    }

    /// Fetch the cell for `name`; the lock is released before any await
    fn cell(&self, name: &str) -> Option<Arc<DepCell>> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    fn insert_cell(&self, name: &str, cell: DepCell) {
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), Arc::new(cell));
    }
}

/// Validates the declared dependency list against the callable's arity and
/// normalizes it for lookup
fn parse_deps<Args: FromDeps>(deps: &[&str]) -> Result<Vec<Box<str>>, Error> {
    if deps.len() != Args::ARITY {
        return Err(Error::ArityMismatch { declared: deps.len(), expected: Args::ARITY });
    }
    names::parse_list(deps)
}
