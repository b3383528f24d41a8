//! Type-erased storage for registered dependencies

use crate::error::Error;
use std::{
    any::Any,
    fmt::Debug,
    sync::Arc
};

/// A shared, type-erased dependency value.
///
/// Cloning a [`Value`] is cheap and every clone observes the identical
/// underlying allocation. Register an [`Arc<T>`] value to share one instance
/// by reference across all consumers.
///
/// # Example
/// ```
/// use istra::Value;
///
/// let value = Value::new(42);
///
/// assert_eq!(value.downcast_ref::<i32>(), Some(&42));
/// assert!(value.downcast_ref::<String>().is_none());
/// ```
#[derive(Clone)]
pub struct Value(Arc<dyn Any + Send + Sync>);

impl Value {
    /// Wraps `value` into a shared, type-erased holder
    #[inline]
    pub fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Returns a reference to the inner `T` if the held value is a `T`
    #[inline]
    pub fn downcast_ref<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns a shared pointer to the inner `T` if the held value is a `T`
    #[inline]
    pub fn downcast<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.0.clone().downcast::<T>().ok()
    }
}

impl Debug for Value {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Value(..)")
    }
}

/// A trait that defines how to extract a typed dependency from a resolved [`Value`]
pub trait FromValue: Sized {
    /// Extracts `Self` from the value resolved for `name`
    fn from_value(name: &str, value: &Value) -> Result<Self, Error>;
}

impl<T: Clone + Send + Sync + 'static> FromValue for T {
    #[inline]
    fn from_value(name: &str, value: &Value) -> Result<Self, Error> {
        value
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| Error::resolve_failed(name))
    }
}
