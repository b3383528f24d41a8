//! Per-call dependency overrides

use crate::value::Value;
use std::collections::HashMap;

/// A caller-supplied set of dependency overrides, scoped to a single
/// [`invoke_with`](crate::Injector::invoke_with) call or captured by a
/// registered factory.
///
/// Overrides are consulted before the registry by presence, so a supplied
/// zero or `false` still shadows a registered value. They are never written
/// back into the registry and do not leak into unrelated calls.
///
/// # Example
/// ```
/// use istra::Locals;
///
/// let locals = Locals::new()
///     .with("retries", 0u32)
///     .with("host", String::from("localhost"));
///
/// assert!(locals.contains("retries"));
/// assert_eq!(locals.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Locals {
    entries: HashMap<Box<str>, Value>
}

impl Locals {
    /// Creates an empty set of overrides
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an override for `name`, replacing a previous one
    pub fn insert<T: Send + Sync + 'static>(&mut self, name: &str, value: T) {
        self.entries.insert(name.into(), Value::new(value));
    }

    /// Adds an override for `name` and returns `self` for chaining
    pub fn with<T: Send + Sync + 'static>(mut self, name: &str, value: T) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the override supplied for `name`, if any
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Returns `true` if an override for `name` is present
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns `true` if no overrides are present
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of overrides
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::Locals;

    #[test]
    fn it_starts_empty() {
        let locals = Locals::new();

        assert!(locals.is_empty());
        assert_eq!(locals.len(), 0);
        assert!(!locals.contains("service1"));
    }

    #[test]
    fn it_stores_and_reads_overrides() {
        let mut locals = Locals::new();
        locals.insert("service1", 1);

        let value = locals.get("service1").unwrap();

        assert_eq!(value.downcast_ref::<i32>(), Some(&1));
    }

    #[test]
    fn it_replaces_an_existing_override() {
        let locals = Locals::new()
            .with("service1", 1)
            .with("service1", 2);

        let value = locals.get("service1").unwrap();

        assert_eq!(locals.len(), 1);
        assert_eq!(value.downcast_ref::<i32>(), Some(&2));
    }

    #[test]
    fn it_counts_a_zero_value_as_supplied() {
        let locals = Locals::new().with("retries", 0u32);

        assert!(locals.contains("retries"));
        assert_eq!(locals.get("retries").unwrap().downcast_ref::<u32>(), Some(&0));
    }
}
