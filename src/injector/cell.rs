//! Lazy, memoized production cells

use super::Injector;
use crate::{error::Error, value::Value};
use futures_util::future::BoxFuture;
use std::{fmt::Debug, sync::Arc};
use tokio::sync::OnceCell;

/// A type-erased producer that runs a registered factory through its injector
pub(crate) type ProducerFn = Arc<
    dyn Fn(Injector) -> BoxFuture<'static, Result<Value, Error>>
    + Send
    + Sync
>;

/// The production state of a registered name
pub(crate) enum DepCell {
    /// A value already known at registration time
    Eager(Value),
    /// A factory that runs on first demand and settles exactly once
    Lazy(LazyCell),
}

pub(crate) struct LazyCell {
    producer: ProducerFn,
    cell: OnceCell<Result<Value, Error>>
}

impl DepCell {
    #[inline]
    pub(crate) fn eager(value: Value) -> Self {
        DepCell::Eager(value)
    }

    #[inline]
    pub(crate) fn lazy(producer: ProducerFn) -> Self {
        DepCell::Lazy(LazyCell { producer, cell: OnceCell::new() })
    }

    /// Resolves the cell's value, triggering the producer on first demand.
    ///
    /// Concurrent demands share a single in-flight production; the settled
    /// outcome, success or failure, is replayed to every later demand
    /// without re-running the producer.
    pub(crate) async fn force(&self, injector: &Injector) -> Result<Value, Error> {
        match self {
            DepCell::Eager(value) => Ok(value.clone()),
            DepCell::Lazy(lazy) => lazy
                .cell
                .get_or_init(|| (lazy.producer)(injector.clone()))
                .await
                .clone()
        }
    }
}

impl Debug for DepCell {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepCell::Eager(_) => f.write_str("DepCell::Eager(..)"),
            DepCell::Lazy(_) => f.write_str("DepCell::Lazy(..)")
        }
    }
}
