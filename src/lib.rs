//! # Istra
//!
//! > Easy & Fast asynchronous dependency injection for Rust based on [Tokio](https://tokio.rs/) runtime.
//!
//! ## Features
//! * Name-keyed registry of eager and lazy dependencies
//! * Lazy, memoized factories with an at-most-once production guarantee
//! * Per-call overrides via [`Locals`]
//! * Full [Tokio](https://tokio.rs/) compatibility
//! * Runs on stable Rust 1.80+
//!
//! ## Example
//! ```toml
//! [dependencies]
//! istra = "0.1.2"
//! tokio = { version = "1", features = ["full"] }
//! ```
//! ```
//! use istra::{Injector, Error};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let injector = Injector::new();
//!
//!     injector.instance("base", 1);
//!     injector.factory("next", &["base"], |base: i32| async move {
//!         Ok::<_, Error>(base + 1)
//!     })?;
//!
//!     let sum = injector
//!         .invoke(&["base", "next"], |base: i32, next: i32| async move {
//!             Ok::<_, Error>(base + next)
//!         })
//!         .await?;
//!
//!     assert_eq!(sum, 3);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(unreachable_pub)]

mod names;

pub mod error;
pub mod injector;
pub mod locals;
pub mod value;

pub use crate::{
    error::Error,
    injector::{Factory, FromDeps, Injector},
    locals::Locals,
    value::{FromValue, Value},
};
