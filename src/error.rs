//! Describes dependency resolution errors

use std::{
    error::Error as StdError,
    fmt::{Display, Formatter}
};

/// Represents a failure raised while registering or resolving dependencies
#[derive(Debug, Clone)]
pub enum Error {
    /// The requested name has no registration
    NotRegistered(Box<str>),
    /// The registered value could not be downcast to the requested type
    ResolveFailed(Box<str>),
    /// A declared dependency name is not a bare identifier
    MalformedName(Box<str>),
    /// The declared dependency list does not match the callable's parameter count
    ArityMismatch { declared: usize, expected: usize },
    /// An application-level failure raised by a factory or an invoked function
    Other(Box<str>),
}

impl Error {
    /// Creates an application-level [`Error`] from any displayable value
    pub fn custom(err: impl Display) -> Self {
        Error::Other(err.to_string().into())
    }

    #[inline]
    pub(crate) fn not_registered(name: &str) -> Self {
        Error::NotRegistered(name.into())
    }

    #[inline]
    pub(crate) fn resolve_failed(name: &str) -> Self {
        Error::ResolveFailed(name.into())
    }

    #[inline]
    pub(crate) fn malformed_name(raw: &str) -> Self {
        Error::MalformedName(raw.into())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotRegistered(name) => write!(f, "Injector Error: dependency not registered: {name}"),
            Error::ResolveFailed(name) => write!(f, "Injector Error: unable to resolve the dependency: {name}"),
            Error::MalformedName(raw) => write!(f, "Injector Error: malformed dependency name: {raw}"),
            Error::ArityMismatch { declared, expected } =>
                write!(f, "Injector Error: {declared} dependency names declared for a function with {expected} parameters"),
            Error::Other(msg) => write!(f, "{msg}")
        }
    }
}

impl StdError for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn it_formats_not_registered() {
        let err = Error::not_registered("service1");

        assert_eq!(err.to_string(), "Injector Error: dependency not registered: service1");
    }

    #[test]
    fn it_formats_arity_mismatch() {
        let err = Error::ArityMismatch { declared: 2, expected: 1 };

        assert_eq!(err.to_string(), "Injector Error: 2 dependency names declared for a function with 1 parameters");
    }

    #[test]
    fn it_keeps_custom_message_untouched() {
        let err = Error::custom("boom");

        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn it_clones_for_replay() {
        let err = Error::resolve_failed("service1");
        let replayed = err.clone();

        assert_eq!(err.to_string(), replayed.to_string());
    }
}
