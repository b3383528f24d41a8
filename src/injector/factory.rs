//! Generic callables producing and consuming dependencies

use crate::{
    error::Error,
    value::{FromValue, Value}
};
use std::future::Future;

/// A trait that describes a generic asynchronous function whose parameters
/// are resolved through an [`Injector`](crate::Injector), either as a
/// registered factory or as an invoked target
pub trait Factory<Args>: Clone + Send + Sync + 'static {
    /// A type of value the callable produces
    type Output: Send + Sync + 'static;

    /// A future returned by the callable
    type Future: Future<Output = Result<Self::Output, Error>> + Send;

    /// Calls the function with already-resolved arguments
    fn call(&self, args: Args) -> Self::Future;
}

impl<F, Fut, R> Factory<()> for F
where
    F: Fn() -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<R, Error>> + Send,
    R: Send + Sync + 'static
{
    type Output = R;
    type Future = Fut;

    #[inline]
    fn call(&self, _: ()) -> Self::Future {
        self()
    }
}

macro_rules! define_factory ({ $($param:ident)* } => {
    impl<F, Fut, R, $($param,)*> Factory<($($param,)*)> for F
    where
        F: Fn($($param),*) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = Result<R, Error>> + Send,
        R: Send + Sync + 'static
    {
        type Output = R;
        type Future = Fut;

        #[inline]
        #[allow(non_snake_case)]
        fn call(&self, ($($param,)*): ($($param,)*)) -> Self::Future {
            (self)($($param,)*)
        }
    }
});

define_factory! { T1 }
define_factory! { T1 T2 }
define_factory! { T1 T2 T3 }
define_factory! { T1 T2 T3 T4 }
define_factory! { T1 T2 T3 T4 T5 }

/// A trait that binds resolved dependency values onto a callable's parameter
/// tuple, preserving declaration order
pub trait FromDeps: Sized {
    /// Number of parameters the callable declares
    const ARITY: usize;

    /// Builds the parameter tuple from the values resolved for `names`
    fn from_deps(names: &[Box<str>], values: &[Value]) -> Result<Self, Error>;
}

impl FromDeps for () {
    const ARITY: usize = 0;

    #[inline]
    fn from_deps(_: &[Box<str>], _: &[Value]) -> Result<Self, Error> {
        Ok(())
    }
}

macro_rules! define_from_deps ({ $($param:ident)* } => {
    impl<$($param: FromValue),*> FromDeps for ($($param,)*) {
        const ARITY: usize = [$(stringify!($param)),*].len();

        #[inline]
        #[allow(non_snake_case)]
        fn from_deps(names: &[Box<str>], values: &[Value]) -> Result<Self, Error> {
            let mut parts = names.iter().zip(values);
            Ok(($(
                {
                    let (name, value) = parts
                        .next()
                        .ok_or(Error::ArityMismatch { declared: values.len(), expected: Self::ARITY })?;
                    $param::from_value(name, value)?
                },
            )*))
        }
    }
});

define_from_deps! { T1 }
define_from_deps! { T1 T2 }
define_from_deps! { T1 T2 T3 }
define_from_deps! { T1 T2 T3 T4 }
define_from_deps! { T1 T2 T3 T4 T5 }
