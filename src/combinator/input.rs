//! Combinator input elements

use futures_util::future::{self, BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;

/// One element of a combinator input sequence.
///
/// An element is either a value that is already known or a computation that
/// settles later. Literals are lifted into already-resolved computations before
/// the combinator starts, so both variants share one completion path.
pub enum Input<T, E> {
    Literal(T),
    Async(BoxFuture<'static, Result<T, E>>),
}

impl<T, E> Input<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Wrap an immediate value
    pub fn literal(value: T) -> Self {
        Input::Literal(value)
    }

    /// Wrap a pending computation
    pub fn future<F>(fut: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Input::Async(fut.boxed())
    }

    /// Lift the element into a computation, resolving literals immediately
    pub fn into_future(self) -> BoxFuture<'static, Result<T, E>> {
        match self {
            Input::Literal(value) => future::ready(Ok(value)).boxed(),
            Input::Async(fut) => fut,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Input::Literal(_))
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Input<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Input::Async(_) => f.write_str("Async(..)"),
        }
    }
}
