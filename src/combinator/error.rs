//! Combinator failure taxonomy

use std::error::Error;
use std::fmt;
use tokio::task::JoinError;

/// Reason an [`All`](super::All) combinator failed.
#[derive(Debug)]
pub enum AllError<E> {
    /// The input was not an ordered sequence. Raised before any element is touched.
    InvalidArgument(String),
    /// The first element to fail, with its error passed through unchanged.
    Element { index: usize, source: E },
    /// An element task panicked or was aborted before it settled.
    Interrupted { index: usize, source: JoinError },
}

impl<E> AllError<E> {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AllError::InvalidArgument(message.into())
    }

    /// Position of the element that settled the combinator, if any
    pub fn index(&self) -> Option<usize> {
        match self {
            AllError::InvalidArgument(_) => None,
            AllError::Element { index, .. } | AllError::Interrupted { index, .. } => Some(*index),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, AllError::InvalidArgument(_))
    }

    /// The element error, when the failure came from an element
    pub fn into_element(self) -> Option<E> {
        match self {
            AllError::Element { source, .. } => Some(source),
            _ => None,
        }
    }

    pub fn element(&self) -> Option<&E> {
        match self {
            AllError::Element { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for AllError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllError::InvalidArgument(message) => write!(f, "invalid argument: {}", message),
            // Element failures are reported verbatim
            AllError::Element { source, .. } => write!(f, "{}", source),
            AllError::Interrupted { index, source } => {
                write!(f, "input {} did not settle: {}", index, source)
            }
        }
    }
}

impl<E> Error for AllError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AllError::InvalidArgument(_) => None,
            AllError::Element { source, .. } => source.source(),
            AllError::Interrupted { source, .. } => Some(source),
        }
    }
}
