//! Unit tests for combinator errors

use fanin::combinator::AllError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
struct Inner;

impl fmt::Display for Inner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("connection reset")
    }
}

impl Error for Inner {}

#[derive(Debug)]
struct Outer(Inner);

impl fmt::Display for Outer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fetch failed")
    }
}

impl Error for Outer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

#[test]
fn test_element_error_displays_verbatim() {
    let err = AllError::Element {
        index: 2,
        source: Outer(Inner),
    };
    assert_eq!(err.to_string(), "fetch failed");
    assert_eq!(err.index(), Some(2));
    assert_eq!(err.source().map(|s| s.to_string()), Some("connection reset".to_string()));
}

#[test]
fn test_invalid_argument() {
    let err: AllError<Outer> = AllError::invalid_argument("argument must be an array, got string");
    assert!(err.is_invalid_argument());
    assert_eq!(err.index(), None);
    assert!(err.element().is_none());
    assert_eq!(
        err.to_string(),
        "invalid argument: argument must be an array, got string"
    );
    assert!(err.source().is_none());
}
