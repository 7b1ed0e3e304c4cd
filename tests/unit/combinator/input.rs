//! Unit tests for combinator inputs

use fanin::combinator::Input;

#[tokio::test]
async fn test_literal_lifts_into_resolved_future() {
    let input = Input::<_, String>::literal("ready");
    assert!(input.is_literal());
    assert_eq!(input.into_future().await, Ok("ready"));
}

#[tokio::test]
async fn test_async_input_keeps_its_outcome() {
    let input = Input::<i32, _>::future(async { Err("nope".to_string()) });
    assert!(!input.is_literal());
    assert_eq!(input.into_future().await, Err("nope".to_string()));
}

#[test]
fn test_debug_hides_pending_future() {
    let literal = Input::<_, String>::literal(7);
    let pending = Input::<i32, String>::future(async { Ok(1) });
    assert_eq!(format!("{:?}", literal), "Literal(7)");
    assert_eq!(format!("{:?}", pending), "Async(..)");
}
