//! Unit tests for list formatting

use fanin::format::format_list;

#[test]
fn test_format_list() {
    assert_eq!(format_list::<&str>(&[]), "");
    assert_eq!(format_list(&["apple"]), "apple");
    assert_eq!(format_list(&["apple", "banana"]), "apple and banana");
    assert_eq!(
        format_list(&["apple", "banana", "cherry", "date"]),
        "apple, banana, cherry and date"
    );
}

#[test]
fn test_format_list_owned_strings() {
    let items = vec!["3".to_string(), "42".to_string(), "foo".to_string()];
    assert_eq!(format_list(&items), "3, 42 and foo");
}
