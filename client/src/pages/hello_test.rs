use super::*;

#[test]
fn greeting_uses_name() {
    assert_eq!(greeting("Ada"), "Hello, Ada!");
}

#[test]
fn greeting_trims_whitespace() {
    assert_eq!(greeting("  Ada  "), "Hello, Ada!");
}

#[test]
fn greeting_blank_name() {
    assert_eq!(greeting(""), "Hello, stranger!");
    assert_eq!(greeting("   "), "Hello, stranger!");
}

#[test]
fn greeting_keeps_markup_as_text() {
    // Escaping is the view layer's job; the helper must not alter the name.
    assert_eq!(greeting("<b>x</b>"), "Hello, <b>x</b>!");
}
