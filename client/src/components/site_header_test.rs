use super::*;

#[test]
fn home_is_active_only_on_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/form"));
}

#[test]
fn section_links_match_any_subpath() {
    assert!(is_active("/hello/world", "/hello/ada"));
    assert!(is_active("/form", "/form"));
    assert!(!is_active("/form", "/formal"));
    assert!(!is_active("/hello/world", "/"));
}
