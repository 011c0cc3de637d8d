#![cfg(test)]
//! The desktop binary inlines `ui/assets/theme/main.css`; a broken path or a
//! truncated file would only show up as an unstyled window at runtime.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(!EMBEDDED_CSS.trim().is_empty(), "embedded theme is empty");
    assert!(!NAVBAR_CSS.trim().is_empty(), "navbar stylesheet is empty");
}

#[test]
fn theme_defines_the_variables_navbar_falls_back_from() {
    for var in ["--color-surface", "--color-border", "--color-text-muted", "--color-accent"] {
        assert!(
            EMBEDDED_CSS.contains(&format!("{var}:")),
            "theme doesn't define {var}, navbar.css relies on it"
        );
        assert!(NAVBAR_CSS.contains(var), "navbar.css no longer uses {var}");
    }
}
