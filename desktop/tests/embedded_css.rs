#![cfg(test)]
//! Guards the two stylesheets that release desktop builds inline instead of
//! loading from disk: the shared theme (inlined by `desktop/src/main.rs`) and
//! the navbar sheet (inlined by `ui::components::app_navbar`).
//!
//! A broken path fails at compile time; a truncated file fails here.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

#[test]
fn embedded_sheets_are_not_blank() {
    for (name, sheet) in [("theme", THEME_CSS), ("navbar", NAVBAR_CSS)] {
        assert!(!sheet.trim().is_empty(), "{name} stylesheet is empty");
    }
}

#[test]
fn navbar_sheet_styles_registered_links() {
    // Class names emitted by the NavBuilder functions in desktop/src/main.rs.
    for token in [".navbar__links", ".navbar__link", ".navbar__link--cta", ".navbar__brand"] {
        assert!(
            NAVBAR_CSS.contains(token),
            "Expected token `{token}` missing from navbar stylesheet"
        );
    }
}

#[test]
fn theme_defines_palette_used_by_navbar() {
    // navbar.css falls back to literals, but the theme should own the palette.
    for var in ["--color-blue:", "--color-border:", "--color-ink:", "--color-teal:"] {
        assert!(THEME_CSS.contains(var), "theme is missing `{var}`");
    }
}
