#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that CSS selectors the shared UI components rely on (carousel track,
  image skeletons, login form, toasts) remain present in the unified theme:
  ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile-time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--secondary",
    ".button--specialty",
    ".button--cta",
    ".button--outline",
    ".section-title__highlight--orange",
    // Preloaded media
    ".media-frame__skeleton",
    ".media-frame__skeleton--failed",
    ".media-frame__image--loaded",
    ".media-frame__retry",
    // Carousel
    ".carousel__track",
    ".carousel__item",
    ".carousel__button",
    ".carousel__dot--active",
    // Login form
    ".login-form__submit",
    ".login-form__alert",
    ".form-field--invalid",
    ".form-field__error",
    // Toasts
    ".toast-region",
    ".toast--success",
    ".toast--error",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn skeleton_pulse_animation_is_defined() {
    // The loading skeleton references the pulse keyframes by name.
    let has_keyframes = THEME_CSS.contains("@keyframes pulse");
    let has_usage = THEME_CSS.contains("animation: pulse");
    assert!(
        has_keyframes && has_usage,
        "Skeleton pulse animation incomplete (keyframes: {has_keyframes}, usage: {has_usage})"
    );
}
