#![cfg(test)]
/*!
Stylesheet lint for the web build.

Purpose:
- Ensure that CSS selectors the Rust components rely on (reveal animation
  states, theme variants, the guarded shell's chrome) remain present in the
  shipped stylesheets:
  web/assets/main.css and ui/assets/styling/navbar.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression (a reveal wrapper with no `.reveal`
  rules ships invisible content).

How it works:
- Both stylesheets are embedded at compile time with `include_str!`.
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup in `ui`.
    2. Adjust REQUIRED_* below accordingly.
*/

const MAIN_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));
const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

/// Selectors the page components emit.
const REQUIRED_MAIN_SELECTORS: &[&str] = &[
    // Global / theme
    ":root",
    "html.dark",
    "body {",
    ".page {",
    ".site-main",
    // Hero & sections
    ".hero {",
    ".hero__title",
    ".hero__lede",
    ".section-title",
    ".card-grid",
    ".card {",
    ".card--property",
    ".cta-band",
    ".button--primary",
    ".stats-band",
    // Reveal states (one per RevealKind plus the visible state)
    ".reveal {",
    ".reveal.is-visible",
    ".reveal--fade",
    ".reveal--slide-left",
    ".reveal--slide-right",
    ".reveal--slide-up",
    ".reveal--scale",
    ".reveal--zoom",
    ".reveal--bounce",
    ".reveal--rotate",
    // Carousel & wheel
    ".carousel {",
    ".carousel__arrow",
    ".carousel__dot--active",
    ".wheel {",
    ".wheel__spoke--active",
    // Journal & login
    ".post-card",
    ".login-card",
    ".login-card__error",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

/// Selectors the shared chrome emits (navbar + footer).
const REQUIRED_NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar--light",
    ".navbar--dark",
    ".navbar__brand",
    ".navbar__links",
    ".navbar__link",
    ".navbar__theme-toggle",
    ".navbar__badge",
    ".navbar__logout",
    ".visually-hidden",
    ".footer {",
    ".footer--light",
    ".footer--dark",
    ".footer__legal",
];

fn assert_selectors(css: &str, required: &[&str], which: &str) {
    let missing: Vec<&str> = required.iter().copied().filter(|s| !css.contains(s)).collect();
    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in {which}:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn main_stylesheet_contains_required_selectors() {
    assert_selectors(MAIN_CSS, REQUIRED_MAIN_SELECTORS, "web/assets/main.css");
}

#[test]
fn navbar_stylesheet_contains_required_selectors() {
    assert_selectors(
        NAVBAR_CSS,
        REQUIRED_NAVBAR_SELECTORS,
        "ui/assets/styling/navbar.css",
    );
}

#[test]
fn stylesheets_not_trivially_empty() {
    let non_ws = |s: &str| s.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws(MAIN_CSS) > 2_000,
        "main.css appears unexpectedly small ({} non-whitespace chars)",
        non_ws(MAIN_CSS)
    );
    assert!(
        non_ws(NAVBAR_CSS) > 1_000,
        "navbar.css appears unexpectedly small ({} non-whitespace chars)",
        non_ws(NAVBAR_CSS)
    );
}

#[test]
fn every_reveal_variant_has_a_from_pose() {
    // Each modifier must set an initial transform (fade's pose is `none`).
    for variant in [
        ".reveal--slide-left",
        ".reveal--slide-right",
        ".reveal--slide-up",
        ".reveal--scale",
        ".reveal--zoom",
        ".reveal--bounce",
        ".reveal--rotate",
    ] {
        let start = MAIN_CSS
            .find(variant)
            .unwrap_or_else(|| panic!("{variant} missing from main.css"));
        let block_end = MAIN_CSS[start..]
            .find('}')
            .map(|i| start + i)
            .expect("unterminated CSS block");
        assert!(
            MAIN_CSS[start..block_end].contains("transform"),
            "{variant} has no initial transform pose"
        );
    }
}
