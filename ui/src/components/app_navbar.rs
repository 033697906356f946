use crate::core::session::{self, SessionRecord};
use crate::core::theme::{self, ACTIVE_THEME};
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (footer shares it; see components/app_footer.rs)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// The launcher registers a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` never needs to know the platform's `Route` enum.
/// `AppNavbar` renders localized labels *inside* each supplied link.
///
/// Registration (in the launcher crate, before rendering the root):
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     ...
/// });
/// ```
///
/// The logout control needs a navigation too (session cleared, then away
/// from the protected page); the launcher supplies that as a plain fn via
/// `register_logout`.
pub struct NavBuilder {
    // Each closure receives the localized label and returns a Link (or an
    // element styled as a nav link) containing exactly that label.
    pub home: fn(label: &str) -> Element,
    pub about: fn(label: &str) -> Element,
    pub services: fn(label: &str) -> Element,
    pub villas: fn(label: &str) -> Element,
    pub blog: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// Navigation performed after the session is cleared (replace to login).
static ON_LOGOUT: OnceCell<fn()> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

pub fn register_logout(navigate: fn()) {
    let _ = ON_LOGOUT.set(navigate);
}

#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Obtain global language code signal if the launcher provided it.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code (if provided)
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    // Cached theme mirror; the class below re-renders on every observed flip.
    let theme = *ACTIVE_THEME.read();

    // Session context from the guarded shell. Absent context or a torn
    // record both fall back to the "U" badge.
    let session_ctx: Option<Signal<Option<SessionRecord>>> = try_use_context();
    let initials = session_ctx
        .as_ref()
        .and_then(|s| s())
        .map(|user| user.initials())
        .unwrap_or_else(|| "U".to_string());

    #[cfg(debug_assertions)]
    println!("[navbar] render theme={theme:?} badge={initials}");

    let on_lang_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            // Propagate to the global language code signal if present.
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let on_logout = move |_| {
        session::log_out();
        if let Some(navigate) = ON_LOGOUT.get() {
            navigate();
        }
    };

    // Build the localized nav from the registered builder.
    let nav_links: Option<VNode> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"));
        let about = (b.about)(&t!("nav-about"));
        let services = (b.services)(&t!("nav-services"));
        let villas = (b.villas)(&t!("nav-villas"));
        let blog = (b.blog)(&t!("nav-blog"));

        rsx! {
            nav { class: "navbar__links",
                {home}
                {about}
                {services}
                {villas}
                {blog}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    let tagline = t!("tagline");
    let theme_glyph = if theme.is_dark() { "☀" } else { "☾" };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "navbar navbar--{theme.suffix()}",
            // Hidden marker ensures AppNavbar re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Hearthside" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = nav_links {
                    {nav}
                }

                div { class: "navbar__controls",
                    // Theme toggle: the single writer of the root marker.
                    button {
                        class: "navbar__theme-toggle",
                        aria_label: t!("nav-theme-toggle"),
                        onclick: move |_| theme::toggle(),
                        "{theme_glyph}"
                    }

                    // Locale switcher
                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_lang_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", "{c}" }
                                    }
                                })}
                            }
                        }
                    }

                    // Session badge + logout
                    span { class: "navbar__badge", title: t!("nav-account-label"), "{initials}" }
                    button {
                        class: "navbar__logout",
                        onclick: on_logout,
                        {t!("nav-logout")}
                    }
                }
            }
        }
    }
}
