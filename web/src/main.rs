use dioxus::prelude::*;

use ui::components::app_navbar::{register_logout, register_nav, NavBuilder};
use ui::components::{AppFooter, AppNavbar};
use ui::core::guard::{self, Gate};
use ui::core::session::SessionRecord;
use ui::core::theme;
use ui::views::{About, Blog, Home, LoginPage, LuxuryVilla, Services};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/services")]
    Services {},
    #[route("/luxury-villa")]
    LuxuryVilla {},
    #[route("/blog")]
    Blog {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::About {},
        "{label}"
    })
}
fn nav_services(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Services {},
        "{label}"
    })
}
fn nav_villas(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::LuxuryVilla {},
        "{label}"
    })
}
fn nav_blog(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Blog {},
        "{label}"
    })
}

/// Post-logout navigation: replace, so the page being left does not stay
/// reachable through Back.
fn logout_nav() {
    navigator().replace(Route::Login {});
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            home: nav_home,
            about: nav_about,
            services: nav_services,
            villas: nav_villas,
            blog: nav_blog,
        });
        register_logout(logout_nav);
    }

    // Global language code. The navbar's locale switcher writes it; every
    // view subscribes so copy refreshes immediately on switch.
    use_context_provider(|| Signal::new("en-US".to_string()));

    // One theme watcher for the whole app; pages and chrome read the
    // mirrored signal instead of attaching their own observers.
    theme::use_theme_watcher();

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Guarded layout around every protected page.
///
/// The session gate is evaluated before any protected content is committed:
/// a closed gate replace-navigates to the login route and renders nothing
/// for this mount, so the protected page never lands in history or on
/// screen. An open gate provides the session record to the chrome (navbar
/// badge) and renders the shared shell around the routed page.
#[component]
fn SiteShell() -> Element {
    let nav = use_navigator();
    let mut session_ctx = use_context_provider(|| Signal::new(None::<SessionRecord>));

    // Subscribing to the route re-runs the gate on every navigation, not
    // just on the shell's first mount.
    let _route = use_route::<Route>();
    #[cfg(debug_assertions)]
    println!("[guard] checking session for {_route:?}");

    match guard::evaluate_session() {
        Gate::Login => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        Gate::Open(user) => {
            if session_ctx.peek().as_ref() != Some(&user) {
                session_ctx.set(Some(user));
            }
            rsx! {
                AppNavbar {}
                main { class: "site-main", Outlet::<Route> {} }
                AppFooter {}
            }
        }
    }
}

/// Wraps the shared login view with this crate's routing: a successful
/// sign-in replace-navigates into the site.
#[component]
fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        LoginPage {
            on_success: move |_| {
                nav.replace(Route::Home {});
            },
        }
    }
}
