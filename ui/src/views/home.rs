use dioxus::prelude::*;

use crate::components::Reveal;
use crate::core::reveal::RevealKind;
use crate::t;

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    let highlights = [
        (t!("home-card-buy-title"), t!("home-card-buy-body")),
        (t!("home-card-sell-title"), t!("home-card-sell-body")),
        (t!("home-card-manage-title"), t!("home-card-manage-body")),
    ];

    let property_types = [
        (t!("home-type-villa-title"), t!("home-type-villa-body")),
        (t!("home-type-penthouse-title"), t!("home-type-penthouse-body")),
        (t!("home-type-cottage-title"), t!("home-type-cottage-body")),
    ];

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-home",
            Reveal { kind: RevealKind::Fade,
                header { class: "hero",
                    p { class: "hero__kicker", {t!("home-hero-kicker")} }
                    h1 { class: "hero__title", {t!("home-hero-title")} }
                    p { class: "hero__lede", {t!("home-hero-lede")} }
                }
            }

            div { class: "card-grid",
                { highlights.iter().enumerate().map(|(i, (title, body))| rsx! {
                    Reveal {
                        key: "{title}",
                        kind: RevealKind::SlideUp,
                        delay_ms: (i as u32) * 120,
                        article { class: "card",
                            h2 { class: "card__title", "{title}" }
                            p { class: "card__body", "{body}" }
                        }
                    }
                })}
            }

            Reveal { kind: RevealKind::SlideLeft,
                h2 { class: "section-title", {t!("home-types-title")} }
            }
            div { class: "card-grid",
                { property_types.iter().enumerate().map(|(i, (title, body))| rsx! {
                    Reveal {
                        key: "{title}",
                        kind: RevealKind::Scale,
                        delay_ms: (i as u32) * 120,
                        article { class: "card card--property",
                            h2 { class: "card__title", "{title}" }
                            p { class: "card__body", "{body}" }
                        }
                    }
                })}
            }

            Reveal { kind: RevealKind::Zoom,
                div { class: "cta-band",
                    h2 { {t!("home-cta-title")} }
                    p { {t!("home-cta-body")} }
                    a {
                        class: "button button--primary",
                        href: "mailto:hello@hearthside.estate",
                        {t!("home-cta-button")}
                    }
                }
            }
        }
    }
}
