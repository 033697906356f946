use dioxus::prelude::*;

use crate::components::Reveal;
use crate::core::reveal::RevealKind;
use crate::t;

#[component]
pub fn LuxuryVilla() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let features = [
        (
            t!("villa-feature-grounds-title"),
            t!("villa-feature-grounds-body"),
        ),
        (
            t!("villa-feature-pools-title"),
            t!("villa-feature-pools-body"),
        ),
        (
            t!("villa-feature-privacy-title"),
            t!("villa-feature-privacy-body"),
        ),
        (
            t!("villa-feature-concierge-title"),
            t!("villa-feature-concierge-body"),
        ),
    ];

    let listings = [
        (t!("villa-listing-1-name"), t!("villa-listing-1-detail")),
        (t!("villa-listing-2-name"), t!("villa-listing-2-detail")),
        (t!("villa-listing-3-name"), t!("villa-listing-3-detail")),
    ];

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-villa",
            Reveal { kind: RevealKind::Fade,
                header { class: "hero hero--villa",
                    p { class: "hero__kicker", {t!("villa-hero-kicker")} }
                    h1 { class: "hero__title", {t!("villa-hero-title")} }
                    p { class: "hero__lede", {t!("villa-hero-lede")} }
                }
            }

            div { class: "card-grid",
                { features.iter().enumerate().map(|(i, (title, body))| rsx! {
                    Reveal {
                        key: "{title}",
                        kind: RevealKind::Rotate,
                        delay_ms: (i as u32) * 100,
                        article { class: "card",
                            h2 { class: "card__title", "{title}" }
                            p { class: "card__body", "{body}" }
                        }
                    }
                })}
            }

            Reveal { kind: RevealKind::SlideRight,
                h2 { class: "section-title", {t!("villa-listings-title")} }
            }
            div { class: "card-grid",
                { listings.iter().enumerate().map(|(i, (name, detail))| rsx! {
                    Reveal {
                        key: "{name}",
                        kind: RevealKind::Zoom,
                        delay_ms: (i as u32) * 140,
                        article { class: "card card--property",
                            h2 { class: "card__title", "{name}" }
                            p { class: "card__body", "{detail}" }
                        }
                    }
                })}
            }

            Reveal { kind: RevealKind::Zoom,
                div { class: "cta-band",
                    h2 { {t!("villa-cta-title")} }
                    p { {t!("villa-cta-body")} }
                    a {
                        class: "button button--primary",
                        href: "mailto:villas@hearthside.estate",
                        {t!("villa-cta-button")}
                    }
                }
            }
        }
    }
}
