use dioxus::prelude::*;

use crate::components::{CapabilityWheel, Reveal, WheelItem};
use crate::core::reveal::RevealKind;
use crate::t;

#[component]
pub fn Services() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let offerings = [
        (
            t!("services-card-valuation-title"),
            t!("services-card-valuation-body"),
        ),
        (
            t!("services-card-marketing-title"),
            t!("services-card-marketing-body"),
        ),
        (
            t!("services-card-tours-title"),
            t!("services-card-tours-body"),
        ),
        (
            t!("services-card-negotiation-title"),
            t!("services-card-negotiation-body"),
        ),
    ];

    let capabilities = vec![
        WheelItem {
            title: t!("services-wheel-photography-title"),
            blurb: t!("services-wheel-photography-blurb"),
        },
        WheelItem {
            title: t!("services-wheel-listing-title"),
            blurb: t!("services-wheel-listing-blurb"),
        },
        WheelItem {
            title: t!("services-wheel-social-title"),
            blurb: t!("services-wheel-social-blurb"),
        },
        WheelItem {
            title: t!("services-wheel-staging-title"),
            blurb: t!("services-wheel-staging-blurb"),
        },
        WheelItem {
            title: t!("services-wheel-analytics-title"),
            blurb: t!("services-wheel-analytics-blurb"),
        },
    ];

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-services",
            Reveal { kind: RevealKind::Fade,
                header { class: "hero",
                    h1 { class: "hero__title", {t!("services-hero-title")} }
                    p { class: "hero__lede", {t!("services-hero-lede")} }
                }
            }

            div { class: "card-grid",
                { offerings.iter().enumerate().map(|(i, (title, body))| rsx! {
                    Reveal {
                        key: "{title}",
                        kind: RevealKind::SlideUp,
                        delay_ms: (i as u32) * 100,
                        article { class: "card",
                            h2 { class: "card__title", "{title}" }
                            p { class: "card__body", "{body}" }
                        }
                    }
                })}
            }

            Reveal { kind: RevealKind::SlideLeft,
                div { class: "prose",
                    h2 { class: "section-title", {t!("services-wheel-title")} }
                    p { {t!("services-wheel-lede")} }
                }
            }
            CapabilityWheel { items: capabilities }
        }
    }
}
