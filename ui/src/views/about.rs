use dioxus::prelude::*;

use crate::components::{Reveal, Testimonial, TestimonialCarousel};
use crate::core::reveal::{RevealKind, TriggerMode};
use crate::t;

#[component]
pub fn About() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let specialties = [
        (
            t!("about-spec-residential-title"),
            t!("about-spec-residential-body"),
        ),
        (
            t!("about-spec-commercial-title"),
            t!("about-spec-commercial-body"),
        ),
        (
            t!("about-spec-relocation-title"),
            t!("about-spec-relocation-body"),
        ),
        (t!("about-spec-staging-title"), t!("about-spec-staging-body")),
    ];

    let stats = [
        ("18", t!("about-stat-years-label")),
        ("1,400+", t!("about-stat-homes-label")),
        ("96%", t!("about-stat-clients-label")),
    ];

    let testimonials = vec![
        Testimonial {
            quote: t!("testimonial-1-quote"),
            name: t!("testimonial-1-name"),
            role: t!("testimonial-1-role"),
        },
        Testimonial {
            quote: t!("testimonial-2-quote"),
            name: t!("testimonial-2-name"),
            role: t!("testimonial-2-role"),
        },
        Testimonial {
            quote: t!("testimonial-3-quote"),
            name: t!("testimonial-3-name"),
            role: t!("testimonial-3-role"),
        },
    ];

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-about",
            Reveal { kind: RevealKind::Fade,
                header { class: "hero",
                    h1 { class: "hero__title", {t!("about-hero-title")} }
                    p { class: "hero__lede", {t!("about-hero-lede")} }
                }
            }

            Reveal { kind: RevealKind::SlideRight,
                div { class: "prose",
                    h2 { class: "section-title", {t!("about-story-title")} }
                    p { {t!("about-story-1")} }
                    p { {t!("about-story-2")} }
                }
            }

            h2 { class: "section-title", {t!("about-specialties-title")} }
            div { class: "card-grid",
                { specialties.iter().enumerate().map(|(i, (title, body))| rsx! {
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

            // The stats strip re-animates on every pass through the viewport.
            Reveal { kind: RevealKind::Bounce, mode: TriggerMode::Repeat,
                div { class: "stats-band",
                    { stats.iter().map(|(value, label)| rsx! {
                        div { key: "{label}", class: "stats-band__item",
                            span { class: "stats-band__value", "{value}" }
                            span { class: "stats-band__label", "{label}" }
                        }
                    })}
                }
            }

            Reveal { kind: RevealKind::Fade,
                h2 { class: "section-title", {t!("about-testimonials-title")} }
            }
            TestimonialCarousel { slides: testimonials }
        }
    }
}
