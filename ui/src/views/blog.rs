use dioxus::prelude::*;

use crate::components::Reveal;
use crate::core::format::format_post_date;
use crate::core::reveal::RevealKind;
use crate::t;

#[component]
pub fn Blog() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    // Publication timestamps stay untranslated; only the copy is localized.
    let posts = [
        (
            t!("blog-post-coastal-title"),
            t!("blog-post-coastal-excerpt"),
            "2026-06-18T09:00:00Z",
        ),
        (
            t!("blog-post-staging-title"),
            t!("blog-post-staging-excerpt"),
            "2026-04-02T10:30:00Z",
        ),
        (
            t!("blog-post-mortgage-title"),
            t!("blog-post-mortgage-excerpt"),
            "2026-02-11T08:15:00Z",
        ),
        (
            t!("blog-post-neighborhood-title"),
            t!("blog-post-neighborhood-excerpt"),
            "2025-12-05T16:45:00Z",
        ),
    ];

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-blog",
            Reveal { kind: RevealKind::Fade,
                header { class: "hero",
                    h1 { class: "hero__title", {t!("blog-hero-title")} }
                    p { class: "hero__lede", {t!("blog-hero-lede")} }
                }
            }

            div { class: "post-list",
                { posts.iter().enumerate().map(|(i, (title, excerpt, published))| rsx! {
                    Reveal {
                        key: "{title}",
                        kind: RevealKind::SlideUp,
                        delay_ms: (i as u32) * 80,
                        article { class: "post-card",
                            span { class: "post-card__date", {format_post_date(published)} }
                            h2 { class: "post-card__title", "{title}" }
                            p { class: "post-card__excerpt", "{excerpt}" }
                            span { class: "post-card__more", {t!("blog-read-more")} }
                        }
                    }
                })}
            }
        }
    }
}
