use crate::core::theme::ACTIVE_THEME;
use crate::t;
use dioxus::prelude::*;

/// Shared site footer: contact block, office hours, and the standing
/// disclaimer. Styling rides on the navbar stylesheet, which the navbar
/// already links on every guarded page.
#[component]
pub fn AppFooter() -> Element {
    let theme = *ACTIVE_THEME.read();

    rsx! {
        footer { class: "footer footer--{theme.suffix()}",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    span { class: "footer__mark", "Hearthside" }
                    p { class: "footer__tagline", {t!("tagline")} }
                }

                div { class: "footer__block",
                    h3 { {t!("footer-contact-title")} }
                    p { {t!("footer-contact-address")} }
                    p { {t!("footer-contact-phone")} }
                    p { {t!("footer-contact-email")} }
                }

                div { class: "footer__block",
                    h3 { {t!("footer-hours-title")} }
                    p { {t!("footer-hours-weekdays")} }
                    p { {t!("footer-hours-weekend")} }
                }
            }

            div { class: "footer__legal",
                p { {t!("footer-copyright", year = current_year())} }
            }
        }
    }
}

fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
