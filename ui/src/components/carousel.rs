use dioxus::prelude::*;

use crate::core::carousel::Carousel;
use crate::core::theme::ACTIVE_THEME;
use crate::t;

/// One testimonial slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
}

/// Manual slider over a fixed list of testimonials. No autoplay: the index
/// moves only on the arrow controls or the dot indicators, wrapping in both
/// directions.
#[component]
pub fn TestimonialCarousel(slides: Vec<Testimonial>) -> Element {
    let slide_count = slides.len();
    let mut state = use_signal(|| Carousel::new(slide_count));
    let theme = *ACTIVE_THEME.read();

    if slides.is_empty() {
        return rsx! {
            div { class: "carousel carousel--empty" }
        };
    }

    let active = state().index() % slide_count;
    let slide = &slides[active];

    rsx! {
        div { class: "carousel carousel--{theme.suffix()}",
            button {
                class: "carousel__arrow carousel__arrow--prev",
                aria_label: t!("carousel-previous"),
                onclick: move |_| state.write().prev(),
                "‹"
            }

            figure { class: "carousel__slide",
                blockquote { class: "carousel__quote", "{slide.quote}" }
                figcaption { class: "carousel__attribution",
                    span { class: "carousel__name", "{slide.name}" }
                    span { class: "carousel__role", "{slide.role}" }
                }
            }

            button {
                class: "carousel__arrow carousel__arrow--next",
                aria_label: t!("carousel-next"),
                onclick: move |_| state.write().next(),
                "›"
            }

            div { class: "carousel__dots",
                { (0..slide_count).map(|i| {
                    let dot_class = if i == active {
                        "carousel__dot carousel__dot--active"
                    } else {
                        "carousel__dot"
                    };
                    let slide_num: usize = i + 1;
                    rsx! {
                        button {
                            key: "{i}",
                            class: "{dot_class}",
                            aria_label: t!("carousel-go-to", slide = slide_num),
                            onclick: move |_| state.write().go_to(i),
                        }
                    }
                })}
            }
        }
    }
}
