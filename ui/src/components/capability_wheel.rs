use dioxus::prelude::*;

use crate::core::carousel::{Carousel, WheelTimer};
use crate::core::theme::ACTIVE_THEME;

/// One spoke of the capability wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelItem {
    pub title: String,
    pub blurb: String,
}

/// Auto-advancing selector for the services page.
///
/// The active item advances once per interval while the pointer is away.
/// Hovering pauses the timer without touching the index; leaving restarts a
/// full fresh interval. The epoch check in [`WheelTimer`] plus the task
/// cancellation below guarantee a stale ticker can neither advance the
/// wheel nor overlap a new one.
#[component]
pub fn CapabilityWheel(items: Vec<WheelItem>, #[props(default = 2200)] interval_ms: u32) -> Element {
    let item_count = items.len();
    let mut wheel = use_signal(|| Carousel::new(item_count));
    let mut timer = use_signal(WheelTimer::new);
    let theme = *ACTIVE_THEME.read();

    #[cfg(target_arch = "wasm32")]
    {
        let mut ticker = use_signal(|| None::<Task>);
        use_effect(move || {
            // One ticker per epoch: cancel whatever was running, then start
            // a fresh loop unless the pointer is on the control.
            if let Some(task) = ticker.write().take() {
                task.cancel();
            }
            let pacing = timer.read();
            if pacing.is_hovered() || item_count < 2 {
                return;
            }
            let epoch = pacing.epoch();
            let task = spawn(async move {
                loop {
                    gloo_timers::future::TimeoutFuture::new(interval_ms).await;
                    if !timer.peek().should_advance(epoch) {
                        break;
                    }
                    wheel.write().next();
                }
            });
            ticker.set(Some(task));
        });
    }

    if items.is_empty() {
        return rsx! {
            div { class: "wheel wheel--empty" }
        };
    }

    let active = wheel().index() % item_count;
    let current = &items[active];

    rsx! {
        div {
            class: "wheel wheel--{theme.suffix()}",
            onmouseenter: move |_| timer.write().pause(),
            onmouseleave: move |_| timer.write().resume(),

            ul { class: "wheel__spokes",
                { items.iter().enumerate().map(|(i, item)| {
                    let spoke_class = if i == active {
                        "wheel__spoke wheel__spoke--active"
                    } else {
                        "wheel__spoke"
                    };
                    rsx! {
                        li { key: "{item.title}",
                            button {
                                class: "{spoke_class}",
                                onclick: move |_| wheel.write().go_to(i),
                                "{item.title}"
                            }
                        }
                    }
                })}
            }

            div { class: "wheel__detail",
                h3 { class: "wheel__title", "{current.title}" }
                p { class: "wheel__blurb", "{current.blurb}" }
            }
        }
    }
}
