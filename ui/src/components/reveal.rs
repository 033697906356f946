use dioxus::prelude::*;

use crate::core::reveal::{RevealConfig, RevealKind, TriggerMode, DEFAULT_THRESHOLD};

/// Wraps a content block and reveals it when it scrolls into view.
///
/// The wrapper div starts with `reveal reveal--<kind>` and gains
/// `is-visible` once the element's visible fraction reaches the threshold;
/// the stagger renders as a transition delay. The observer handle lives in
/// hook state, so unmount always detaches it.
///
/// Off-browser renders (tests, tooling) have no viewport to observe, so the
/// content simply shows.
#[component]
pub fn Reveal(
    #[props(default = RevealKind::Fade)] kind: RevealKind,
    #[props(default = 0)] delay_ms: u32,
    #[props(default = DEFAULT_THRESHOLD)] threshold: f64,
    #[props(default = TriggerMode::Once)] mode: TriggerMode,
    /// Extra classes for the wrapper.
    #[props(default)]
    class: String,
    children: Element,
) -> Element {
    let config = RevealConfig::new(kind)
        .with_delay(delay_ms)
        .with_threshold(threshold)
        .with_mode(mode);

    let mut visible = use_signal(|| false);

    #[cfg(target_arch = "wasm32")]
    let mut observer = use_signal(|| None::<crate::core::reveal::RevealObserver>);

    let on_mounted = move |event: Event<MountedData>| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(element) = event.data().downcast::<web_sys::Element>() {
                observer.set(crate::core::reveal::RevealObserver::watch(
                    element,
                    config,
                    move |now_visible| visible.set(now_visible),
                ));
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = &event;
            visible.set(true);
        }
    };

    let state_class = if visible() { "is-visible" } else { "" };
    let delay_style = if config.delay_ms > 0 {
        format!("transition-delay: {}ms;", config.delay_ms)
    } else {
        String::new()
    };

    rsx! {
        div {
            class: "reveal {config.kind.css_class()} {state_class} {class}",
            style: "{delay_style}",
            onmounted: on_mounted,
            {children}
        }
    }
}
