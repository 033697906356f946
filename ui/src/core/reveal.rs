//! Reveal-on-scroll state and observer plumbing.
//!
//! The crossing logic is a pure state machine ([`RevealState`]) fed with
//! observed visible fractions, so it tests natively. The wasm-only
//! [`RevealObserver`] wraps an IntersectionObserver around it and drives a
//! callback whenever visibility changes. The browser delivers an initial
//! record against current layout, so an element already on screen at mount
//! fires without any scrolling.

/// Named entrance effects. Purely a styling hook: each maps to a CSS class,
/// none changes observer behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Fade,
    SlideLeft,
    SlideRight,
    SlideUp,
    Scale,
    Zoom,
    Bounce,
    Rotate,
}

impl RevealKind {
    /// CSS modifier class applied to the wrapper element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Fade => "reveal--fade",
            Self::SlideLeft => "reveal--slide-left",
            Self::SlideRight => "reveal--slide-right",
            Self::SlideUp => "reveal--slide-up",
            Self::Scale => "reveal--scale",
            Self::Zoom => "reveal--zoom",
            Self::Bounce => "reveal--bounce",
            Self::Rotate => "reveal--rotate",
        }
    }
}

/// Whether the reveal fires once and stays, or tracks the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// Fire on the first qualifying entry, then stop watching. The watcher
    /// is detached right after the crossing as a one-shot optimization.
    #[default]
    Once,
    /// Toggle with every crossing, in both directions, for the element's
    /// whole lifetime.
    Repeat,
}

/// Fraction of the element's area that must be on screen to count as
/// "entered". Small but positive so a one-pixel sliver does not fire.
pub const DEFAULT_THRESHOLD: f64 = 0.15;

/// Validated reveal parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub kind: RevealKind,
    /// Entrance stagger, rendered as a transition delay.
    pub delay_ms: u32,
    pub threshold: f64,
    pub mode: TriggerMode,
}

impl RevealConfig {
    pub fn new(kind: RevealKind) -> Self {
        Self {
            kind,
            delay_ms: 0,
            threshold: DEFAULT_THRESHOLD,
            mode: TriggerMode::Once,
        }
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the visibility threshold. Non-finite, zero, and negative values
    /// fall back to the default; values above 1 clamp to 1.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_finite() && threshold > 0.0 {
            threshold.min(1.0)
        } else {
            DEFAULT_THRESHOLD
        };
        self
    }

    pub fn with_mode(mut self, mode: TriggerMode) -> Self {
        self.mode = mode;
        self
    }
}

/// What the caller should do with the watcher after applying a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchDirective {
    Keep,
    Detach,
}

/// Pure crossing state for one observed element.
#[derive(Debug, Clone, Copy)]
pub struct RevealState {
    threshold: f64,
    mode: TriggerMode,
    visible: bool,
}

impl RevealState {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            mode: config.mode,
            visible: false,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Apply one observed visible fraction (0.0 for an element with no
    /// rendered area). Returns whether the watcher should stay attached.
    pub fn observe(&mut self, fraction: f64) -> WatchDirective {
        let entered = fraction >= self.threshold;
        match self.mode {
            TriggerMode::Once => {
                if entered {
                    self.visible = true;
                }
                if self.visible {
                    WatchDirective::Detach
                } else {
                    WatchDirective::Keep
                }
            }
            TriggerMode::Repeat => {
                self.visible = entered;
                WatchDirective::Keep
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use observer::RevealObserver;

#[cfg(target_arch = "wasm32")]
mod observer {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use super::{RevealConfig, RevealState, WatchDirective};

    /// IntersectionObserver wrapper for one element. Dropping the handle
    /// disconnects unconditionally; disconnecting twice is a no-op.
    pub struct RevealObserver {
        observer: web_sys::IntersectionObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
    }

    impl RevealObserver {
        /// Start watching `element`, invoking `on_change` with the new
        /// visibility whenever it flips. In `Once` mode the element is
        /// unobserved right after the first qualifying entry.
        pub fn watch(
            element: &web_sys::Element,
            config: RevealConfig,
            mut on_change: impl FnMut(bool) + 'static,
        ) -> Option<Self> {
            let mut state = RevealState::new(&config);

            let callback = Closure::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        // A zero-area target reports no intersection; feed
                        // the machine 0 so it never qualifies.
                        let fraction = if entry.is_intersecting() {
                            entry.intersection_ratio()
                        } else {
                            0.0
                        };

                        let was = state.visible();
                        let directive = state.observe(fraction);
                        if state.visible() != was {
                            on_change(state.visible());
                        }
                        if directive == WatchDirective::Detach {
                            observer.unobserve(&entry.target());
                            observer.disconnect();
                        }
                    }
                },
            );

            let init = web_sys::IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(config.threshold));
            let observer = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &init,
            )
            .ok()?;
            observer.observe(element);

            Some(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for RevealObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn once(threshold: f64) -> RevealState {
        RevealState::new(&RevealConfig::new(RevealKind::Fade).with_threshold(threshold))
    }

    fn repeat(threshold: f64) -> RevealState {
        RevealState::new(
            &RevealConfig::new(RevealKind::Fade)
                .with_threshold(threshold)
                .with_mode(TriggerMode::Repeat),
        )
    }

    #[test]
    fn once_latches_on_first_qualifying_entry() {
        let mut state = once(0.15);
        assert_eq!(state.observe(0.05), WatchDirective::Keep);
        assert!(!state.visible());

        assert_eq!(state.observe(0.2), WatchDirective::Detach);
        assert!(state.visible());

        // Leaving the viewport afterwards never clears the flag.
        state.observe(0.0);
        assert!(state.visible());
    }

    #[test]
    fn once_fires_when_already_on_screen_at_mount() {
        let mut state = once(0.15);
        // Initial observation against current layout, no scroll needed.
        assert_eq!(state.observe(1.0), WatchDirective::Detach);
        assert!(state.visible());
    }

    #[test]
    fn repeat_tracks_both_directions() {
        let mut state = repeat(0.5);
        assert_eq!(state.observe(0.6), WatchDirective::Keep);
        assert!(state.visible());

        assert_eq!(state.observe(0.4), WatchDirective::Keep);
        assert!(!state.visible());

        state.observe(0.9);
        assert!(state.visible());
        state.observe(0.1);
        assert!(!state.visible());
    }

    #[test]
    fn zero_area_never_qualifies() {
        let mut state = once(0.15);
        for _ in 0..3 {
            assert_eq!(state.observe(0.0), WatchDirective::Keep);
        }
        assert!(!state.visible());
    }

    #[test]
    fn threshold_validation_rejects_degenerate_values() {
        let config = RevealConfig::new(RevealKind::Zoom).with_threshold(0.0);
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);

        let config = RevealConfig::new(RevealKind::Zoom).with_threshold(f64::NAN);
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);

        let config = RevealConfig::new(RevealKind::Zoom).with_threshold(7.0);
        assert_eq!(config.threshold, 1.0);
    }

    #[test]
    fn every_kind_has_a_distinct_class() {
        use std::collections::HashSet;
        let kinds = [
            RevealKind::Fade,
            RevealKind::SlideLeft,
            RevealKind::SlideRight,
            RevealKind::SlideUp,
            RevealKind::Scale,
            RevealKind::Zoom,
            RevealKind::Bounce,
            RevealKind::Rotate,
        ];
        let classes: HashSet<_> = kinds.iter().map(|k| k.css_class()).collect();
        assert_eq!(classes.len(), kinds.len());
    }
}
