//! Light/dark theme mirror.
//!
//! The source of truth is the `dark` class on the document root. The navbar
//! toggle is the single writer; everything else reads. One process-wide
//! MutationObserver (installed by the launcher shell via
//! [`use_theme_watcher`]) mirrors the root class into [`ACTIVE_THEME`], and
//! consuming components subscribe to that signal instead of each attaching
//! a watcher of their own. The mirror may lag the root attribute by one
//! observation tick; class selection must treat it as a cached view.

use dioxus::prelude::*;

/// Current presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Derive the theme from a root `class` attribute value.
    pub fn from_class_attr(attr: &str) -> Self {
        if attr.split_whitespace().any(|token| token == "dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Modifier suffix for components that branch on theme,
    /// e.g. `navbar--light` / `navbar--dark`.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Shared mirror of the root theme marker. Read-only outside this module.
pub static ACTIVE_THEME: GlobalSignal<Theme> = GlobalSignal::new(initial_theme);

fn initial_theme() -> Theme {
    #[cfg(target_arch = "wasm32")]
    {
        read_root()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Theme::Light
    }
}

#[cfg(target_arch = "wasm32")]
fn read_root() -> Theme {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| Theme::from_class_attr(&el.class_name()))
        .unwrap_or_default()
}

/// Flip the root marker. The navbar toggle is the only caller; the observer
/// mirrors the change back into [`ACTIVE_THEME`] on its next tick.
pub fn toggle() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let next = !read_root().is_dark();
            let _ = el.class_list().toggle_with_force("dark", next);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let next = ACTIVE_THEME.peek().toggled();
        *ACTIVE_THEME.write() = next;
    }
}

/// Install the shared theme mirror for the lifetime of the calling
/// component (the launcher root). Reads the root marker synchronously on
/// mount, then follows every class change. The watcher handle lives in hook
/// state, so unmount (including early-redirect unmounts) detaches it.
pub fn use_theme_watcher() {
    #[cfg(target_arch = "wasm32")]
    use_hook(|| {
        *ACTIVE_THEME.write() = read_root();

        // The MutationObserver callback runs outside the Dioxus runtime, so
        // it forwards through a channel to a scope-owned task that is
        // allowed to write the signal.
        let (tx, mut rx) = futures_channel::mpsc::unbounded::<Theme>();
        spawn(async move {
            use futures_util::StreamExt;
            while let Some(next) = rx.next().await {
                if *ACTIVE_THEME.peek() != next {
                    *ACTIVE_THEME.write() = next;
                }
            }
        });

        // Held in hook state until the scope dies, which disconnects it.
        std::rc::Rc::new(watcher::ThemeWatcher::attach(move |theme| {
            let _ = tx.unbounded_send(theme);
        }))
    });
}

#[cfg(target_arch = "wasm32")]
mod watcher {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use super::Theme;

    /// Owns the root-attribute MutationObserver. Dropping the handle
    /// disconnects it; disconnecting an already-detached observer is a
    /// no-op per the DOM contract, so double-unmount paths are safe.
    pub struct ThemeWatcher {
        observer: web_sys::MutationObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>,
    }

    impl ThemeWatcher {
        /// Watch the `class` attribute on `<html>`.
        pub fn attach(mut on_change: impl FnMut(Theme) + 'static) -> Option<Self> {
            let root = web_sys::window()?.document()?.document_element()?;

            let callback = Closure::new(
                move |_records: js_sys::Array, _observer: web_sys::MutationObserver| {
                    on_change(super::read_root());
                },
            );

            let observer =
                web_sys::MutationObserver::new(callback.as_ref().unchecked_ref()).ok()?;
            let init = web_sys::MutationObserverInit::new();
            init.set_attributes(true);
            let filter = js_sys::Array::of1(&JsValue::from_str("class"));
            init.set_attribute_filter(filter.as_ref());
            observer.observe_with_options(&root, &init).ok()?;

            Some(Self {
                observer,
                _callback: callback,
            })
        }

        pub fn detach(&self) {
            self.observer.disconnect();
        }
    }

    impl Drop for ThemeWatcher {
        fn drop(&mut self) {
            self.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_token_selects_dark() {
        assert_eq!(Theme::from_class_attr("dark"), Theme::Dark);
        assert_eq!(Theme::from_class_attr("scrolled dark loaded"), Theme::Dark);
    }

    #[test]
    fn other_tokens_do_not_match() {
        assert_eq!(Theme::from_class_attr(""), Theme::Light);
        assert_eq!(Theme::from_class_attr("darkness"), Theme::Light);
        assert_eq!(Theme::from_class_attr("theme-dark"), Theme::Light);
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn suffix_matches_variant() {
        assert_eq!(Theme::Light.suffix(), "light");
        assert_eq!(Theme::Dark.suffix(), "dark");
    }
}
