//! Local persistence helpers.
//!
//! On the web this is a thin wrapper over `window.localStorage`. On native
//! targets (tests, tooling) the same surface is backed by an in-process map
//! so the crate compiles and its tests run without a browser.

/// Key/value access to the client-local store.
///
/// Every operation is infallible from the caller's point of view: a missing
/// browser storage object (private mode, detached window) degrades to
/// "nothing stored" rather than an error.
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Read the value stored under `key`, if any.
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// Store `value` under `key`. Returns whether the write succeeded
    /// (quota exhaustion and disabled storage report `false`).
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// Remove `key`. Removing an absent key is a no-op, not an error.
    pub fn remove(key: &str) {
        if let Some(s) = Self::storage() {
            let _ = s.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        pub(super) static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl LocalStore {
    /// Read the value stored under `key`, if any.
    pub fn get(key: &str) -> Option<String> {
        native::STORE.with(|s| s.borrow().get(key).cloned())
    }

    /// Store `value` under `key`.
    pub fn set(key: &str, value: &str) -> bool {
        native::STORE.with(|s| {
            s.borrow_mut().insert(key.to_string(), value.to_string());
        });
        true
    }

    /// Remove `key`. Removing an absent key is a no-op, not an error.
    pub fn remove(key: &str) {
        native::STORE.with(|s| {
            s.borrow_mut().remove(key);
        });
    }
}
