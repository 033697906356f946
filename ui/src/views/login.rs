use dioxus::prelude::*;

use crate::core::session::{self, SessionRecord};
use crate::core::theme::ACTIVE_THEME;
use crate::t;

/// Entry form for the session-gated site.
///
/// There is no backend credential check: submitting writes the session
/// record to client storage and hands control back to the launcher through
/// `on_success`, which replace-navigates into the site. Every protected
/// page re-checks that record on mount.
#[component]
pub fn LoginPage(on_success: EventHandler<()>) -> Element {
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let theme = *ACTIVE_THEME.read();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let first = first_name().trim().to_string();
        let last = last_name().trim().to_string();
        if first.is_empty() && last.is_empty() {
            error.set(Some(t!("login-error-missing-name")));
            return;
        }

        let contact = email().trim().to_string();
        let record = SessionRecord {
            id: uuid::Uuid::new_v4().to_string(),
            first_name: first,
            last_name: last,
            email: (!contact.is_empty()).then_some(contact),
            phone: None,
        };

        if session::store_session(&record) {
            on_success.call(());
        } else {
            error.set(Some(t!("login-error-storage")));
        }
    };

    rsx! {
        section { class: "page page-login page-login--{theme.suffix()}",
            div { class: "login-card",
                h1 { class: "login-card__title", {t!("login-title")} }
                p { class: "login-card__lede", {t!("login-lede")} }

                form { class: "login-card__form", onsubmit: handle_submit,
                    if let Some(message) = error() {
                        div { class: "login-card__error", "{message}" }
                    }

                    label { r#for: "login-first", {t!("login-first-name")} }
                    input {
                        id: "login-first",
                        value: "{first_name()}",
                        oninput: move |evt| first_name.set(evt.value()),
                    }

                    label { r#for: "login-last", {t!("login-last-name")} }
                    input {
                        id: "login-last",
                        value: "{last_name()}",
                        oninput: move |evt| last_name.set(evt.value()),
                    }

                    label { r#for: "login-email", {t!("login-email")} }
                    input {
                        id: "login-email",
                        r#type: "email",
                        value: "{email()}",
                        oninput: move |evt| email.set(evt.value()),
                    }

                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        {t!("login-submit")}
                    }
                }
            }
        }
    }
}
