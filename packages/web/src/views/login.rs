//! Login page: email and password against the matching backend.

use dioxus::prelude::*;
use ui::{make_store, use_services, use_session, SessionState};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut session = use_session();
    let services = use_services();
    let nav = use_navigator();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = services.backend.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            let result =
                api::session::login(&backend, &make_store(), &email(), &password()).await;
            loading.set(false);
            match result {
                Ok(signed_in) => {
                    session.set(SessionState {
                        session: Some(signed_in),
                        loading: false,
                    });
                    nav.push(Route::Profile {});
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h2 { "Login" }

                form {
                    onsubmit: handle_login,
                    class: "auth-form",

                    label {
                        class: "field",
                        span { class: "field-label", "Email Address" }
                        input {
                            r#type: "email",
                            id: "email",
                            required: true,
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    label {
                        class: "field",
                        span { class: "field-label", "Password" }
                        input {
                            r#type: "password",
                            id: "password",
                            required: true,
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    button {
                        class: "primary-button",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Do not have an account yet? "
                    Link { to: Route::Register {}, "Click here to register" }
                }

                if let Some(err) = error() {
                    p { class: "form-error", "{err}" }
                }
            }
        }
    }
}
