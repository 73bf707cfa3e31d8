//! Session context and hooks for the UI.

use api::Session;
use dioxus::prelude::*;

use crate::services::make_store;

/// Session state for the application.
///
/// `session` is what durable storage holds; the gate treats its presence as
/// "authenticated". Expiry is checked where a live token matters, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that restores the stored session on mount.
/// Wrap your app with this component to enable the session gate.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(SessionState::default);

    let _ = use_resource(move || async move {
        let session = Session::load(&make_store()).await;
        if session.is_some() {
            tracing::info!("Restored stored session");
        }
        state.set(SessionState {
            session,
            loading: false,
        });
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Button to forget the stored token and email.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut state = use_session();

    let onclick = move |_| async move {
        api::session::logout(&make_store()).await;
        tracing::info!("Logged out");
        state.set(SessionState {
            session: None,
            loading: false,
        });
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
