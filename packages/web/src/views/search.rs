//! Swipe deck over the candidates the backend suggests.

use api::{Backend, SwipeDeck, SwipeStep, Verdict};
use dioxus::prelude::*;
use ui::{use_services, use_session, SwipeCard};

#[component]
pub fn Search() -> Element {
    let mut deck = use_signal(SwipeDeck::new);
    let services = use_services();
    let session = use_session();

    // One search per visit, after the first render; peek keeps it from re-running
    let backend = services.backend.clone();
    use_effect(move || {
        let token = deck.write().begin_load(session.peek().session.as_ref());
        let Some(token) = token else {
            return;
        };
        let backend = backend.clone();
        spawn(async move {
            let result = backend.search(&token).await;
            deck.write().finish_load(result);
        });
    });

    let backend = services.backend.clone();
    let on_decide = move |verdict: Verdict| {
        let current = session.peek().session.clone();
        let step = deck
            .write()
            .step(verdict, current.as_ref(), api::token::unix_now());
        match step {
            SwipeStep::Submit { token, decision } => {
                let backend = backend.clone();
                spawn(async move {
                    let result = backend.record_swipe(&token, &decision).await;
                    deck.write().settle(result);
                });
            }
            SwipeStep::Blocked(message) => tracing::debug!("Swipe blocked: {}", message),
            SwipeStep::Skipped | SwipeStep::Idle => {}
        }
    };

    let current = deck.read();
    let phase = current.phase();
    let candidate = current.current().cloned();
    let error = current.error().map(str::to_string);
    let busy = current.is_busy();
    let cursor = current.cursor();
    drop(current);

    rsx! {
        div {
            class: "search-page",
            if let Some(message) = phase.message() {
                p { class: "page-status", "{message}" }
            } else if let Some(candidate) = candidate {
                SwipeCard {
                    key: "{cursor}",
                    candidate,
                    disabled: busy,
                    on_decide,
                }
            } else {
                p { class: "page-status", "Loading..." }
            }
            if let Some(error) = error {
                p { class: "form-error", "{error}" }
            }
        }
    }
}
