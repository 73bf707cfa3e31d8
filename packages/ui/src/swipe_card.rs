use api::{Candidate, Verdict};
use dioxus::prelude::*;

use crate::icons::{FaHeart, FaXmark};
use crate::{CandidateCard, Icon};

/// Horizontal drag, in CSS pixels, past which releasing the card decides.
pub const SWIPE_THRESHOLD: f64 = 80.0;

/// One pointer dragging the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub pointer_id: i32,
    pub start_x: f64,
    pub current_x: f64,
}

impl DragState {
    pub fn new(pointer_id: i32, x: f64) -> Self {
        Self {
            pointer_id,
            start_x: x,
            current_x: x,
        }
    }

    pub fn delta(&self) -> f64 {
        self.current_x - self.start_x
    }

    /// Right is yes, left is no; anything shorter snaps back.
    pub fn verdict(&self) -> Option<Verdict> {
        let delta = self.delta();
        if delta.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        Some(if delta > 0.0 { Verdict::Yes } else { Verdict::No })
    }
}

fn card_style(delta: f64, dragging: bool) -> String {
    format!(
        "transform: translateX({:.1}px) rotate({:.2}deg); transition: {};",
        delta,
        delta * 0.05,
        if dragging {
            "transform 0s"
        } else {
            "transform 0.25s ease"
        }
    )
}

/// Opacity of the yes/no stamp for the current drag.
fn stamp_opacity(delta: f64) -> f64 {
    (delta / SWIPE_THRESHOLD).clamp(-1.0, 1.0).abs()
}

/// The current candidate, draggable left/right, with explicit buttons.
///
/// `disabled` ignores input while a decision is being sent.
#[component]
pub fn SwipeCard(candidate: Candidate, disabled: bool, on_decide: EventHandler<Verdict>) -> Element {
    let mut drag = use_signal(|| Option::<DragState>::None);

    let delta = drag().map(|d| d.delta()).unwrap_or(0.0);
    let style = card_style(delta, drag().is_some());
    let stamp = if delta > 0.0 { "LIKE" } else { "NOPE" };
    let stamp_style = format!("opacity: {:.2};", stamp_opacity(delta));

    let mut finish = move |pointer_id: i32, commit: bool| {
        let Some(state) = drag() else {
            return;
        };
        if state.pointer_id != pointer_id {
            return;
        }
        drag.set(None);
        if commit {
            if let Some(verdict) = state.verdict() {
                on_decide.call(verdict);
            }
        }
    };

    rsx! {
        div {
            class: "swipe-area",
            div {
                class: if disabled { "swipe-card swipe-card-busy" } else { "swipe-card" },
                style: "{style}",
                onpointerdown: move |evt: PointerEvent| {
                    if disabled || drag().is_some() {
                        return;
                    }
                    evt.prevent_default();
                    drag.set(Some(DragState::new(evt.pointer_id(), evt.client_coordinates().x)));
                },
                onpointermove: move |evt: PointerEvent| {
                    if let Some(mut state) = drag() {
                        if state.pointer_id == evt.pointer_id() {
                            state.current_x = evt.client_coordinates().x;
                            drag.set(Some(state));
                        }
                    }
                },
                onpointerup: move |evt: PointerEvent| finish(evt.pointer_id(), true),
                onpointerleave: move |evt: PointerEvent| finish(evt.pointer_id(), true),
                onpointercancel: move |evt: PointerEvent| finish(evt.pointer_id(), false),
                if delta != 0.0 {
                    span { class: "swipe-stamp", style: "{stamp_style}", "{stamp}" }
                }
                CandidateCard { candidate }
            }
            div {
                class: "swipe-buttons",
                button {
                    class: "swipe-no",
                    disabled,
                    onclick: move |_| on_decide.call(Verdict::No),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                    " No"
                }
                button {
                    class: "swipe-yes",
                    disabled,
                    onclick: move |_| on_decide.call(Verdict::Yes),
                    Icon { icon: FaHeart, width: 14, height: 14 }
                    " Yes"
                }
            }
        }
    }
}
