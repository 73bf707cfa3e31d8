//! Pages linked from the navbar that have no content yet.

use dioxus::prelude::*;

#[component]
pub fn Matches() -> Element {
    rsx! {
        div {
            class: "placeholder-page",
            h1 { "Matches" }
            p { class: "page-status", "Nothing here yet." }
        }
    }
}

#[component]
pub fn Chats() -> Element {
    rsx! {
        div {
            class: "placeholder-page",
            h1 { "Chats" }
            p { class: "page-status", "Nothing here yet." }
        }
    }
}
