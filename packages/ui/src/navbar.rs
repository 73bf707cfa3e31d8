use dioxus::prelude::*;

use crate::icons::FaHouse;
use crate::{Icon, LogoutButton, UI_CSS};

/// Top bar of the signed-in shell. Links are passed as children so the
/// router stays in the app crate.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        nav {
            class: "navbar",
            span {
                class: "navbar-brand",
                Icon { width: 16, height: 16, icon: FaHouse }
                "Roomly"
            }
            div {
                class: "navbar-links",
                {children}
            }
            LogoutButton { class: "navbar-logout" }
        }
    }
}
