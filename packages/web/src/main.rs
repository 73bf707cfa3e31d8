use api::session::gate;
use api::GateDecision;
use dioxus::prelude::*;

use store::ClientConfig;
use ui::{use_session, Navbar, ServicesProvider, SessionProvider};
use views::{Chats, Home, Login, Matches, Profile, Register, Search};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Gate)]
        #[route("/")]
        Home {},
        #[route("/profile")]
        Profile {},
        #[route("/search")]
        Search {},
        #[route("/matches")]
        Matches {},
        #[route("/chats")]
        Chats {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../../../roomly.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| ClientConfig::from_toml_or_default(CONFIG_TOML));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ServicesProvider {
            config,
            SessionProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Picks the shell for the current path: the navbar and page when signed in,
/// the bare login/registration pages otherwise. Anything else redirects.
#[component]
fn Gate() -> Element {
    let session = use_session();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let state = session();
    if state.loading {
        return rsx! {
            p { class: "page-status", "Loading..." }
        };
    }

    let authenticated = state.is_authenticated();
    match gate(authenticated, &route.to_string()) {
        GateDecision::Redirect(to) => {
            tracing::debug!("Redirecting {} to {}", route, to);
            nav.replace(to);
            rsx! {}
        }
        GateDecision::Render if authenticated => rsx! {
            Navbar {
                Link { to: Route::Profile {}, "Profile" }
                Link { to: Route::Search {}, "Search" }
                Link { to: Route::Matches {}, "Matches" }
                Link { to: Route::Chats {}, "Chats" }
            }
            main {
                class: "page",
                Outlet::<Route> {}
            }
        },
        GateDecision::Render => rsx! {
            Outlet::<Route> {}
        },
    }
}

/// Never rendered: the gate redirects unknown paths.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    rsx! {}
}
