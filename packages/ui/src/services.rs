//! Shared client constructors for all platforms.
//!
//! [`Services`] holds the two HTTP clients built from the client config and is
//! provided once, at the root of the app, by [`ServicesProvider`]. Storage and
//! image previews are picked per platform:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStore`],
//!   previews as object URLs
//! - **Elsewhere**: in-memory [`store::MemoryStore`], previews as `data:` URLs

use api::registration::RegistrationForm;
use api::{DirectoryClient, RoomlyClient};
use dioxus::prelude::*;
use store::ClientConfig;

/// Network clients shared by every page.
#[derive(Debug, Clone)]
pub struct Services {
    pub backend: RoomlyClient,
    pub directory: DirectoryClient,
}

impl Services {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            backend: RoomlyClient::from_config(config),
            directory: DirectoryClient::from_config(config),
        }
    }
}

/// Get the shared clients.
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Builds [`Services`] from `config` and provides it to `children`.
#[component]
pub fn ServicesProvider(config: ClientConfig, children: Element) -> Element {
    use_context_provider(|| {
        tracing::info!("Backend at {}", config.api.base_url);
        Services::from_config(&config)
    });

    rsx! {
        {children}
    }
}

/// Session storage for this platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn make_store() -> store::LocalStore {
    store::LocalStore::new()
}

/// Session storage for this platform.
///
/// Nothing survives a restart; a native shell has no persisted login.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn make_store() -> store::MemoryStore {
    use std::sync::OnceLock;
    static STORE: OnceLock<store::MemoryStore> = OnceLock::new();
    STORE.get_or_init(store::MemoryStore::new).clone()
}

#[cfg(target_arch = "wasm32")]
pub type Previews = crate::image_picker::ObjectUrlPreviews;
#[cfg(not(target_arch = "wasm32"))]
pub type Previews = api::registration::DataUrlPreviews;

/// An empty registration form with this platform's preview factory.
pub fn make_registration_form() -> RegistrationForm<Previews> {
    RegistrationForm::new(Previews::default())
}
