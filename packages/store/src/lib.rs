pub mod config;
pub mod keys;
pub mod session_store;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::{ApiConfig, ClientConfig, DirectoryConfig};
pub use keys::{EMAIL_KEY, TOKEN_KEY};
pub use session_store::SessionStore;
