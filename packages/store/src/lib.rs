pub mod cache;
pub mod config;
pub mod models;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserStore;

pub use cache::{CacheError, LocalStore, SessionCache, USER_DETAILS_KEY};
pub use config::StorefrontConfig;
pub use models::{Cart, CartItem, UserDetails};

/// The persistent store for the current target: `localStorage` in the browser,
/// memory everywhere else.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = BrowserStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = MemoryStore;
