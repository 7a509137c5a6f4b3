//! Shared storage and config constructors for all platforms.
//!
//! Picks the [`store::KeyValueStore`] that keeps the signed-in user across reloads:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStore`]
//! - **Desktop / Mobile** (native): files via [`store::FileStore`] under
//!   `<data_dir>/ledger/`
//! - **WASM without `web`**: memory only, the session ends with the page

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Create the platform-appropriate key/value store.
pub fn make_storage() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("ledger");
        store::FileStore::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
}

/// Resolve the client configuration for this platform.
///
/// Native builds read `ledger.toml` and `LEDGER_*` variables; the browser has
/// neither, so web builds take the backend address baked in at compile time.
pub fn load_config() -> store::ClientConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::ClientConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default config: {}", e);
            store::ClientConfig::default()
        })
    }
    #[cfg(target_arch = "wasm32")]
    {
        match option_env!("LEDGER_API_BASE_URI") {
            Some(uri) => store::ClientConfig::default().with_base_uri(uri),
            None => store::ClientConfig::default(),
        }
    }
}
