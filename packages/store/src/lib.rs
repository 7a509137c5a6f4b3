//! Client-side persistence for the ledger app.
//!
//! Every platform gets a [`KeyValueStore`]: `localStorage` on the web,
//! plain files on desktop/mobile, and an in-memory map for tests.

pub mod config;
pub mod error;
pub mod kv;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::ClientConfig;
pub use error::StorageError;
pub use kv::{JsonStoreExt, KeyValueStore};
