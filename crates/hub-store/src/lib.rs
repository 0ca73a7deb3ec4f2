#![allow(non_snake_case)]

pub mod auth;
#[cfg(feature = "browser")]
pub mod browser;
pub mod error;
pub mod storage;
pub mod store;

use std::sync::Arc;

pub use auth::{TokenStore, TOKEN_STORAGE_KEY};
pub use error::{StorageError, StoreError};
pub use storage::{FileStorage, MemoryStorage, StorageProvider};
pub use store::{Store, Subscription};

/// Returns the host's persistent storage when the current execution
/// environment has one, `None` otherwise (server rendering, native builds).
///
/// Never panics: an inaccessible `localStorage` is reported as `None`.
pub fn detect_storage() -> Option<Arc<dyn StorageProvider>> {
    #[cfg(all(feature = "browser", target_arch = "wasm32"))]
    {
        browser::BrowserStorage::detect().map(|s| Arc::new(s) as Arc<dyn StorageProvider>)
    }

    #[cfg(not(all(feature = "browser", target_arch = "wasm32")))]
    {
        None
    }
}
