use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::storage::StorageProvider;
use crate::store::{Store, Subscription};

/// Key under which the auth token is kept in persistent client storage.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// The session token, mirrored to persistent storage on every change.
///
/// Whether storage is used is decided once, by the provider passed to
/// [`TokenStore::new`]. Without one the store starts empty and never touches
/// storage. A token that was explicitly set to `""` and one that was never
/// set look the same.
#[derive(Clone)]
pub struct TokenStore {
    store: Store<String>,
    persisted: bool,
}

impl TokenStore {
    pub fn new(storage: Option<Arc<dyn StorageProvider>>) -> Self {
        let Some(storage) = storage else {
            debug!("no persistent storage, auth token starts empty");
            return Self {
                store: Store::create(String::new()),
                persisted: false,
            };
        };

        let initial = match storage.get_item(TOKEN_STORAGE_KEY) {
            Ok(stored) => stored.unwrap_or_default(),
            Err(e) => {
                warn!("failed to read stored auth token, starting signed out: {e}");
                String::new()
            }
        };

        let store = Store::with_write_through(initial, move |token: &String| {
            storage.set_item(TOKEN_STORAGE_KEY, token)?;
            debug!("persisted auth token ({} bytes)", token.len());
            Ok(())
        });

        Self {
            store,
            persisted: true,
        }
    }

    /// Uses the host's persistent storage if the environment has one.
    pub fn detect() -> Self {
        Self::new(crate::detect_storage())
    }

    pub fn get(&self) -> String {
        self.store.get()
    }

    pub fn set(&self, token: impl Into<String>) -> Result<(), StoreError> {
        self.store.set(token.into())
    }

    pub fn update<F>(&self, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&String) -> String,
    {
        self.store.update(f)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.set(String::new())
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&String) + Send + Sync + 'static,
    {
        self.store.subscribe(listener)
    }

    pub fn is_persisted(&self) -> bool {
        self.persisted
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("persisted", &self.persisted)
            .field("signed_in", &!self.get().is_empty())
            .finish()
    }
}
