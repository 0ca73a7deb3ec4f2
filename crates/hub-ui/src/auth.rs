use hub_store::{StoreError, TokenStore};
use leptos::prelude::*;

/// The page's token store, shared with components through context.
#[derive(Clone)]
pub struct AuthContext {
    store: TokenStore,
    token: ReadSignal<String>,
}

impl AuthContext {
    /// Reactive view of the current token.
    pub fn token(&self) -> ReadSignal<String> {
        self.token
    }

    pub fn is_signed_in(&self) -> bool {
        !self.token.get().is_empty()
    }

    pub fn sign_in(&self, token: String) -> Result<(), StoreError> {
        self.store.set(token)
    }

    pub fn sign_out(&self) -> Result<(), StoreError> {
        self.store.clear()
    }
}

/// Creates the token store for this page and provides it as [`AuthContext`].
///
/// On the server there is no local storage, so the store starts empty and
/// never persists. In the browser the signal starts empty too and picks up the
/// stored token once mounted, keeping hydrated markup identical to the
/// server-rendered one.
pub fn provide_auth() -> AuthContext {
    let store = TokenStore::detect();
    let (token, setToken) = signal(String::new());

    Effect::new({
        let store = store.clone();
        move |_| {
            let subscription = store.subscribe(move |value: &String| setToken.set(value.clone()));
            on_cleanup(move || subscription.unsubscribe());
        }
    });

    let ctx = AuthContext { store, token };
    provide_context(ctx.clone());
    ctx
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
