use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::toast::use_toasts;

#[component]
pub fn Nav() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let session = auth.clone();

    let signOut = move |_: leptos::ev::MouseEvent| match auth.sign_out() {
        Ok(()) => toasts.success("Signed out"),
        Err(e) => toasts.error(format!("Could not clear the stored token: {e}")),
    };

    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"H"</div>
                <span class="brand-text">"Project Hub"</span>
            </div>
            <ul class="nav-links">
                <li class="nav-item">
                    <a href="/">
                        <span class="nav-icon">"\u{25A3}"</span>
                        <span>"Session"</span>
                    </a>
                </li>
            </ul>
            <div class="nav-session">
                {move || {
                    if !session.is_signed_in() {
                        view! {
                            <a href="/login" class="btn btn-primary">
                                "Sign In"
                            </a>
                        }
                            .into_any()
                    } else {
                        let signOut = signOut.clone();
                        view! {
                            <button class="btn" on:click=signOut>
                                "Sign Out"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </div>
        </nav>
    }
}
