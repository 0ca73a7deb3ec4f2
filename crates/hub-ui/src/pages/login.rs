use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::use_auth;
use crate::components::toast::use_toasts;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let (draft, setDraft) = signal(String::new());

    let onSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let token = draft.get_untracked().trim().to_string();
        if token.is_empty() {
            toasts.warning("Enter your access token to sign in");
            return;
        }

        match auth.sign_in(token) {
            Ok(()) => {
                setDraft.set(String::new());
                toasts.success("Signed in");
                navigate("/", Default::default());
            }
            Err(e) => toasts.error(format!("Could not save the token: {e}")),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"H"</div>
                    <h1>"Project Hub"</h1>
                    <p>"Enter your access token to continue"</p>
                </div>

                <form on:submit=onSubmit>
                    <div class="form-group">
                        <label for="token">"Access Token"</label>
                        <input
                            type="password"
                            id="token"
                            name="token"
                            placeholder="Enter your token"
                            autocomplete="off"
                            prop:value=draft
                            on:input=move |ev| setDraft.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">
                        "Sign In"
                    </button>
                </form>
            </div>
        </div>
    }
}
