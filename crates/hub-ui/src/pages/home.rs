use leptos::prelude::*;

use crate::auth::use_auth;

/// Last four characters of `token`, the rest replaced by bullets.
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let visible = chars.len().min(4);
    let hidden = chars.len() - visible;
    let tail: String = chars[hidden..].iter().collect();
    format!("{}{tail}", "\u{2022}".repeat(hidden))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let token = use_auth().token();

    view! {
        <div class="dashboard-header">
            <h1>"Session"</h1>
            <p class="subtitle">"Credential stored in this browser"</p>
        </div>
        <div class="card">
            {move || {
                let current = token.get();
                if current.is_empty() {
                    view! {
                        <p>
                            "You are signed out. "
                            <a href="/login">"Sign in"</a>
                            " to continue."
                        </p>
                    }
                        .into_any()
                } else {
                    view! {
                        <p>
                            "Signed in with token "
                            <code>{mask_token(&current)}</code>
                        </p>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::mask_token;

    #[test]
    fn masks_all_but_last_four_chars() {
        assert_eq!(mask_token("abcdef123"), "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}f123");
    }

    #[test]
    fn short_tokens_stay_visible() {
        assert_eq!(mask_token("abc"), "abc");
        assert_eq!(mask_token(""), "");
    }

    #[test]
    fn masking_respects_char_boundaries() {
        assert_eq!(mask_token("clé-été"), "\u{2022}\u{2022}\u{2022}-été");
    }
}
