use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::auth::provide_auth;
use crate::components::nav::Nav;
use crate::components::toast::ToastProvider;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth();

    view! {
        <Stylesheet id="leptos" href="/pkg/hub-console.css" />
        <Title text="Project Hub" />
        <ToastProvider>
            <Router>
                <Routes fallback=|| view! { <p>"Page not found."</p> }.into_any()>
                    <Route path=StaticSegment("") view=HomeView />
                    <Route path=StaticSegment("login") view=LoginView />
                </Routes>
            </Router>
        </ToastProvider>
    }
}

#[component]
fn HomeView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <HomePage />
            </main>
        </div>
    }
}

#[component]
fn LoginView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <LoginPage />
            </main>
        </div>
    }
}
