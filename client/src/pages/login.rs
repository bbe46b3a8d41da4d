//! Login page; the landing route after a successful signup.
//!
//! Sign-in is not wired to any backend, so the page only points new users
//! back to the signup form.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::signup_button::SIGNUP_PATH;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <section class="login-page">
            <div class="login-card">
                <h1>"Log in"</h1>
                <p class="login-card__subtitle">"Sign-in is not available yet."</p>
                <p class="login-message">
                    "No account yet? "
                    <A href=SIGNUP_PATH>"Create one"</A>
                </p>
            </div>
        </section>
    }
}
