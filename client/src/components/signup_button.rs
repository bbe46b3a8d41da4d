//! Call-to-action button linking to the signup page.

use leptos::prelude::*;
use leptos_router::components::A;

/// Route the button navigates to.
pub const SIGNUP_PATH: &str = "/signup";

#[component]
pub fn SignupButton() -> impl IntoView {
    view! {
        <A href=SIGNUP_PATH attr:class="signup-button">
            "Sign Up"
        </A>
    }
}
