//! Landing page.

use leptos::prelude::*;

use crate::components::signup_button::SignupButton;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Welcome to Bookshelf Boulevard"</h1>
            <p>"Find your next favourite book."</p>
            <SignupButton/>
        </section>
    }
}
