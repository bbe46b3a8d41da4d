//! Signup page hosting the registration form.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::signup_form::SignupForm;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <Title text="Sign up | Bookshelf Boulevard"/>
        <section class="signup-page">
            <h1>"Create an account"</h1>
            <SignupForm/>
        </section>
    }
}
