//! Text link used in the navigation bar and its mobile menu.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavLink(to: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <A href=to attr:class="nav-link">
            {text}
        </A>
    }
}
