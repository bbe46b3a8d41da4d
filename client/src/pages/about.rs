//! Static about page linked from the navigation bar.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about-page">
            <h1>"About"</h1>
            <p>"Bookshelf Boulevard is an online book shop."</p>
        </section>
    }
}
