//! Responsive top navigation bar.
//!
//! DESIGN
//! ======
//! Above the medium breakpoint the links render inline. Below it only the
//! sign-up button and a hamburger remain; the hamburger toggles a side modal
//! holding the links. The open flag lives in this component instance only.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::nav_link::NavLink;
use crate::components::signup_button::SignupButton;
use crate::state::nav_menu::{ABOVE_MEDIUM_QUERY, NavLayout, NavMenuState};
use crate::util::viewport::use_media_query;

pub const BRAND: &str = "Bookshelf Boulevard";

#[component]
pub fn Navbar() -> impl IntoView {
    let is_above_medium = use_media_query(ABOVE_MEDIUM_QUERY);
    let menu = RwSignal::new(NavMenuState::default());

    let layout = Memo::new(move |_| menu.get().layout(is_above_medium.get()));
    let on_toggle = move |_| menu.update(NavMenuState::toggle);

    let right_side = move || match layout.get() {
        NavLayout::Desktop => view! {
            <div class="navbar__links">
                <NavLink to="/about" text="About"/>
                <NavLink to="/login" text="Login"/>
                <SignupButton/>
            </div>
        }
        .into_any(),
        NavLayout::Mobile { .. } => view! {
            <div class="navbar__compact">
                <SignupButton/>
                <button
                    class="navbar__menu-button"
                    on:click=on_toggle
                    aria-label=move || menu.get().menu_button_label()
                    aria-expanded=move || if menu.get().toggled { "true" } else { "false" }
                >
                    "☰"
                </button>
            </div>
        }
        .into_any(),
    };

    view! {
        <nav class="navbar">
            <div class="navbar__bar">
                <p class="navbar__brand">{BRAND}</p>
                {right_side}
            </div>
            <Show when=move || menu.get().is_modal_visible(is_above_medium.get())>
                <div class="navbar__modal">
                    <div class="navbar__modal-close">
                        <button class="navbar__menu-button" on:click=on_toggle aria-label="Close menu">
                            "✕"
                        </button>
                    </div>
                    <div class="navbar__modal-links">
                        <NavLink to="/about" text="About"/>
                        <NavLink to="/login" text="Login"/>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
