//! Reactive CSS media-query matching.
//!
//! Server rendering has no viewport, so queries report `false` there and the
//! navigation bar renders its narrow layout. After hydration the browser
//! evaluates the query and re-evaluates it on every window resize.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;

/// Evaluate `query` against the current window once.
#[cfg(feature = "hydrate")]
pub fn matches(query: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.match_media(query) {
        Ok(Some(list)) => list.matches(),
        _ => false,
    }
}

/// Evaluate `query` against the current window once.
#[cfg(not(feature = "hydrate"))]
pub fn matches(_query: &str) -> bool {
    false
}

/// Signal tracking whether `query` currently matches.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn use_media_query(query: &'static str) -> Signal<bool> {
    let matched = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || matched.set(matches(query)));
        let listener = window_event_listener(leptos::ev::resize, move |_| matched.set(matches(query)));
        on_cleanup(move || listener.remove());
    }

    matched.into()
}
