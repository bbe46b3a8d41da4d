//! Controlled text input used by the signup form.

use leptos::prelude::*;

/// An `<input>` bound to a reactive value with input and blur callbacks.
#[component]
pub fn InputField(
    id: &'static str,
    name: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] invalid: Signal<bool>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
) -> impl IntoView {
    view! {
        <input
            class="input-field"
            class:error=move || invalid.get()
            id=id
            name=name
            type=input_type
            placeholder=placeholder
            aria-invalid=move || if invalid.get() { "true" } else { "false" }
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
            on:blur=move |_| on_blur.run(())
        />
    }
}
