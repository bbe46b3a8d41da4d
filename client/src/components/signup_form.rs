//! Signup form with inline validation messages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form makes no network call. A valid submit logs the values (passwords
//! redacted) and redirects to the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::input_field::InputField;
use crate::state::signup::{SignupField, SignupFormState, SignupValues, SubmitOutcome};

/// Where a successful signup lands.
pub const AFTER_SIGNUP_PATH: &str = "/login";

#[component]
pub fn SignupForm() -> impl IntoView {
    let form = RwSignal::new(SignupFormState::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Invalid input stays on the page; every message is now visible.
        if let Some(SubmitOutcome::Ready(values)) = form.try_update(SignupFormState::begin_submit) {
            log_submission(&values);
            form.update(SignupFormState::finish_submit);
            navigate(AFTER_SIGNUP_PATH, NavigateOptions::default());
        }
    };

    let fields = SignupField::ALL
        .into_iter()
        .map(|field| view! { <SignupFieldRow form=form field=field/> })
        .collect_view();

    view! {
        <form class="signup-form" on:submit=on_submit novalidate=true>
            {fields}
            <button
                class="signup-form__submit"
                type="submit"
                disabled=move || form.with(|f| f.is_submitting)
            >
                "Register new account"
            </button>
        </form>
    }
}

/// Label, input and inline message for one field.
#[component]
fn SignupFieldRow(form: RwSignal<SignupFormState>, field: SignupField) -> impl IntoView {
    let value = Signal::derive(move || form.with(|f| f.values.get(field).to_owned()));
    let invalid = Signal::derive(move || form.with(|f| f.has_error_class(field)));
    let message = move || form.with(|f| f.visible_error(field));

    let on_input = Callback::new(move |text: String| form.update(|f| f.set_value(field, text)));
    let on_blur = Callback::new(move |()| form.update(|f| f.blur(field)));

    view! {
        <div class="signup-form__row">
            <label class="signup-form__label" for=field.input_id()>
                {field.label()}
            </label>
            <InputField
                id=field.input_id()
                name=field.name()
                input_type=field.input_type()
                placeholder=field.placeholder()
                value=value
                invalid=invalid
                on_input=on_input
                on_blur=on_blur
            />
            {move || message().map(|text| view! { <div class="error">{text}</div> })}
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn log_submission(values: &SignupValues) {
    match values.to_log_json() {
        Ok(json) => log::info!("signup submitted: {json}"),
        Err(e) => log::warn!("signup submitted; values not loggable: {e}"),
    }
}

#[cfg(not(feature = "hydrate"))]
fn log_submission(_values: &SignupValues) {}
