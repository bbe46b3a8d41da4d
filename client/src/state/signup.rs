//! Signup form values, touched flags and submit lifecycle.
//!
//! DESIGN
//! ======
//! The form revalidates the whole record on every change and blur, but only
//! shows a field's message once that field has been touched. Submitting
//! touches every field first, so an untouched invalid field still surfaces
//! its message when the user presses the button.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use serde::Serialize;

use crate::util::validation;

const REDACTED: &str = "[redacted]";

/// The four inputs of the signup form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignupField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl SignupField {
    /// Render order of the form.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Password, Self::ConfirmPassword];

    /// Form `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// DOM id shared by the `<label for>` and the `<input>`.
    pub fn input_id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "repeat-password",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Repeat password",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Name => "text",
            Self::Email => "email",
            Self::Password | Self::ConfirmPassword => "password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter your name",
            Self::Email => "Enter your email",
            Self::Password => "Enter your password",
            Self::ConfirmPassword => "Confirm your password",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Password => 2,
            Self::ConfirmPassword => 3,
        }
    }
}

/// Raw form input. Never trimmed or persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupValues {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupValues {
    pub fn get(&self, field: SignupField) -> &str {
        match field {
            SignupField::Name => &self.name,
            SignupField::Email => &self.email,
            SignupField::Password => &self.password,
            SignupField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::Name => self.name = value,
            SignupField::Email => self.email = value,
            SignupField::Password => self.password = value,
            SignupField::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// Copy with both password fields masked (empty stays empty).
    pub fn redacted(&self) -> Self {
        let mask = |s: &str| if s.is_empty() { String::new() } else { REDACTED.to_owned() };
        Self {
            name: self.name.clone(),
            email: self.email.clone(),
            password: mask(&self.password),
            confirm_password: mask(&self.confirm_password),
        }
    }

    /// JSON line for the submit debug log, with passwords redacted.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the record cannot be encoded.
    pub fn to_log_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.redacted())
    }
}

/// Current validation message per field, `None` when the field is valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl SignupErrors {
    pub fn get(&self, field: SignupField) -> Option<&'static str> {
        match field {
            SignupField::Name => self.name,
            SignupField::Email => self.email,
            SignupField::Password => self.password,
            SignupField::ConfirmPassword => self.confirm_password,
        }
    }

    pub fn is_empty(&self) -> bool {
        SignupField::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

/// Result of pressing the submit button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the form is now submitting these values.
    Ready(SignupValues),
    /// Validation failed; every field is touched so all messages show.
    Invalid(SignupErrors),
    /// A submit is already in flight.
    Busy,
}

/// Local state of one mounted signup form.
#[derive(Clone, Debug)]
pub struct SignupFormState {
    pub values: SignupValues,
    pub errors: SignupErrors,
    pub is_submitting: bool,
    touched: [bool; 4],
}

impl Default for SignupFormState {
    fn default() -> Self {
        let values = SignupValues::default();
        Self {
            errors: validation::validate(&values),
            values,
            is_submitting: false,
            touched: [false; 4],
        }
    }
}

impl SignupFormState {
    pub fn set_value(&mut self, field: SignupField, value: String) {
        self.values.set(field, value);
        self.revalidate();
    }

    pub fn blur(&mut self, field: SignupField) {
        self.touched[field.index()] = true;
        self.revalidate();
    }

    pub fn is_touched(&self, field: SignupField) -> bool {
        self.touched[field.index()]
    }

    /// Message to render under the field, if touched and invalid.
    pub fn visible_error(&self, field: SignupField) -> Option<&'static str> {
        self.errors.get(field).filter(|_| self.is_touched(field))
    }

    /// Whether the input should carry the `error` class.
    pub fn has_error_class(&self, field: SignupField) -> bool {
        self.visible_error(field).is_some()
    }

    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if self.is_submitting {
            return SubmitOutcome::Busy;
        }
        self.touched = [true; 4];
        self.revalidate();
        if self.errors.is_empty() {
            self.is_submitting = true;
            SubmitOutcome::Ready(self.values.clone())
        } else {
            SubmitOutcome::Invalid(self.errors)
        }
    }

    pub fn finish_submit(&mut self) {
        self.is_submitting = false;
    }

    fn revalidate(&mut self) {
        self.errors = validation::validate(&self.values);
    }
}
