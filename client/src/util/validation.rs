//! Signup field validation rules.
//!
//! DESIGN
//! ======
//! Each field reports at most one message. An empty value always reports the
//! field's "required" message; otherwise the field's remaining rules run in
//! order and the first failure wins. Rules are pure functions over the raw
//! input so the form state can revalidate on every keystroke.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::state::signup::{SignupErrors, SignupValues};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const PASSWORD_MIN_CHARS: usize = 6;

/// Symbols a password may contain; at least one is required.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be minimum 2 characters long";
pub const NAME_TOO_LONG: &str = "Name must not be more than 100 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";
pub const PASSWORD_WEAK: &str = "Please create a stronger password";
pub const CONFIRM_REQUIRED: &str = "Confirm password is required";
pub const CONFIRM_MISMATCH: &str = "Passwords must match";

/// Local part, `@`, then two or more hostname labels of at most 63 characters
/// each, the last an alphabetic TLD.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$";

/// Allowed alphabet and overall length; digit and symbol presence are checked separately.
const PASSWORD_PATTERN: &str = r"^[A-Za-z0-9!@#$%^&*]{6,16}$";

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN));
static PASSWORD_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(PASSWORD_PATTERN));

/// Outcome of a single field check: `Err` carries the user-facing message.
pub type FieldResult = Result<(), &'static str>;

pub fn validate_name(name: &str) -> FieldResult {
    if name.is_empty() {
        return Err(NAME_REQUIRED);
    }
    let len = name.chars().count();
    if len < NAME_MIN_CHARS {
        return Err(NAME_TOO_SHORT);
    }
    if len > NAME_MAX_CHARS {
        return Err(NAME_TOO_LONG);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> FieldResult {
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    if !is_valid_email(email) {
        return Err(EMAIL_INVALID);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> FieldResult {
    if password.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err(PASSWORD_TOO_SHORT);
    }
    if !is_strong_password(password) {
        return Err(PASSWORD_WEAK);
    }
    Ok(())
}

/// The confirmation is compared byte-for-byte against the current password.
pub fn validate_confirm_password(password: &str, confirm: &str) -> FieldResult {
    if confirm.is_empty() {
        return Err(CONFIRM_REQUIRED);
    }
    if confirm != password {
        return Err(CONFIRM_MISMATCH);
    }
    Ok(())
}

/// Validate every field of the form at once.
pub fn validate(values: &SignupValues) -> SignupErrors {
    SignupErrors {
        name: validate_name(&values.name).err(),
        email: validate_email(&values.email).err(),
        password: validate_password(&values.password).err(),
        confirm_password: validate_confirm_password(&values.password, &values.confirm_password).err(),
    }
}

/// Syntactic address check; no DNS or deliverability lookups.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_ok_and(|re| re.is_match(email))
}

/// 6–16 characters from letters, digits and [`PASSWORD_SYMBOLS`], with at
/// least one digit and one symbol.
pub fn is_strong_password(password: &str) -> bool {
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    has_digit && has_symbol && PASSWORD_RE.as_ref().is_ok_and(|re| re.is_match(password))
}
