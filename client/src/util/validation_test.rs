use super::*;

fn valid_values() -> SignupValues {
    SignupValues {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "abc123!".to_owned(),
        confirm_password: "abc123!".to_owned(),
    }
}

#[test]
fn patterns_compile() {
    assert!(EMAIL_RE.is_ok());
    assert!(PASSWORD_RE.is_ok());
}

// =============================================================
// name
// =============================================================

#[test]
fn name_empty_is_required() {
    assert_eq!(validate_name(""), Err(NAME_REQUIRED));
}

#[test]
fn name_of_length_one_is_rejected() {
    assert_eq!(validate_name("A"), Err(NAME_TOO_SHORT));
}

#[test]
fn name_bounds_are_inclusive() {
    assert_eq!(validate_name("Al"), Ok(()));
    assert_eq!(validate_name(&"x".repeat(100)), Ok(()));
    assert_eq!(validate_name(&"x".repeat(101)), Err(NAME_TOO_LONG));
}

#[test]
fn name_length_counts_characters_not_bytes() {
    // Two characters, four bytes.
    assert_eq!(validate_name("Žž"), Ok(()));
    assert_eq!(validate_name(&"é".repeat(100)), Ok(()));
}

#[test]
fn name_is_not_trimmed() {
    assert_eq!(validate_name("  "), Ok(()));
}

// =============================================================
// email
// =============================================================

#[test]
fn email_empty_is_required() {
    assert_eq!(validate_email(""), Err(EMAIL_REQUIRED));
}

#[test]
fn email_without_top_level_domain_is_invalid() {
    assert_eq!(validate_email("abc@x"), Err(EMAIL_INVALID));
}

#[test]
fn email_accepts_common_addresses() {
    assert!(is_valid_email("ada@example.com"));
    assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
    assert!(is_valid_email("o'brien@sub-domain.example.org"));
}

#[test]
fn email_rejects_malformed_addresses() {
    assert!(!is_valid_email("plainaddress"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("ada@@example.com"));
    assert!(!is_valid_email("ada@example..com"));
    assert!(!is_valid_email("ada@-example.com"));
    assert!(!is_valid_email("ada@example-.com"));
    assert!(!is_valid_email("ada@example.c"));
    assert!(!is_valid_email("ada lovelace@example.com"));
    assert!(!is_valid_email(" ada@example.com"));
}

#[test]
fn email_domain_labels_are_capped_at_63_characters() {
    let label_63 = "c".repeat(63);
    let label_64 = "c".repeat(64);
    assert!(is_valid_email(&format!("a@b.{label_63}")));
    assert!(!is_valid_email(&format!("a@b.{label_64}")));
    assert!(is_valid_email(&format!("a@{label_63}.com")));
    assert!(!is_valid_email(&format!("a@{label_64}.com")));
}

#[test]
fn email_rejects_trailing_newline_and_non_ascii_local_part() {
    assert!(!is_valid_email("ada@example.com\n"));
    assert!(!is_valid_email("adä@example.com"));
}

// =============================================================
// password
// =============================================================

#[test]
fn password_with_digit_and_symbol_is_accepted() {
    assert_eq!(validate_password("abc123!"), Ok(()));
}

#[test]
fn password_without_digit_or_symbol_is_rejected() {
    assert_eq!(validate_password("abcdef"), Err(PASSWORD_WEAK));
    assert_eq!(validate_password("abcdef!"), Err(PASSWORD_WEAK));
    assert_eq!(validate_password("abcdef1"), Err(PASSWORD_WEAK));
}

#[test]
fn password_empty_is_required() {
    assert_eq!(validate_password(""), Err(PASSWORD_REQUIRED));
}

#[test]
fn password_shorter_than_six_reports_length() {
    assert_eq!(validate_password("a1!"), Err(PASSWORD_TOO_SHORT));
}

#[test]
fn password_longer_than_sixteen_is_weak() {
    assert_eq!(validate_password("abcdefghijklmn1!"), Ok(()));
    assert_eq!(validate_password("abcdefghijklmno1!"), Err(PASSWORD_WEAK));
}

#[test]
fn password_outside_allowed_alphabet_is_weak() {
    assert_eq!(validate_password("abc 123!"), Err(PASSWORD_WEAK));
    assert_eq!(validate_password("abc123?"), Err(PASSWORD_WEAK));
    assert_eq!(validate_password("äbc123!"), Err(PASSWORD_WEAK));
}

#[test]
fn every_listed_symbol_satisfies_the_symbol_rule() {
    for symbol in PASSWORD_SYMBOLS.chars() {
        let password = format!("abc12{symbol}");
        assert!(is_strong_password(&password), "{password} should be accepted");
    }
}

// =============================================================
// confirmPassword
// =============================================================

#[test]
fn confirm_mismatch_is_rejected_with_match_error() {
    assert_eq!(validate_confirm_password("abc123!", "abc123?"), Err(CONFIRM_MISMATCH));
}

#[test]
fn confirm_empty_is_required() {
    assert_eq!(validate_confirm_password("abc123!", ""), Err(CONFIRM_REQUIRED));
    assert_eq!(validate_confirm_password("", ""), Err(CONFIRM_REQUIRED));
}

#[test]
fn confirm_equal_to_password_is_accepted() {
    assert_eq!(validate_confirm_password("abc123!", "abc123!"), Ok(()));
}

// =============================================================
// whole form
// =============================================================

#[test]
fn validate_valid_values_has_no_errors() {
    assert!(validate(&valid_values()).is_empty());
}

#[test]
fn validate_empty_values_reports_required_for_every_field() {
    let errors = validate(&SignupValues::default());
    assert_eq!(errors.name, Some(NAME_REQUIRED));
    assert_eq!(errors.email, Some(EMAIL_REQUIRED));
    assert_eq!(errors.password, Some(PASSWORD_REQUIRED));
    assert_eq!(errors.confirm_password, Some(CONFIRM_REQUIRED));
}

#[test]
fn validate_reports_each_field_independently() {
    let values = SignupValues {
        email: "abc@x".to_owned(),
        confirm_password: "different1!".to_owned(),
        ..valid_values()
    };
    let errors = validate(&values);
    assert_eq!(errors.name, None);
    assert_eq!(errors.email, Some(EMAIL_INVALID));
    assert_eq!(errors.password, None);
    assert_eq!(errors.confirm_password, Some(CONFIRM_MISMATCH));
}
