//! Per-field validation rules.
//!
//! Every rule is total: it takes the raw input and returns the ordered list
//! of violated-rule messages, empty when the value is acceptable. Lengths are
//! counted in UTF-16 code units, the unit browser inputs report, so a
//! character outside the Basic Multilingual Plane counts as two.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::sync::LazyLock;

use regex::Regex;

pub const PASSWORD_MIN_LEN: usize = 6;
pub const USERNAME_MIN_LEN: usize = 2;
pub const USERNAME_MAX_LEN: usize = 20;

pub const MSG_INVALID_EMAIL: &str = "please enter a valid email address";
pub const MSG_PASSWORD_TOO_SHORT: &str = "password must be at least 6 characters";
pub const MSG_PASSWORD_NO_UPPERCASE: &str = "password must contain at least one uppercase letter";
pub const MSG_PASSWORD_NO_LOWERCASE: &str = "password must contain at least one lowercase letter";
pub const MSG_PASSWORD_NO_DIGIT: &str = "password must contain at least one digit";
pub const MSG_USERNAME_TOO_SHORT: &str = "username must be at least 2 characters";
pub const MSG_USERNAME_TOO_LONG: &str = "username must be at most 20 characters";
pub const MSG_PASSWORD_MISMATCH: &str = "passwords do not match";

// Local part ends in a non-dot; domain labels start alphanumeric; alphabetic TLD.
// Leading dots and `..` runs are rejected separately since `regex` has no lookaround.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email regex must compile")
});

/// Input length as the browser measures it.
fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// `local@domain.tld` shape check.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value)
}

#[must_use]
pub fn email_errors(value: &str) -> Vec<String> {
    if is_valid_email(value) {
        Vec::new()
    } else {
        vec![MSG_INVALID_EMAIL.to_owned()]
    }
}

/// Login only requires a minimum length.
#[must_use]
pub fn login_password_errors(value: &str) -> Vec<String> {
    if input_len(value) < PASSWORD_MIN_LEN {
        vec![MSG_PASSWORD_TOO_SHORT.to_owned()]
    } else {
        Vec::new()
    }
}

/// Register passwords report every violated rule, in the order
/// length, uppercase, lowercase, digit.
#[must_use]
pub fn register_password_errors(value: &str) -> Vec<String> {
    let checks: [(bool, &str); 4] = [
        (input_len(value) >= PASSWORD_MIN_LEN, MSG_PASSWORD_TOO_SHORT),
        (value.chars().any(|c| c.is_ascii_uppercase()), MSG_PASSWORD_NO_UPPERCASE),
        (value.chars().any(|c| c.is_ascii_lowercase()), MSG_PASSWORD_NO_LOWERCASE),
        (value.chars().any(|c| c.is_ascii_digit()), MSG_PASSWORD_NO_DIGIT),
    ];
    checks
        .into_iter()
        .filter(|(passed, _)| !passed)
        .map(|(_, msg)| msg.to_owned())
        .collect()
}

#[must_use]
pub fn username_errors(value: &str) -> Vec<String> {
    let len = input_len(value);
    if len < USERNAME_MIN_LEN {
        vec![MSG_USERNAME_TOO_SHORT.to_owned()]
    } else if len > USERNAME_MAX_LEN {
        vec![MSG_USERNAME_TOO_LONG.to_owned()]
    } else {
        Vec::new()
    }
}

/// Exact match against the current password value.
#[must_use]
pub fn confirm_password_errors(confirm: &str, password: &str) -> Vec<String> {
    if confirm == password {
        Vec::new()
    } else {
        vec![MSG_PASSWORD_MISMATCH.to_owned()]
    }
}
