//! Field identifiers and submission payloads for the auth forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Payloads are what the submission sink receives. Field names serialize in
//! the front end's camelCase so a sink can forward them without remapping.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// FIELDS
// =============================================================================

/// Inputs on the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub const ALL: [Self; 2] = [Self::Email, Self::Password];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Inputs on the register form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegisterField {
    Email,
    Username,
    Password,
    ConfirmPassword,
}

impl RegisterField {
    pub const ALL: [Self; 4] = [Self::Email, Self::Username, Self::Password, Self::ConfirmPassword];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

// =============================================================================
// PAYLOADS
// =============================================================================

/// Snapshot of the login form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Snapshot of the register form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Either form's payload, tagged by the form it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum AuthPayload {
    Login(LoginPayload),
    Register(RegisterPayload),
}

impl AuthPayload {
    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Login(p) => &p.email,
            Self::Register(p) => &p.email,
        }
    }
}

impl From<LoginPayload> for AuthPayload {
    fn from(payload: LoginPayload) -> Self {
        Self::Login(payload)
    }
}

impl From<RegisterPayload> for AuthPayload {
    fn from(payload: RegisterPayload) -> Self {
        Self::Register(payload)
    }
}
