//! Validation rules for the login and register forms.
//!
//! DESIGN
//! ======
//! `rules` holds the per-field checks. This module assembles them into the
//! per-form view: field-level dispatch used by the form models on every
//! value change, and whole-payload validation that collects every failing
//! field into a `FormErrors` map.

pub mod rules;


use std::collections::BTreeMap;

use crate::schema::{LoginField, LoginPayload, RegisterField, RegisterPayload};

/// Messages keyed by the failing field. Fields that pass are absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormErrors<F: Ord> {
    fields: BTreeMap<F, Vec<String>>,
}

impl<F: Ord + Copy> FormErrors<F> {
    fn collect(fields: impl IntoIterator<Item = F>, mut errors_for: impl FnMut(F) -> Vec<String>) -> Self {
        let fields = fields
            .into_iter()
            .filter_map(|field| {
                let errors = errors_for(field);
                (!errors.is_empty()).then_some((field, errors))
            })
            .collect();
        Self { fields }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Messages for `field`, empty when it passed.
    #[must_use]
    pub fn get(&self, field: F) -> &[String] {
        self.fields.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &[String])> {
        self.fields.iter().map(|(field, errors)| (*field, errors.as_slice()))
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

// =============================================================================
// FIELD DISPATCH
// =============================================================================

#[must_use]
pub fn login_field_errors(field: LoginField, payload: &LoginPayload) -> Vec<String> {
    match field {
        LoginField::Email => rules::email_errors(&payload.email),
        LoginField::Password => rules::login_password_errors(&payload.password),
    }
}

#[must_use]
pub fn register_field_errors(field: RegisterField, payload: &RegisterPayload) -> Vec<String> {
    match field {
        RegisterField::Email => rules::email_errors(&payload.email),
        RegisterField::Username => rules::username_errors(&payload.username),
        RegisterField::Password => rules::register_password_errors(&payload.password),
        RegisterField::ConfirmPassword => {
            rules::confirm_password_errors(&payload.confirm_password, &payload.password)
        }
    }
}

/// Fields whose errors must be recomputed when `field` changes.
#[must_use]
pub fn register_dependents(field: RegisterField) -> &'static [RegisterField] {
    match field {
        RegisterField::Password => &[RegisterField::Password, RegisterField::ConfirmPassword],
        RegisterField::Email => &[RegisterField::Email],
        RegisterField::Username => &[RegisterField::Username],
        RegisterField::ConfirmPassword => &[RegisterField::ConfirmPassword],
    }
}

// =============================================================================
// WHOLE-FORM VALIDATION
// =============================================================================

/// Validate a complete login payload.
///
/// # Errors
///
/// Returns every failing field with its messages.
pub fn validate_login(payload: &LoginPayload) -> Result<(), FormErrors<LoginField>> {
    FormErrors::collect(LoginField::ALL, |field| login_field_errors(field, payload)).into_result()
}

/// Validate a complete register payload, including the confirmation match.
///
/// # Errors
///
/// Returns every failing field with its messages.
pub fn validate_register(payload: &RegisterPayload) -> Result<(), FormErrors<RegisterField>> {
    FormErrors::collect(RegisterField::ALL, |field| register_field_errors(field, payload)).into_result()
}
