//! Register form model: email, username, password, confirmation.
//!
//! The confirmation field depends on the password value, so a password
//! change recomputes both fields.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use super::{AuthForm, FieldState};
use crate::schema::{AuthPayload, RegisterField, RegisterPayload};
use crate::validation::{register_dependents, register_field_errors};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: FieldState,
    pub username: FieldState,
    pub password: FieldState,
    pub confirm_password: FieldState,
    /// Set by the modal while a submission is in flight.
    pub submitting: bool,
    pub password_visible: bool,
    pub confirm_password_visible: bool,
}

impl RegisterForm {
    #[must_use]
    pub fn new() -> Self {
        let empty = RegisterPayload::default();
        let fresh = |field| FieldState::new(register_field_errors(field, &empty));
        Self {
            email: fresh(RegisterField::Email),
            username: fresh(RegisterField::Username),
            password: fresh(RegisterField::Password),
            confirm_password: fresh(RegisterField::ConfirmPassword),
            submitting: false,
            password_visible: false,
            confirm_password_visible: false,
        }
    }

    #[must_use]
    pub fn field(&self, field: RegisterField) -> &FieldState {
        match field {
            RegisterField::Email => &self.email,
            RegisterField::Username => &self.username,
            RegisterField::Password => &self.password,
            RegisterField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn field_mut(&mut self, field: RegisterField) -> &mut FieldState {
        match field {
            RegisterField::Email => &mut self.email,
            RegisterField::Username => &mut self.username,
            RegisterField::Password => &mut self.password,
            RegisterField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Store a new raw value and recompute the errors of that field and of
    /// any field that depends on it.
    pub fn set_field_value(&mut self, field: RegisterField, value: impl Into<String>) {
        self.field_mut(field).value = value.into();
        let payload = self.payload();
        for &dependent in register_dependents(field) {
            self.field_mut(dependent).errors = register_field_errors(dependent, &payload);
        }
    }

    pub fn touch(&mut self, field: RegisterField) {
        self.field_mut(field).touched = true;
    }

    #[must_use]
    pub fn visible_errors(&self, field: RegisterField) -> &[String] {
        self.field(field).visible_errors()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        RegisterField::ALL.iter().all(|&field| self.field(field).is_valid())
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.submitting
    }

    #[must_use]
    pub fn payload(&self) -> RegisterPayload {
        RegisterPayload {
            email: self.email.value.clone(),
            username: self.username.value.clone(),
            password: self.password.value.clone(),
            confirm_password: self.confirm_password.value.clone(),
        }
    }

    /// Submit attempt. Marks every field touched; yields the payload only
    /// when the form is valid.
    pub fn submit(&mut self) -> Option<RegisterPayload> {
        self.touch_all();
        if !self.is_valid() {
            tracing::debug!("register submit ignored: form invalid");
            return None;
        }
        Some(self.payload())
    }

    pub fn reset(&mut self) {
        *self = Self { submitting: self.submitting, ..Self::new() };
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn toggle_confirm_password_visibility(&mut self) {
        self.confirm_password_visible = !self.confirm_password_visible;
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthForm for RegisterForm {
    fn is_valid(&self) -> bool {
        RegisterForm::is_valid(self)
    }

    fn snapshot(&self) -> AuthPayload {
        self.payload().into()
    }

    fn reset(&mut self) {
        RegisterForm::reset(self);
    }

    fn touch_all(&mut self) {
        for field in RegisterField::ALL {
            self.touch(field);
        }
    }

    fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }
}
