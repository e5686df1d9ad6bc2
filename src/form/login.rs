//! Login form model: email + password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::{AuthForm, FieldState};
use crate::schema::{AuthPayload, LoginField, LoginPayload};
use crate::validation::login_field_errors;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub email: FieldState,
    pub password: FieldState,
    /// Set by the modal while a submission is in flight.
    pub submitting: bool,
    pub password_visible: bool,
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        let empty = LoginPayload::default();
        Self {
            email: FieldState::new(login_field_errors(LoginField::Email, &empty)),
            password: FieldState::new(login_field_errors(LoginField::Password, &empty)),
            submitting: false,
            password_visible: false,
        }
    }

    #[must_use]
    pub fn field(&self, field: LoginField) -> &FieldState {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    fn field_mut(&mut self, field: LoginField) -> &mut FieldState {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    /// Store a new raw value and recompute that field's errors.
    pub fn set_field_value(&mut self, field: LoginField, value: impl Into<String>) {
        self.field_mut(field).value = value.into();
        let errors = login_field_errors(field, &self.payload());
        self.field_mut(field).errors = errors;
    }

    pub fn touch(&mut self, field: LoginField) {
        self.field_mut(field).touched = true;
    }

    #[must_use]
    pub fn visible_errors(&self, field: LoginField) -> &[String] {
        self.field(field).visible_errors()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.email.is_valid() && self.password.is_valid()
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.submitting
    }

    #[must_use]
    pub fn payload(&self) -> LoginPayload {
        LoginPayload { email: self.email.value.clone(), password: self.password.value.clone() }
    }

    /// Submit attempt. Marks every field touched; yields the payload only
    /// when the form is valid.
    pub fn submit(&mut self) -> Option<LoginPayload> {
        self.touch_all();
        if !self.is_valid() {
            tracing::debug!("login submit ignored: form invalid");
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
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthForm for LoginForm {
    fn is_valid(&self) -> bool {
        LoginForm::is_valid(self)
    }

    fn snapshot(&self) -> AuthPayload {
        self.payload().into()
    }

    fn reset(&mut self) {
        LoginForm::reset(self);
    }

    fn touch_all(&mut self) {
        for field in LoginField::ALL {
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
