//! Form models for the auth modal.
//!
//! DESIGN
//! ======
//! Each form owns its `FieldState`s and recomputes errors explicitly inside
//! `set_field_value`; nothing is derived lazily. The modal drives both forms
//! through the `AuthForm` capability set so it never needs to know which
//! concrete form is active.

pub mod field;
pub mod login;
pub mod register;

pub use field::FieldState;
pub use login::LoginForm;
pub use register::RegisterForm;

use crate::schema::AuthPayload;

/// Capabilities the modal needs from whichever form is active.
pub trait AuthForm {
    /// True when every field is error-free.
    fn is_valid(&self) -> bool;

    /// Current field values, verbatim.
    fn snapshot(&self) -> AuthPayload;

    /// Back to empty, untouched inputs.
    fn reset(&mut self);

    /// Mark every field as interacted with, as a submit attempt does.
    fn touch_all(&mut self);

    fn is_submitting(&self) -> bool;

    /// Mirrors the modal's in-flight flag; forms never set it themselves.
    fn set_submitting(&mut self, submitting: bool);
}
