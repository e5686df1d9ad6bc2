//! Authentication form validation and submission state for the YouChat
//! front end.
//!
//! This crate owns the login/register form models, their validation rules,
//! and the auth modal controller that gates submissions. Rendering and the
//! actual auth request belong to the surrounding application, which plugs in
//! through [`sink::SubmissionSink`].

pub mod config;
pub mod error;
pub mod form;
pub mod modal;
pub mod schema;
pub mod sink;
pub mod validation;

pub use config::AuthConfig;
pub use error::AuthError;
pub use modal::{ActiveForm, AuthModal, Tab, TabSwitchPolicy};
pub use schema::{AuthPayload, LoginField, LoginPayload, RegisterField, RegisterPayload};
pub use sink::{ChannelSink, Completion, Submission, SubmissionSink, SubmitOutcome};
