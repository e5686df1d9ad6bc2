//! Error types for the auth layer.
//!
//! DESIGN
//! ======
//! Field-level validation failures are data (`FieldState::errors`), not
//! errors, and invalid submits are silent no-ops. The only fallible surface
//! left is configuration and handing payloads to the submission sink.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A tab name was not `login` or `register`.
    #[error("unknown auth tab '{0}' (expected 'login' or 'register')")]
    UnknownTab(String),

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The submission sink could not accept a payload.
    #[error("submission sink unavailable: {0}")]
    SinkUnavailable(String),
}
