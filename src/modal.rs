//! Auth modal controller: which form is active, and whether a submission
//! is in flight.
//!
//! DESIGN
//! ======
//! Both forms live for the whole modal lifetime; `active_tab` only selects
//! which one is presented, so switching tabs never loses input. The
//! `submitting` flag is the single cooperative lock: `begin_submit` takes
//! it, and only `end_submit` (normally via the sink's `Completion`) releases
//! it. Rejected operations are no-ops logged at debug level.
//!
//! TRADE-OFFS
//! ==========
//! Switching tabs mid-submission is allowed by default because the forms are
//! independent. `TabSwitchPolicy::BlockWhileSubmitting` exists for products
//! that want the presented form pinned until the sink answers.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::form::{AuthForm, LoginForm, RegisterForm};
use crate::sink::{Completion, Submission, SubmissionSink, SubmitOutcome};

// =============================================================================
// TAB
// =============================================================================

/// The two mutually exclusive forms of the modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Login,
    Register,
}

impl Tab {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(Self::Login),
            "register" => Ok(Self::Register),
            _ => Err(AuthError::UnknownTab(s.to_owned())),
        }
    }
}

/// Whether `switch_to` is honored while a submission is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabSwitchPolicy {
    #[default]
    Always,
    BlockWhileSubmitting,
}

impl FromStr for TabSwitchPolicy {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "block_while_submitting" => Ok(Self::BlockWhileSubmitting),
            _ => Err(AuthError::ConfigParse(format!(
                "unsupported tab switch policy '{}' (expected 'always' or 'block_while_submitting')",
                s.trim()
            ))),
        }
    }
}

// =============================================================================
// ACTIVE FORM
// =============================================================================

/// Borrowed view of whichever form is presented.
#[derive(Clone, Copy, Debug)]
pub enum ActiveForm<'a> {
    Login(&'a LoginForm),
    Register(&'a RegisterForm),
}

impl ActiveForm<'_> {
    #[must_use]
    pub fn tab(&self) -> Tab {
        match self {
            Self::Login(_) => Tab::Login,
            Self::Register(_) => Tab::Register,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.as_form().is_valid()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.as_form().is_submitting()
    }

    fn as_form(&self) -> &dyn AuthForm {
        match *self {
            Self::Login(form) => form,
            Self::Register(form) => form,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum SubmitRejection {
    #[error("tab {requested} is not active (active: {active})")]
    InactiveTab { requested: Tab, active: Tab },
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("form is invalid")]
    InvalidForm,
}

// =============================================================================
// AUTH MODAL
// =============================================================================

#[derive(Clone, Debug)]
pub struct AuthModal {
    pub login: LoginForm,
    pub register: RegisterForm,
    active_tab: Tab,
    submitting: bool,
    in_flight: Option<Uuid>,
    policy: TabSwitchPolicy,
}

impl AuthModal {
    /// Fresh modal with empty forms, presenting `default_tab`.
    #[must_use]
    pub fn new(default_tab: Tab) -> Self {
        Self::with_policy(default_tab, TabSwitchPolicy::default())
    }

    #[must_use]
    pub fn with_policy(default_tab: Tab, policy: TabSwitchPolicy) -> Self {
        Self {
            login: LoginForm::new(),
            register: RegisterForm::new(),
            active_tab: default_tab,
            submitting: false,
            in_flight: None,
            policy,
        }
    }

    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::with_policy(config.default_tab, config.tab_switch_policy)
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Id of the submission awaiting completion, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<Uuid> {
        self.in_flight
    }

    #[must_use]
    pub fn policy(&self) -> TabSwitchPolicy {
        self.policy
    }

    #[must_use]
    pub fn active_form(&self) -> ActiveForm<'_> {
        match self.active_tab {
            Tab::Login => ActiveForm::Login(&self.login),
            Tab::Register => ActiveForm::Register(&self.register),
        }
    }

    fn form(&self, tab: Tab) -> &dyn AuthForm {
        match tab {
            Tab::Login => &self.login,
            Tab::Register => &self.register,
        }
    }

    fn form_mut(&mut self, tab: Tab) -> &mut dyn AuthForm {
        match tab {
            Tab::Login => &mut self.login,
            Tab::Register => &mut self.register,
        }
    }

    /// Present `tab`. Field state of both forms is preserved.
    /// Returns whether the switch was applied.
    pub fn switch_to(&mut self, tab: Tab) -> bool {
        if self.submitting && self.policy == TabSwitchPolicy::BlockWhileSubmitting {
            tracing::debug!(from = %self.active_tab, to = %tab, "tab switch blocked: submission in flight");
            return false;
        }
        if self.active_tab != tab {
            tracing::debug!(from = %self.active_tab, to = %tab, "auth tab switched");
            self.active_tab = tab;
        }
        true
    }

    fn check_submit(&self, tab: Tab) -> Result<(), SubmitRejection> {
        if tab != self.active_tab {
            return Err(SubmitRejection::InactiveTab { requested: tab, active: self.active_tab });
        }
        if self.submitting {
            return Err(SubmitRejection::AlreadySubmitting);
        }
        if !self.form(tab).is_valid() {
            return Err(SubmitRejection::InvalidForm);
        }
        Ok(())
    }

    /// Take the submitting lock for `tab` and build its submission.
    ///
    /// `None` when `tab` is not active, a submission is already in flight,
    /// or the form is invalid. State is unchanged in that case.
    pub fn begin_submit(&mut self, tab: Tab) -> Option<Submission> {
        if let Err(reason) = self.check_submit(tab) {
            tracing::debug!(%tab, %reason, "submit rejected");
            return None;
        }
        let submission = Submission::new(self.form(tab).snapshot());
        self.set_submitting(true);
        self.in_flight = Some(submission.id);
        tracing::info!(%tab, submission_id = %submission.id, "auth submission started");
        Some(submission)
    }

    /// Release the submitting lock. Must follow every successful `begin_submit`.
    pub fn end_submit(&mut self) {
        if !self.submitting {
            tracing::debug!("end_submit without a submission in flight");
        }
        self.set_submitting(false);
        self.in_flight = None;
    }

    /// Submit attempt from the presented form: marks its fields touched,
    /// then begins the submission and hands it to `sink`.
    ///
    /// Returns whether a submission was delivered. A sink that refuses the
    /// submission releases the lock immediately, since no completion will
    /// ever arrive for it.
    pub fn submit(&mut self, tab: Tab, sink: &mut impl SubmissionSink) -> bool {
        if tab == self.active_tab {
            self.form_mut(tab).touch_all();
        }
        let Some(submission) = self.begin_submit(tab) else {
            return false;
        };
        let id = submission.id;
        match sink.deliver(submission) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(submission_id = %id, error = %e, "submission not delivered");
                self.end_submit();
                false
            }
        }
    }

    /// Apply the sink's completion report. Stale or unknown ids are ignored.
    /// Returns whether the lock was released.
    pub fn complete(&mut self, completion: Completion) -> bool {
        if self.in_flight != Some(completion.id) {
            tracing::warn!(submission_id = %completion.id, "ignoring completion for unknown submission");
            return false;
        }
        match &completion.outcome {
            SubmitOutcome::Succeeded => {
                tracing::info!(submission_id = %completion.id, "auth submission succeeded");
            }
            SubmitOutcome::Failed(reason) => {
                tracing::warn!(submission_id = %completion.id, %reason, "auth submission failed");
            }
        }
        self.end_submit();
        true
    }

    fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
        self.login.set_submitting(submitting);
        self.register.set_submitting(submitting);
    }
}

impl Default for AuthModal {
    fn default() -> Self {
        Self::new(Tab::default())
    }
}
