//! Demo harness standing in for the surrounding application.
//!
//! Opens an auth modal, drives it like a user would, and runs an in-process
//! submission sink that answers after `AUTH_DEMO_LATENCY_MS`. The sink keeps
//! an in-memory set of registered emails so both outcomes show up.

use std::collections::HashSet;
use std::process::ExitCode;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use youchat_auth::{
    AuthConfig, AuthModal, AuthPayload, ChannelSink, Completion, LoginField, RegisterField, Submission,
    SubmitOutcome, Tab,
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }
    let config = match AuthConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid auth config");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(default_tab = %config.default_tab, policy = ?config.tab_switch_policy, "auth demo starting");

    let (submit_tx, submit_rx) = mpsc::channel(1);
    let (done_tx, mut done_rx) = mpsc::channel(1);
    let worker = spawn_sink_worker(submit_rx, done_tx, Duration::from_millis(config.demo_latency_ms));
    let mut sink = ChannelSink::new(submit_tx);
    let mut modal = AuthModal::from_config(&config);

    // Unknown account: the sink rejects the login.
    modal.switch_to(Tab::Login);
    modal.login.set_field_value(LoginField::Email, "test@example.com");
    modal.login.set_field_value(LoginField::Password, "Password123");
    run_submission(&mut modal, Tab::Login, &mut sink, &mut done_rx).await;

    // Register with a weak password first, then fix it.
    modal.switch_to(Tab::Register);
    modal.register.set_field_value(RegisterField::Email, "test@example.com");
    modal.register.set_field_value(RegisterField::Username, "testuser");
    modal.register.set_field_value(RegisterField::Password, "password123");
    modal.register.set_field_value(RegisterField::ConfirmPassword, "password123");
    run_submission(&mut modal, Tab::Register, &mut sink, &mut done_rx).await;
    for message in modal.register.visible_errors(RegisterField::Password) {
        tracing::info!(field = RegisterField::Password.as_str(), error = %message, "field error shown");
    }
    modal.register.set_field_value(RegisterField::Password, "Password123");
    modal.register.set_field_value(RegisterField::ConfirmPassword, "Password123");
    run_submission(&mut modal, Tab::Register, &mut sink, &mut done_rx).await;

    // Login inputs survived the tab switches; this time the account exists.
    modal.switch_to(Tab::Login);
    run_submission(&mut modal, Tab::Login, &mut sink, &mut done_rx).await;

    drop(sink);
    if let Err(e) = worker.await {
        tracing::error!(error = %e, "sink worker panicked");
        return ExitCode::FAILURE;
    }
    tracing::info!("auth demo finished");
    ExitCode::SUCCESS
}

/// One user activation of the submit control, plus an impatient second
/// click, then wait for the sink to answer.
async fn run_submission(
    modal: &mut AuthModal,
    tab: Tab,
    sink: &mut ChannelSink,
    done_rx: &mut mpsc::Receiver<Completion>,
) {
    if !modal.submit(tab, sink) {
        tracing::info!(%tab, "submit control inactive; nothing sent");
        return;
    }
    if modal.submit(tab, sink) {
        tracing::warn!(%tab, "duplicate submission slipped through");
    }
    match done_rx.recv().await {
        Some(completion) => {
            modal.complete(completion);
        }
        None => {
            tracing::warn!(%tab, "sink worker stopped before answering");
            modal.end_submit();
        }
    }
}

fn spawn_sink_worker(
    mut rx: mpsc::Receiver<Submission>,
    done_tx: mpsc::Sender<Completion>,
    latency: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut registered: HashSet<String> = HashSet::new();
        while let Some(submission) = rx.recv().await {
            tracing::info!(submission_id = %submission.id, payload = %redacted(&submission.payload), "sink received");
            tokio::time::sleep(latency).await;

            let outcome = match &submission.payload {
                AuthPayload::Login(p) if registered.contains(&p.email) => SubmitOutcome::Succeeded,
                AuthPayload::Login(_) => SubmitOutcome::Failed("invalid credentials".to_owned()),
                AuthPayload::Register(p) if registered.insert(p.email.clone()) => SubmitOutcome::Succeeded,
                AuthPayload::Register(_) => SubmitOutcome::Failed("email already registered".to_owned()),
            };
            if done_tx.send(submission.complete(outcome)).await.is_err() {
                tracing::warn!(submission_id = %submission.id, "completion receiver dropped");
                break;
            }
        }
    })
}

/// JSON rendering of a payload with password fields masked.
fn redacted(payload: &AuthPayload) -> Value {
    let mut value = serde_json::to_value(payload).unwrap_or(Value::Null);
    if let Value::Object(map) = &mut value {
        for key in ["password", "confirmPassword"] {
            if let Some(field) = map.get_mut(key) {
                *field = Value::String("***".to_owned());
            }
        }
    }
    value
}
