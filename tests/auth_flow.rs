//! End-to-end modal flows against an async sink worker.

use std::time::Duration;

use tokio::sync::mpsc;
use youchat_auth::{
    AuthModal, AuthPayload, ChannelSink, Completion, LoginField, LoginPayload, RegisterField, Submission,
    SubmitOutcome, Tab,
};

/// Spawn a sink worker that answers every submission with `outcome` after `delay`.
fn spawn_worker(
    outcome: SubmitOutcome,
    delay: Duration,
) -> (ChannelSink, mpsc::Receiver<Completion>, mpsc::UnboundedReceiver<Submission>) {
    let (submit_tx, mut submit_rx) = mpsc::channel::<Submission>(1);
    let (done_tx, done_rx) = mpsc::channel(1);
    let (seen_tx, seen_rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while let Some(submission) = submit_rx.recv().await {
            seen_tx.send(submission.clone()).unwrap();
            tokio::time::sleep(delay).await;
            if done_tx.send(submission.complete(outcome.clone())).await.is_err() {
                break;
            }
        }
    });
    (ChannelSink::new(submit_tx), done_rx, seen_rx)
}

#[tokio::test]
async fn login_round_trip_emits_exact_payload() {
    let (mut sink, mut done_rx, mut seen_rx) = spawn_worker(SubmitOutcome::Succeeded, Duration::from_millis(5));
    let mut modal = AuthModal::new(Tab::Login);
    modal.login.set_field_value(LoginField::Email, "test@example.com");
    modal.login.set_field_value(LoginField::Password, "Password123");

    assert!(modal.submit(Tab::Login, &mut sink));
    // Rapid second activation while in flight is absorbed.
    assert!(!modal.submit(Tab::Login, &mut sink));
    assert!(modal.login.submitting);

    let completion = done_rx.recv().await.unwrap();
    assert!(modal.complete(completion));
    assert!(!modal.is_submitting());

    let seen = seen_rx.recv().await.unwrap();
    assert_eq!(
        seen.payload,
        AuthPayload::Login(LoginPayload {
            email: "test@example.com".to_owned(),
            password: "Password123".to_owned(),
        })
    );
    assert!(seen_rx.try_recv().is_err(), "only one payload should reach the sink");
}

#[tokio::test]
async fn weak_register_password_never_reaches_sink() {
    let (mut sink, _done_rx, mut seen_rx) = spawn_worker(SubmitOutcome::Succeeded, Duration::ZERO);
    let mut modal = AuthModal::new(Tab::Register);
    modal.register.set_field_value(RegisterField::Email, "test@example.com");
    modal.register.set_field_value(RegisterField::Username, "testuser");
    modal.register.set_field_value(RegisterField::Password, "password123");
    modal.register.set_field_value(RegisterField::ConfirmPassword, "password123");

    assert!(!modal.register.is_valid());
    assert!(!modal.submit(Tab::Register, &mut sink));
    assert_eq!(
        modal.register.password.errors,
        vec!["password must contain at least one uppercase letter".to_owned()]
    );

    drop(sink);
    assert!(seen_rx.recv().await.is_none());
}

#[tokio::test]
async fn failed_submission_allows_retry_after_completion() {
    let (mut sink, mut done_rx, _seen_rx) =
        spawn_worker(SubmitOutcome::Failed("invalid credentials".to_owned()), Duration::ZERO);
    let mut modal = AuthModal::new(Tab::Login);
    modal.login.set_field_value(LoginField::Email, "test@example.com");
    modal.login.set_field_value(LoginField::Password, "Password123");

    assert!(modal.submit(Tab::Login, &mut sink));
    let completion = done_rx.recv().await.unwrap();
    assert_eq!(completion.outcome, SubmitOutcome::Failed("invalid credentials".to_owned()));
    assert!(modal.complete(completion));

    assert!(modal.submit(Tab::Login, &mut sink));
}

#[tokio::test]
async fn tab_switch_mid_flight_keeps_both_forms() {
    let (mut sink, mut done_rx, _seen_rx) = spawn_worker(SubmitOutcome::Succeeded, Duration::from_millis(5));
    let mut modal = AuthModal::new(Tab::Login);
    modal.login.set_field_value(LoginField::Email, "test@example.com");
    modal.login.set_field_value(LoginField::Password, "Password123");
    assert!(modal.submit(Tab::Login, &mut sink));

    assert!(modal.switch_to(Tab::Register));
    modal.register.set_field_value(RegisterField::Username, "testuser");
    // The shared lock still blocks the register form.
    assert!(!modal.register.can_submit());

    assert!(modal.complete(done_rx.recv().await.unwrap()));
    assert_eq!(modal.login.email.value, "test@example.com");
    assert_eq!(modal.register.username.value, "testuser");
    assert_eq!(modal.active_tab(), Tab::Register);
}
