use super::*;
use crate::schema::{LoginPayload, RegisterPayload};

fn login_submission() -> Submission {
    Submission::new(AuthPayload::Login(LoginPayload {
        email: "test@example.com".to_owned(),
        password: "Password123".to_owned(),
    }))
}

#[test]
fn submission_tab_follows_payload() {
    assert_eq!(login_submission().tab(), Tab::Login);
    let register = Submission::new(AuthPayload::Register(RegisterPayload::default()));
    assert_eq!(register.tab(), Tab::Register);
}

#[test]
fn submissions_get_distinct_ids() {
    assert_ne!(login_submission().id, login_submission().id);
}

#[test]
fn completion_carries_submission_id() {
    let submission = login_submission();
    let completion = submission.complete(SubmitOutcome::Failed("401".to_owned()));
    assert_eq!(completion.id, submission.id);
    assert_eq!(completion.outcome, SubmitOutcome::Failed("401".to_owned()));
}

#[test]
fn vec_sink_records_in_order() {
    let mut sink: Vec<Submission> = Vec::new();
    let first = login_submission();
    let second = login_submission();
    sink.deliver(first.clone()).unwrap();
    sink.deliver(second.clone()).unwrap();
    assert_eq!(sink, vec![first, second]);
}

#[tokio::test]
async fn channel_sink_forwards_to_receiver() {
    let (tx, mut rx) = mpsc::channel(1);
    let mut sink = ChannelSink::new(tx);
    let submission = login_submission();
    sink.deliver(submission.clone()).unwrap();
    assert_eq!(rx.recv().await, Some(submission));
}

#[test]
fn channel_sink_reports_full_channel() {
    let (tx, _rx) = mpsc::channel(1);
    let mut sink = ChannelSink::new(tx);
    sink.deliver(login_submission()).unwrap();
    let err = sink.deliver(login_submission()).unwrap_err();
    assert_eq!(err, AuthError::SinkUnavailable("channel full".to_owned()));
}

#[test]
fn channel_sink_reports_closed_channel() {
    let (tx, rx) = mpsc::channel(1);
    drop(rx);
    let mut sink = ChannelSink::new(tx);
    let err = sink.deliver(login_submission()).unwrap_err();
    assert!(err.to_string().contains("channel closed"));
}
