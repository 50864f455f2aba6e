//! RestClient wired into the populators, against the stub server.

use crate::stub_server::StubServer;
use seed_core::{ActivityTypeDefinition, MemberProfile, ProfileAttributes};
use seed_populate_rest::{
    BatchSubmitter, CatalogSeeder, RestClient, SignupOutcome, SignupRunner, SinkError,
    SubmitOutcome,
};
use serde_json::json;
use std::time::Duration;

const KEY: &str = "anon-test-key";

fn client(url: &str) -> RestClient {
    RestClient::new(url, KEY, Duration::from_secs(5)).unwrap()
}

fn rows(count: usize) -> Vec<serde_json::Value> {
    (0..count).map(|i| json!({ "n": i, "note": null })).collect()
}

#[tokio::test]
async fn test_submit_sends_every_batch_with_headers() {
    let server = StubServer::start(vec![]).await;
    let submitter = BatchSubmitter::new(client(&server.url()), 10)
        .unwrap()
        .with_pause(Duration::ZERO);

    let outcome = submitter.submit("logs", &rows(25)).await;

    assert!(outcome.is_completed());
    assert_eq!(outcome.metrics().records_submitted, 25);

    let requests = server.requests();
    let sizes: Vec<usize> = requests
        .iter()
        .map(|r| r.json().as_array().unwrap().len())
        .collect();
    assert_eq!(sizes, vec![10, 10, 5]);

    let first = &requests[0];
    assert_eq!(first.method, "POST");
    assert_eq!(first.target, "/rest/v1/logs");
    assert_eq!(first.header("apikey"), Some(KEY));
    assert_eq!(first.header("authorization"), Some("Bearer anon-test-key"));
    assert_eq!(first.header("content-type"), Some("application/json"));
    assert_eq!(first.header("prefer"), Some("return=minimal"));

    // Order is preserved across batches and null keys survive
    assert_eq!(requests[1].json()[0]["n"], 10);
    assert!(requests[2].json()[4]["note"].is_null());
}

#[tokio::test]
async fn test_submit_halts_on_server_error() {
    let server = StubServer::start(vec![(201, ""), (500, r#"{"message":"boom"}"#)]).await;
    let submitter = BatchSubmitter::new(client(&server.url()), 10)
        .unwrap()
        .with_pause(Duration::ZERO);

    let outcome = submitter.submit("logs", &rows(25)).await;

    match outcome {
        SubmitOutcome::Halted {
            failed_batch,
            metrics,
            error,
        } => {
            assert_eq!(failed_batch, 2);
            assert_eq!(metrics.records_submitted, 10);
            assert_eq!(metrics.total_batches, 3);
            match error {
                SinkError::Status { status, body } => {
                    assert_eq!(status, 500);
                    assert!(body.contains("boom"));
                }
                other => panic!("expected status error, got {other:?}"),
            }
        }
        SubmitOutcome::Completed(_) => panic!("expected halt"),
    }

    // Third batch never sent, first never re-sent
    assert_eq!(server.requests().len(), 2);
}

#[tokio::test]
async fn test_submit_halts_on_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let submitter = BatchSubmitter::new(client(&url), 10)
        .unwrap()
        .with_pause(Duration::ZERO);
    let outcome = submitter.submit("logs", &rows(5)).await;

    match outcome {
        SubmitOutcome::Halted {
            failed_batch,
            error,
            ..
        } => {
            assert_eq!(failed_batch, 1);
            assert!(matches!(error, SinkError::Transport(_)));
        }
        SubmitOutcome::Completed(_) => panic!("expected halt"),
    }
}

fn member(email: &str, name: &str) -> MemberProfile {
    MemberProfile {
        email: email.to_string(),
        password: "Password123!".to_string(),
        profile: ProfileAttributes {
            full_name: name.to_string(),
            role: "member".to_string(),
        },
    }
}

#[tokio::test]
async fn test_signup_continues_after_failure() {
    let server = StubServer::start(vec![
        (200, r#"{"user":{"id":"u-1"}}"#),
        (422, r#"{"msg":"User already registered"}"#),
        (200, r#"{"id":"u-3"}"#),
        (200, r#"{"msg":"Check your email"}"#),
    ])
    .await;
    let runner = SignupRunner::new(client(&server.url())).with_pause(Duration::ZERO);

    let report = runner
        .run(&[
            member("alice.johnson.101@example.com", "Alice Johnson"),
            member("bob.smith.202@example.com", "Bob Smith"),
            member("charlie.brown.303@example.com", "Charlie Brown"),
            member("diana.prince.404@example.com", "Diana Prince"),
        ])
        .await;

    assert_eq!(report.attempted(), 4);
    assert_eq!(report.created(), 2);
    assert_eq!(report.without_id(), 1);
    assert_eq!(report.failed(), 1);
    assert!(matches!(report.results[3].1, SignupOutcome::CreatedWithoutId));
    assert!(matches!(
        &report.results[0].1,
        SignupOutcome::Created { user_id } if user_id == "u-1"
    ));
    assert!(matches!(
        &report.results[1].1,
        SignupOutcome::Failed(e) if e.status() == Some(422)
    ));

    let requests = server.requests();
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[0].target, "/auth/v1/signup");
    assert_eq!(requests[0].header("apikey"), Some(KEY));
    assert_eq!(requests[0].header("authorization"), None);
    let body = requests[0].json();
    assert_eq!(body["email"], "alice.johnson.101@example.com");
    assert_eq!(body["data"]["full_name"], "Alice Johnson");
    assert_eq!(body["data"]["role"], "member");
}

#[tokio::test]
async fn test_catalog_inserts_missing_and_updates_existing() {
    let server = StubServer::start(vec![
        (200, "[]"),
        (201, ""),
        (200, r#"[{"id":"existing-id"}]"#),
        (204, ""),
    ])
    .await;
    let seeder = CatalogSeeder::new(client(&server.url()));

    let definition = |name: &str| ActivityTypeDefinition {
        name: name.to_string(),
        icon_name: "Bath".to_string(),
        color_theme: "accent-cyan".to_string(),
        category: "care".to_string(),
    };
    let report = seeder
        .upsert_all(&[definition("Shower"), definition("Medicine")])
        .await;

    assert_eq!(report.inserted, vec!["Shower"]);
    assert_eq!(report.updated, vec!["Medicine"]);
    assert!(report.failed.is_empty());

    let requests = server.requests();
    let calls: Vec<(&str, &str)> = requests
        .iter()
        .map(|r| (r.method.as_str(), r.target.as_str()))
        .collect();
    assert_eq!(
        calls,
        vec![
            ("GET", "/rest/v1/activity_types?name=eq.Shower&select=id"),
            ("POST", "/rest/v1/activity_types"),
            ("GET", "/rest/v1/activity_types?name=eq.Medicine&select=id"),
            ("PATCH", "/rest/v1/activity_types?id=eq.existing-id"),
        ]
    );
    assert_eq!(requests[3].json()["icon_name"], "Bath");
}
