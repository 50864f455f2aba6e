//! Member account creation through the signup endpoint.
//!
//! Accounts are independent of each other, so a failed signup is logged and
//! the run moves on to the next member.

use crate::client::AccountService;
use crate::error::SinkError;
use seed_core::MemberProfile;
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};

/// Default pause between signups.
pub const DEFAULT_SIGNUP_PAUSE: Duration = Duration::from_millis(500);

/// Result of one signup attempt.
#[derive(Debug)]
pub enum SignupOutcome {
    Created { user_id: String },
    /// 2xx response without a recognizable user id.
    CreatedWithoutId,
    Failed(SinkError),
}

impl SignupOutcome {
    /// Only a response carrying the new user's id counts as created.
    pub fn is_created(&self) -> bool {
        matches!(self, SignupOutcome::Created { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SignupOutcome::Failed(_))
    }
}

/// Per-member results of a signup run, in submission order.
#[derive(Debug, Default)]
pub struct SignupReport {
    pub results: Vec<(String, SignupOutcome)>,
}

impl SignupReport {
    pub fn created(&self) -> usize {
        self.results.iter().filter(|(_, o)| o.is_created()).count()
    }

    /// Accepted by the backend, but with no id to confirm the account.
    pub fn without_id(&self) -> usize {
        self.results
            .iter()
            .filter(|(_, o)| matches!(o, SignupOutcome::CreatedWithoutId))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|(_, o)| o.is_failed()).count()
    }

    pub fn attempted(&self) -> usize {
        self.results.len()
    }
}

/// Read the user id from either `{"user": {"id": ..}}` or `{"id": ..}`.
pub fn extract_user_id(body: &Value) -> Option<String> {
    body.get("user")
        .and_then(|user| user.get("id"))
        .or_else(|| body.get("id"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

pub struct SignupRunner<A> {
    service: A,
    pause: Duration,
}

impl<A: AccountService> SignupRunner<A> {
    pub fn new(service: A) -> Self {
        Self {
            service,
            pause: DEFAULT_SIGNUP_PAUSE,
        }
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn service(&self) -> &A {
        &self.service
    }

    /// Sign up every member in order.
    pub async fn run(&self, members: &[MemberProfile]) -> SignupReport {
        let mut report = SignupReport::default();

        for (i, member) in members.iter().enumerate() {
            if i > 0 && !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }

            info!("Creating user: {} ({})", member.email, member.full_name());

            let outcome = match self.service.signup(member).await {
                Ok(body) => match extract_user_id(&body) {
                    Some(user_id) => {
                        info!("Created user {} with id {}", member.email, user_id);
                        SignupOutcome::Created { user_id }
                    }
                    None => {
                        warn!("Created user {} but the response had no id", member.email);
                        SignupOutcome::CreatedWithoutId
                    }
                },
                Err(e) => {
                    warn!("Failed to create {}: {}", member.email, e);
                    SignupOutcome::Failed(e)
                }
            };

            report.results.push((member.email.clone(), outcome));
        }

        info!("Created {}/{} users", report.created(), report.attempted());
        if report.without_id() > 0 {
            warn!(
                "{} signup(s) returned no user id and are not counted as created",
                report.without_id()
            );
        }
        report
    }
}
