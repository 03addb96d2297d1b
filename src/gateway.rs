use std::time::Duration;

use axum::async_trait;
use thiserror::Error;

use crate::forms::login::CleanLogin;
use crate::forms::register::CleanRegistration;

/// Banner text shown when a submission fails for a reason that is not tied
/// to a form field.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
#[error("submission failed: {reason}")]
pub struct SubmissionFailure {
    reason: String,
}

impl SubmissionFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Destination of validated form submissions.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &CleanLogin) -> Result<(), SubmissionFailure>;

    async fn register(&self, registration: &CleanRegistration) -> Result<(), SubmissionFailure>;
}

/// Stand-in for the account backend: waits a fixed delay, then accepts.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl AuthGateway for SimulatedGateway {
    #[tracing::instrument(name = "simulated_login", skip_all)]
    async fn login(&self, _credentials: &CleanLogin) -> Result<(), SubmissionFailure> {
        tracing::debug!(delay = ?self.delay, "Simulating login call");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    #[tracing::instrument(name = "simulated_register", skip_all)]
    async fn register(&self, _registration: &CleanRegistration) -> Result<(), SubmissionFailure> {
        tracing::debug!(delay = ?self.delay, "Simulating registration call");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_gateway_always_accepts() {
        let gateway = SimulatedGateway::new(Duration::from_millis(5));
        let credentials = CleanLogin {
            email: "a@b.com".to_string(),
            password: "pw".to_string(),
        };

        let started = tokio::time::Instant::now();
        assert!(gateway.login(&credentials).await.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(5));
    }

    #[tokio::test]
    async fn test_simulated_registration_accepts() {
        let gateway = SimulatedGateway::new(Duration::ZERO);
        let registration = CleanRegistration {
            first_name: "Jo".to_string(),
            last_name: "Do".to_string(),
            email: "a@b.com".to_string(),
            password: "Abcdefg1".to_string(),
        };
        assert!(gateway.register(&registration).await.is_ok());
    }

    #[test]
    fn test_failure_keeps_reason_out_of_banner() {
        let failure = SubmissionFailure::new("upstream timed out");
        assert_eq!(failure.reason(), "upstream timed out");
        assert!(!GENERIC_FAILURE_MESSAGE.contains("upstream"));
    }
}
