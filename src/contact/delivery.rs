//! Forwarding submissions to the external forms endpoint.
//!
//! Delivery is fire-and-forget from the visitor's point of view: whatever the
//! endpoint does, the wizard moves to its thank-you step. Failures are logged
//! for operators and never shown to the visitor.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{error, info, warn};
use url::Url;
use uuid::Uuid;

use super::ContactError;
use super::flow::{ContactFlow, ContactStep};
use super::submission::ContactSubmission;

/// Destination for encoded contact submissions.
#[async_trait]
pub trait FormSink: Send + Sync {
    /// Forward a form-encoded body.
    async fn forward(&self, body: String) -> Result<(), ContactError>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// Posts submissions to an HTTP forms endpoint.
#[derive(Debug, Clone)]
pub struct HttpFormSink {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpFormSink {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, ContactError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl FormSink for HttpFormSink {
    async fn forward(&self, body: String) -> Result<(), ContactError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ContactError::Rejected(status))
        }
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}

/// Used when no endpoint is configured: the submission is only logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOnlySink;

#[async_trait]
impl FormSink for LogOnlySink {
    async fn forward(&self, body: String) -> Result<(), ContactError> {
        info!(
            name: "contact.logged",
            bytes = body.len(),
            "No forms endpoint configured; submission logged only"
        );
        Ok(())
    }

    fn describe(&self) -> String {
        "log-only".to_string()
    }
}

/// Forward a validated submission and advance the flow to [`ContactStep::Sent`].
///
/// The returned step is `Sent` whether or not the endpoint accepted the
/// submission. Honeypot submissions are dropped without contacting the sink.
pub async fn deliver(
    sink: &dyn FormSink,
    flow: &mut ContactFlow,
    submission: &ContactSubmission,
) -> ContactStep {
    let submission_id = Uuid::new_v4();

    if submission.is_spam() {
        warn!(
            name: "contact.honeypot",
            %submission_id,
            "Honeypot field filled; dropping submission"
        );
    } else {
        info!(
            name: "contact.submitted",
            %submission_id,
            inquiry = %submission.inquiry_type,
            sink = %sink.describe(),
            "Forwarding contact submission"
        );

        match sink.forward(submission.encode()).await {
            Ok(()) => info!(name: "contact.forwarded", %submission_id, "Submission forwarded"),
            Err(e) => error!(
                name: "contact.forward_failed",
                %submission_id,
                error = %e,
                "Form submit failed"
            ),
        }
    }

    if !flow.mark_sent() {
        warn!(
            name: "contact.flow.unexpected",
            step = ?flow.step(),
            "Submission arrived outside the details step"
        );
    }
    ContactStep::Sent
}
