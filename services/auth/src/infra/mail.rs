use anyhow::Context as _;
use serde::Serialize;

use crate::domain::repository::MailTransport;

#[derive(Serialize)]
struct MailMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    body: &'a str,
}

/// Mail relay client: posts `{from, to, subject, body}` JSON to the
/// configured endpoint with a bearer key.
#[derive(Clone)]
pub struct HttpMailTransport {
    pub client: reqwest::Client,
    pub api_url: String,
    pub api_key: String,
    pub from: String,
}

impl MailTransport for HttpMailTransport {
    async fn send(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        let message = MailMessage {
            from: &self.from,
            to,
            subject,
            body,
        };
        self.client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&message)
            .send()
            .await
            .context("mail relay request")?
            .error_for_status()
            .context("mail relay response")?;
        Ok(())
    }
}
