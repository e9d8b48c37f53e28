use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client as HttpClient;

use shared::ContactForm;

lazy_static! {
    // local-part@domain.tld, the same shape the original form enforced.
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").unwrap();
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("webhook returned {0}")]
    Webhook(reqwest::StatusCode),
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks the form locally. A failure here must block submission before
/// any network traffic; the returned string is the user-facing warning.
pub fn validate_form(form: &ContactForm) -> Result<(), String> {
    if form.name.trim().is_empty() {
        return Err("Please provide your name.".into());
    }
    if form.email.trim().is_empty() {
        return Err("Please provide your email address.".into());
    }
    if !is_valid_email(&form.email) {
        return Err("Please provide a valid email address.".into());
    }
    if form.message.trim().is_empty() {
        return Err("Please provide a message.".into());
    }
    Ok(())
}

/// Forwards validated submissions to the configured webhook.
pub struct ContactClient {
    http_client: HttpClient,
    webhook_url: String,
}

impl ContactClient {
    pub fn new(webhook_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            webhook_url,
        }
    }

    pub async fn submit(&self, form: &ContactForm) -> Result<(), ContactError> {
        let response = self
            .http_client
            .post(&self.webhook_url)
            .json(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContactError::Webhook(status));
        }
        Ok(())
    }
}
