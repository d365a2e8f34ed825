// src/mailer.rs

use reqwest::blocking::Client;
use serde::Serialize;
use std::error::Error;
use std::fmt;
use tracing::info;

#[derive(Debug)]
pub enum MailerError {
    RequestFailed(String),
    ApiError(String),
}

impl fmt::Display for MailerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailerError::RequestFailed(msg) => write!(f, "Request failed: {msg}"),
            MailerError::ApiError(msg) => write!(f, "API error: {msg}"),
        }
    }
}

impl Error for MailerError {}

pub struct Mailer {
    api_key: String,
    sender_email: String,
    sender_name: String,
    client: Client,
}

#[derive(Serialize)]
struct BrevoSender<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct BrevoRecipient<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoPayload<'a> {
    sender: BrevoSender<'a>,
    to: Vec<BrevoRecipient<'a>>,
    subject: &'a str,
    html_content: String,
}

impl Mailer {
    pub fn new(api_key: String, sender_email: String, sender_name: String) -> Self {
        Self {
            api_key,
            sender_email,
            sender_name,
            client: Client::new(),
        }
    }

    /// One transactional send. Pipeline callers treat a returned error
    /// as log-and-continue; nothing downstream of a send depends on it.
    pub fn send_html(
        &self,
        recipients: &[String],
        subject: &str,
        html_content: String,
    ) -> Result<(), MailerError> {
        let payload = BrevoPayload {
            sender: BrevoSender {
                name: &self.sender_name,
                email: &self.sender_email,
            },
            to: recipients
                .iter()
                .map(|email| BrevoRecipient { email })
                .collect(),
            subject,
            html_content,
        };

        let resp = self
            .client
            .post("https://api.brevo.com/v3/smtp/email")
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let error_body = resp.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MailerError::ApiError(format!(
                "Failed to send email: {error_body}"
            )));
        }

        info!("email sent: {subject}");
        Ok(())
    }
}
