// src/mailer.rs

use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::AppConfig;

const BREVO_ENDPOINT: &str = "https://api.brevo.com/v3/smtp/email";

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("API error: {0}")]
    ApiError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

pub trait Mailer: Send + Sync {
    fn send(&self, mail: &OutgoingMail) -> Result<(), MailerError>;
}

pub fn verification_mail(
    recipient: &str,
    absolute_link: &str,
    valid_for_secs: i64,
) -> OutgoingMail {
    let valid_for = describe_duration(valid_for_secs);
    OutgoingMail {
        to: recipient.to_string(),
        subject: "Confirm your email address".to_string(),
        html: format!(
            r#"
            <h1>Confirm your email</h1>
            <p>Click the link below to verify your email and sign in. This link expires in {valid_for}.</p>
            <p><a href="{absolute_link}">Verify my email</a></p>
            <p>If you did not request this, you can safely ignore this email.</p>
        "#
        ),
    }
}

/// "15 minutes", "1 hour", "2 days". Rounds down to the largest whole unit.
fn describe_duration(secs: i64) -> String {
    let (n, unit) = match secs.max(0) {
        s if s >= 86_400 => (s / 86_400, "day"),
        s if s >= 3_600 => (s / 3_600, "hour"),
        s if s >= 60 => (s / 60, "minute"),
        s => (s, "second"),
    };
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

pub fn contact_notification(
    inbox: &str,
    name: &str,
    email: &str,
    subject: Option<&str>,
    message: &str,
) -> OutgoingMail {
    OutgoingMail {
        to: inbox.to_string(),
        subject: format!("Contact form: {}", subject.unwrap_or("(no subject)")),
        html: format!(
            "<p><strong>{}</strong> &lt;{}&gt; wrote:</p><p>{}</p>",
            esc(name),
            esc(email),
            esc(message),
        ),
    }
}

fn esc(text: &str) -> String {
    maud::html! { (text) }.into_string()
}

pub struct BrevoMailer {
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
    html_content: &'a str,
}

impl BrevoMailer {
    pub fn new(
        api_key: String,
        sender_email: String,
        sender_name: String,
    ) -> Result<Self, MailerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        Ok(Self {
            api_key,
            sender_email,
            sender_name,
            client,
        })
    }
}

impl Mailer for BrevoMailer {
    fn send(&self, mail: &OutgoingMail) -> Result<(), MailerError> {
        let payload = BrevoPayload {
            sender: BrevoSender {
                name: &self.sender_name,
                email: &self.sender_email,
            },
            to: vec![BrevoRecipient { email: &mail.to }],
            subject: &mail.subject,
            html_content: &mail.html,
        };

        let resp = self
            .client
            .post(BREVO_ENDPOINT)
            .header("api-key", &self.api_key)
            .json(&payload)
            .send()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_body = resp.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MailerError::ApiError(format!("{status}: {error_body}")));
        }

        tracing::info!(to = %mail.to, subject = %mail.subject, "mail sent");
        Ok(())
    }
}

/// Development mailer: writes the mail to the log instead of sending it.
#[derive(Debug, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, mail: &OutgoingMail) -> Result<(), MailerError> {
        tracing::info!(to = %mail.to, subject = %mail.subject, body = %mail.html, "mail (not sent)");
        Ok(())
    }
}

/// Brevo when an API key is configured, otherwise the log.
pub fn mailer_from_config(cfg: &AppConfig) -> Box<dyn Mailer> {
    let Some(key) = cfg.brevo_api_key.clone() else {
        tracing::warn!("BREVO_API_KEY not set, mail will only be logged");
        return Box::new(LogMailer);
    };

    match BrevoMailer::new(
        key,
        cfg.mail_sender_email.clone(),
        cfg.mail_sender_name.clone(),
    ) {
        Ok(m) => Box::new(m),
        Err(e) => {
            tracing::error!("Brevo client init failed: {e}, falling back to log mailer");
            Box::new(LogMailer)
        }
    }
}
