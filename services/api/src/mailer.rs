//! Outbound email over SMTP
//!
//! Two relays serve two message classes: intake notifications go through the
//! intake relay, contact-form messages through the contact relay. A relay
//! without a sender address is considered unconfigured and deliveries through
//! it are skipped with a warning.

use std::{env, sync::Arc};

use anyhow::Result;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::{info, warn};

use crate::templates::EmailContent;

const SENDER_NAME: &str = "Projeto Mais Vida";

/// How the connection to the relay is secured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// TLS from the first byte (port 465)
    Implicit,
    /// Plain connection upgraded with STARTTLS (port 587)
    StartTls,
    /// No TLS; local development relays only
    None,
}

impl TlsMode {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "implicit" | "tls" => Some(TlsMode::Implicit),
            "starttls" => Some(TlsMode::StartTls),
            "none" => Some(TlsMode::None),
            _ => None,
        }
    }
}

/// Settings of one SMTP relay
#[derive(Debug, Clone)]
pub struct SmtpRelay {
    pub host: String,
    pub port: u16,
    pub tls: TlsMode,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Sender address; defaults to the username
    pub from: Option<String>,
    /// Staff inbox; defaults to the sender address
    pub staff: Option<String>,
}

impl SmtpRelay {
    /// Read `{prefix}_HOST`, `_PORT`, `_TLS`, `_USERNAME`, `_PASSWORD`,
    /// `_FROM` and `_STAFF`
    fn from_env(prefix: &str, default_host: &str, default_port: u16, default_tls: TlsMode) -> Self {
        let var = |name: &str| {
            env::var(format!("{}_{}", prefix, name))
                .ok()
                .filter(|v| !v.trim().is_empty())
        };

        Self {
            host: var("HOST").unwrap_or_else(|| default_host.to_string()),
            port: var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(default_port),
            tls: var("TLS")
                .and_then(|t| TlsMode::parse(&t))
                .unwrap_or(default_tls),
            username: var("USERNAME"),
            password: var("PASSWORD"),
            from: var("FROM"),
            staff: var("STAFF"),
        }
    }

    pub fn from_address(&self) -> Option<&str> {
        self.from.as_deref().or(self.username.as_deref())
    }

    pub fn staff_address(&self) -> Option<&str> {
        self.staff.as_deref().or(self.from_address())
    }

    pub fn is_configured(&self) -> bool {
        self.from_address().is_some()
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
        let builder = match self.tls {
            TlsMode::Implicit => AsyncSmtpTransport::<Tokio1Executor>::relay(&self.host)?,
            TlsMode::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)?,
            TlsMode::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.host),
        }
        .port(self.port);

        let builder = if let (Some(username), Some(password)) = (&self.username, &self.password) {
            builder.credentials(Credentials::new(username.clone(), password.clone()))
        } else {
            builder
        };

        Ok(builder.build())
    }
}

/// Configuration for both relays
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub intake: SmtpRelay,
    pub contact: SmtpRelay,
}

impl MailConfig {
    /// Create a new MailConfig from environment variables
    ///
    /// # Environment Variables
    /// - `SMTP_INTAKE_*`: intake relay (default: smtp.hostinger.com:465, implicit TLS)
    /// - `SMTP_CONTACT_*`: contact relay (default: smtp.gmail.com:587, STARTTLS)
    pub fn from_env() -> Self {
        Self {
            intake: SmtpRelay::from_env("SMTP_INTAKE", "smtp.hostinger.com", 465, TlsMode::Implicit),
            contact: SmtpRelay::from_env("SMTP_CONTACT", "smtp.gmail.com", 587, TlsMode::StartTls),
        }
    }
}

/// Which relay a message goes through
#[derive(Debug, Clone, Copy)]
pub enum Relay {
    Intake,
    Contact,
}

/// Destination of a message
#[derive(Debug, Clone)]
pub enum Recipient {
    /// The relay's staff inbox
    Staff,
    Address(String),
}

/// Outcome of a send that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// The relay is not configured
    Skipped,
}

/// Notification dispatcher
#[derive(Clone)]
pub struct Mailer {
    config: Arc<MailConfig>,
}

impl Mailer {
    pub fn new(config: MailConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    fn relay(&self, relay: Relay) -> &SmtpRelay {
        match relay {
            Relay::Intake => &self.config.intake,
            Relay::Contact => &self.config.contact,
        }
    }

    /// Send a plain-text email
    pub async fn send(
        &self,
        relay: Relay,
        recipient: Recipient,
        content: &EmailContent,
    ) -> Result<Delivery> {
        let smtp = self.relay(relay);

        let Some(from_address) = smtp.from_address() else {
            warn!(
                ?relay,
                subject = %content.subject,
                "SMTP relay not configured, skipping email"
            );
            return Ok(Delivery::Skipped);
        };

        let to_address = match recipient {
            Recipient::Staff => smtp
                .staff_address()
                .ok_or_else(|| anyhow::anyhow!("Staff address not configured"))?
                .to_string(),
            Recipient::Address(address) => address,
        };

        let from: Mailbox = format!("{} <{}>", SENDER_NAME, from_address).parse()?;
        let to: Mailbox = to_address.parse()?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(content.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(content.body.clone())?;

        smtp.transport()?.send(email).await?;

        info!(
            ?relay,
            to = %to_address,
            subject = %content.subject,
            "Email sent successfully"
        );

        Ok(Delivery::Sent)
    }
}
