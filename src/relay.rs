//! Forwarding of accepted contact messages to the site owner

use crate::config::EmailConfig;
use folio_contact::FormFields;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("unable to build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
    #[error("relay task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Clone)]
struct Mailer {
    transport: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

/// Hands accepted messages on. Without a mailer every message is only logged.
#[derive(Clone, Default)]
pub struct ContactRelay {
    mailer: Option<Mailer>,
}

impl ContactRelay {
    pub fn new(config: &EmailConfig) -> Result<Self, RelayError> {
        if !config.enabled {
            info!("Email relay disabled, contact messages will only be logged");
            return Ok(Self::default());
        }

        let transport = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                to = %config.to_email,
                "Email relay initialized with authentication and TLS"
            );
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());
            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer: Some(Mailer {
                transport,
                from: config.from_email.parse()?,
                to: config.to_email.parse()?,
            }),
        })
    }

    /// Log-only relay, for tests and local runs
    pub fn log_only() -> Self {
        Self::default()
    }

    pub fn is_mailing(&self) -> bool {
        self.mailer.is_some()
    }

    pub async fn deliver(&self, fields: &FormFields) -> Result<(), RelayError> {
        info!(
            name = %fields.name,
            email = %fields.email,
            subject = %fields.subject,
            "Contact message received"
        );

        let Some(mailer) = self.mailer.clone() else {
            return Ok(());
        };

        let subject = if fields.subject.trim().is_empty() {
            "(no subject)"
        } else {
            fields.subject.trim()
        };

        let mut builder = Message::builder()
            .from(mailer.from.clone())
            .to(mailer.to.clone())
            .subject(format!("Portfolio Contact: {subject}"))
            .header(ContentType::TEXT_PLAIN);

        // The sender's address is unchecked input; only use it when it parses.
        if let Ok(reply_to) = fields.email.parse::<Mailbox>() {
            builder = builder.reply_to(reply_to);
        }

        let email = builder.body(format!(
            "From: {}\nEmail: {}\n\nMessage:\n{}\n",
            fields.name, fields.email, fields.message
        ))?;

        let transport = mailer.transport.clone();
        match tokio::task::spawn_blocking(move || transport.send(&email)).await? {
            Ok(_) => {
                info!(to = %mailer.to, "Contact message relayed");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, to = %mailer.to, "Failed to relay contact message via SMTP");
                Err(e.into())
            }
        }
    }
}
