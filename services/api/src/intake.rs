//! Intake submission outcome
//!
//! A stored record is never rolled back because of mail trouble: the two
//! notifications are attempted independently after the insert and their
//! combined outcome is reported as `emailEnviado`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use tracing::{error, warn};

use crate::{
    mailer::{Delivery, Mailer, Recipient, Relay},
    templates::EmailContent,
};

/// Stored record plus notification outcome
#[derive(Debug)]
pub struct IntakeReceipt<T> {
    pub inscricao: T,
    pub email_enviado: bool,
}

impl<T: Serialize> IntoResponse for IntakeReceipt<T> {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": true,
            "inscricao": self.inscricao,
            "emailEnviado": self.email_enviado,
        }));

        (StatusCode::OK, body).into_response()
    }
}

/// Send the staff notification and the submitter confirmation
///
/// Returns true only if both were delivered.
pub async fn notify(
    mailer: &Mailer,
    submitter: &str,
    staff: EmailContent,
    confirmation: EmailContent,
) -> bool {
    let staff_sent = deliver(mailer, Recipient::Staff, &staff).await;
    let confirmation_sent =
        deliver(mailer, Recipient::Address(submitter.to_string()), &confirmation).await;

    staff_sent && confirmation_sent
}

async fn deliver(mailer: &Mailer, recipient: Recipient, content: &EmailContent) -> bool {
    match mailer.send(Relay::Intake, recipient, content).await {
        Ok(Delivery::Sent) => true,
        Ok(Delivery::Skipped) => false,
        Err(err) => {
            error!(subject = %content.subject, "Failed to send intake email: {:#}", err);
            false
        }
    }
}

/// Log the outcome once per submission
pub fn log_outcome(campaign: &str, email_enviado: bool) {
    if !email_enviado {
        warn!(campaign, "Intake stored but notifications were not delivered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailer::{MailConfig, SmtpRelay, TlsMode};
    use axum::body::to_bytes;

    fn unconfigured_mailer() -> Mailer {
        let relay = SmtpRelay {
            host: "localhost".to_string(),
            port: 25,
            tls: TlsMode::None,
            username: None,
            password: None,
            from: None,
            staff: None,
        };
        Mailer::new(MailConfig {
            intake: relay.clone(),
            contact: relay,
        })
    }

    fn content(subject: &str) -> EmailContent {
        EmailContent {
            subject: subject.to_string(),
            body: "corpo".to_string(),
        }
    }

    #[tokio::test]
    async fn test_skipped_delivery_is_not_sent() {
        let sent = notify(
            &unconfigured_mailer(),
            "ana@example.com",
            content("staff"),
            content("confirmação"),
        )
        .await;
        assert!(!sent);
    }

    #[tokio::test]
    async fn test_receipt_envelope() {
        let receipt = IntakeReceipt {
            inscricao: json!({"id": "abc"}),
            email_enviado: false,
        };

        let response = receipt.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["inscricao"]["id"], "abc");
        assert_eq!(body["emailEnviado"], false);
    }
}
