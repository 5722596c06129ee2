use crate::{
    dto::{BookingRequest, ContactRequest, SendEmailResponse},
    mailer::{DispatchError, Mailer, OutgoingEmail},
};

use std::sync::Arc;

const BOOKING_SUBJECT: &str = "Booking Request for Room";

#[derive(Clone)]
pub struct RelayService {
    mailer: Arc<dyn Mailer>,
}

impl RelayService {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    pub async fn send_booking(
        &self,
        request: BookingRequest,
    ) -> Result<SendEmailResponse, DispatchError> {
        self.mailer.send(booking_email(&request)).await?;

        Ok(SendEmailResponse {
            message: "Booking email sent!".to_string(),
        })
    }

    pub async fn send_contact(
        &self,
        request: ContactRequest,
    ) -> Result<SendEmailResponse, DispatchError> {
        self.mailer.send(contact_email(&request)).await?;

        Ok(SendEmailResponse {
            message: "Contact form email sent!".to_string(),
        })
    }
}

fn booking_email(request: &BookingRequest) -> OutgoingEmail {
    OutgoingEmail {
        subject: BOOKING_SUBJECT.to_string(),
        body: format!(
            "Name: {}\nPhone: {}\nMessage: {}",
            request.name,
            request.phone,
            request.message.as_deref().unwrap_or_default()
        ),
    }
}

fn contact_email(request: &ContactRequest) -> OutgoingEmail {
    OutgoingEmail {
        subject: format!("New query from {}", request.name),
        body: format!(
            "Name: {}\nEmail: {}\nMessage: {}",
            request.name, request.email, request.message
        ),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingMailer;
    use super::*;
    use crate::{
        config::MailConfig,
        mailer::{SmtpDispatcher, testing::spawn_server_without_starttls},
    };

    fn booking(message: Option<&str>) -> BookingRequest {
        BookingRequest {
            name: "Alice".to_string(),
            phone: "555-1234".to_string(),
            message: message.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn booking_uses_fixed_subject_and_line_per_field() {
        let mailer = Arc::new(RecordingMailer::default());
        let service = RelayService::new(mailer.clone());

        let response = service
            .send_booking(booking(Some("Need a room for 2 nights")))
            .await
            .unwrap();

        assert_eq!(response.message, "Booking email sent!");
        assert_eq!(
            mailer.sent(),
            vec![OutgoingEmail {
                subject: "Booking Request for Room".to_string(),
                body: "Name: Alice\nPhone: 555-1234\nMessage: Need a room for 2 nights"
                    .to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn booking_without_message_leaves_line_empty() {
        let mailer = Arc::new(RecordingMailer::default());
        let service = RelayService::new(mailer.clone());

        service.send_booking(booking(None)).await.unwrap();

        assert_eq!(
            mailer.sent()[0].body,
            "Name: Alice\nPhone: 555-1234\nMessage: "
        );
    }

    #[tokio::test]
    async fn contact_subject_names_the_sender() {
        let mailer = Arc::new(RecordingMailer::default());
        let service = RelayService::new(mailer.clone());

        let response = service
            .send_contact(ContactRequest {
                name: "Bob".to_string(),
                email: "bob@x.com".to_string(),
                message: "Hi".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.message, "Contact form email sent!");
        let sent = mailer.sent();
        assert_eq!(sent[0].subject, "New query from Bob");
        assert_eq!(sent[0].body, "Name: Bob\nEmail: bob@x.com\nMessage: Hi");
    }

    #[tokio::test]
    async fn repeated_requests_send_separate_emails() {
        let mailer = Arc::new(RecordingMailer::default());
        let service = RelayService::new(mailer.clone());

        service.send_booking(booking(Some("Twice"))).await.unwrap();
        service.send_booking(booking(Some("Twice"))).await.unwrap();

        assert_eq!(mailer.sent().len(), 2);
    }

    #[tokio::test]
    async fn mailer_failure_is_propagated() {
        let (port, _server) = spawn_server_without_starttls().await;
        let dispatcher = SmtpDispatcher::new(MailConfig {
            host: "127.0.0.1".to_string(),
            port,
            username: "info@example.com".to_string(),
            password: "secret".to_string(),
            sender: "info@example.com".to_string(),
            receiver: "bookings@example.com".to_string(),
        })
        .unwrap();
        let service = RelayService::new(Arc::new(dispatcher));

        let err = service.send_booking(booking(None)).await.unwrap_err();

        assert!(matches!(err, DispatchError::Smtp(_)));
    }
}
