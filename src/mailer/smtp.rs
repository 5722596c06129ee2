use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor, message::Mailbox,
    transport::smtp::authentication::Credentials,
};

use crate::config::MailConfig;

use super::{DispatchError, Mailer, OutgoingEmail, compose};

pub struct SmtpDispatcher {
    host: String,
    port: u16,
    credentials: Credentials,
    sender: Mailbox,
    receiver: Mailbox,
}

impl SmtpDispatcher {
    /// Sender and receiver are parsed once here so a bad address fails at
    /// startup rather than on the first request.
    pub fn new(config: MailConfig) -> Result<Self, DispatchError> {
        Ok(Self {
            sender: config.sender.parse()?,
            receiver: config.receiver.parse()?,
            credentials: Credentials::new(config.username, config.password),
            host: config.host,
            port: config.port,
        })
    }

    /// Connects, upgrades with STARTTLS, authenticates, sends and quits.
    ///
    /// The transport lives only for this call. Built without a connection
    /// pool, lettre closes the session after every send and on every error.
    async fn dispatch(&self, message: Message) -> Result<(), DispatchError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)?
            .port(self.port)
            .credentials(self.credentials.clone())
            .build();

        tracing::debug!("Opening SMTP session to {}:{}", self.host, self.port);

        transport.send(message).await?;

        Ok(())
    }
}

#[async_trait]
impl Mailer for SmtpDispatcher {
    async fn send(&self, email: OutgoingEmail) -> Result<(), DispatchError> {
        let message = compose(&email, &self.sender, &self.receiver)?;

        tracing::info!(
            "Sending email to '{}' with subject '{}'",
            self.receiver,
            email.subject
        );

        self.dispatch(message).await?;

        tracing::info!("Message to {} sent successfully", self.receiver);

        Ok(())
    }
}
