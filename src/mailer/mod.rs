mod compose;
mod smtp;
#[cfg(test)]
pub mod testing;

pub use compose::compose;
pub use smtp::SmtpDispatcher;

use async_trait::async_trait;

/// Subject and plain-text body of a single relayed email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub subject: String,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Only raised while building the dispatcher at startup.
    #[error("Invalid email address format: {0}")]
    AddressFormat(#[from] lettre::address::AddressError),

    #[error("Error: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Delivers an email to the configured receiver.
///
/// The whole delivery either succeeds or fails; there is no partial state
/// and no retry.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), DispatchError>;
}
