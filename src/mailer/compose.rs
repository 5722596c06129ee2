use lettre::{
    Message,
    message::{Mailbox, MultiPart, SinglePart},
};

use super::{DispatchError, OutgoingEmail};

/// Builds a `multipart/mixed` message holding a single `text/plain` part.
pub fn compose(
    email: &OutgoingEmail,
    from: &Mailbox,
    to: &Mailbox,
) -> Result<Message, DispatchError> {
    let message = Message::builder()
        .from(from.clone())
        .to(to.clone())
        .subject(email.subject.clone())
        .multipart(MultiPart::mixed().singlepart(SinglePart::plain(email.body.clone())))?;

    Ok(message)
}
