use crate::contact::NewContact;

use super::{EmailMessage, MailIdentity};

pub const SUBJECT: &str = "New contact received";

/// Compose the admin notification for a new contact.
///
/// Field values are interpolated verbatim into both bodies, HTML included.
pub fn contact_notification(identity: &MailIdentity, contact: &NewContact) -> EmailMessage {
    let NewContact {
        name,
        email,
        phone,
        message,
        ..
    } = contact;

    let text = format!(
        "Dear admin,\n\nWe received a new contact.\n\nDetails are as below\n\
         Name:{name},\nEmail: {email},\nPhone no:{phone},\nMessage:{message}\n\n \
         Thankyou from Portfolio project"
    );
    let html = format!(
        "<p>Dear admin,</p><p>We received a new contact. Details are as below.</p>\
         <p>Name:{name},<br>Email: {email}<br>Phone no:{phone}<br>Message:{message}<br><br>\
         Thankyou from Portfolio project</p>"
    );

    EmailMessage {
        from: identity.from.clone(),
        to: identity.to.clone(),
        subject: SUBJECT.to_string(),
        text,
        html,
    }
}
