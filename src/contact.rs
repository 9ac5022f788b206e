// src/contact.rs
use rusqlite::Connection;

use crate::db::contact::insert_contact_message;
use crate::domain::contact::{ContactForm, SubmissionState, ValidContact};
use crate::errors::ServerError;
use crate::mailer::{contact_notification, Mailer};

pub const SUBMIT_FAILED_MESSAGE: &str =
    "We couldn't send your message right now. Your text is still below, please try again.";

/// Validate, store and forward one contact submission.
///
/// Validation problems come back as `Invalid`. Storage or mail failures are logged
/// and collapse into `Failed` so the page can offer the same form again.
pub fn submit_contact(
    conn: &Connection,
    mailer: &dyn Mailer,
    inbox: &str,
    form: &ContactForm,
    now: i64,
) -> SubmissionState {
    let msg = match form.validate() {
        Ok(msg) => msg,
        Err(errors) => return SubmissionState::Invalid(errors),
    };

    match deliver(conn, mailer, inbox, &msg, now) {
        Ok(id) => {
            tracing::info!(id, "contact message received");
            SubmissionState::Sent
        }
        Err(e) => {
            tracing::error!(error = %e, "contact submission failed");
            SubmissionState::Failed(SUBMIT_FAILED_MESSAGE.to_string())
        }
    }
}

fn deliver(
    conn: &Connection,
    mailer: &dyn Mailer,
    inbox: &str,
    msg: &ValidContact,
    now: i64,
) -> Result<i64, ServerError> {
    let id = insert_contact_message(conn, msg, now)?;

    let mail = contact_notification(
        inbox,
        &msg.name,
        &msg.email,
        msg.subject.as_deref(),
        &msg.message,
    );
    mailer
        .send(&mail)
        .map_err(|e| ServerError::Mail(e.to_string()))?;

    Ok(id)
}
