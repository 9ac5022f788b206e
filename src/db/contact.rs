// src/db/contact.rs
use crate::domain::contact::ValidContact;
use crate::errors::ServerError;
use rusqlite::{params, Connection};

pub fn insert_contact_message(
    conn: &Connection,
    msg: &ValidContact,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into contact_messages (name, email, subject, message, created_at)
        values (?, ?, ?, ?, ?)
        "#,
        params![msg.name, msg.email, msg.subject, msg.message, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert contact message failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

#[cfg(test)]
pub fn count_contact_messages(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("select count(*) from contact_messages", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count contact messages failed: {e}")))
}
