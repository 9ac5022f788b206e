// src/db/auth.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::ServerError;

#[derive(Debug, Clone)]
pub struct VerificationTokenRow {
    pub id: i64,
    pub user_id: i64,
    pub expires_at: i64,
    pub used_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub email_verified_at: Option<i64>,
    pub last_login_at: Option<i64>,
}

/// Insert a user if they don't exist, then return the user id.
/// Email should already be normalized by caller (trim/lowercase).
pub fn get_or_create_user(conn: &Connection, email: &str, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        "insert or ignore into users (email, created_at) values (?, ?)",
        params![email, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;

    conn.query_row(
        "select id from users where email = ?",
        params![email],
        |row| row.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("select user id failed: {e}")))
}

pub fn find_user(conn: &Connection, user_id: i64) -> Result<Option<UserRow>, ServerError> {
    conn.query_row(
        "select id, email, email_verified_at, last_login_at from users where id = ?",
        params![user_id],
        |r| {
            Ok(UserRow {
                id: r.get(0)?,
                email: r.get(1)?,
                email_verified_at: r.get(2)?,
                last_login_at: r.get(3)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select user failed: {e}")))
}

/// Stamp a successful verification. `email_verified_at` keeps its first value.
pub fn mark_verified(conn: &Connection, user_id: i64, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update users
         set email_verified_at = coalesce(email_verified_at, ?1),
             last_login_at = ?1
         where id = ?2",
        params![now, user_id],
    )
    .map_err(|e| ServerError::DbError(format!("mark verified failed: {e}")))?;
    Ok(())
}

/// Insert a verification token row (token_hash should be SHA-256 bytes).
pub fn insert_verification_token(
    conn: &Connection,
    user_id: i64,
    token_hash: &[u8],
    created_at: i64,
    expires_at: i64,
) -> Result<(), ServerError> {
    conn.execute(
        "insert into verification_tokens (user_id, token_hash, created_at, expires_at)
         values (?, ?, ?, ?)",
        params![user_id, token_hash, created_at, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("insert verification token failed: {e}")))?;
    Ok(())
}

fn select_token(
    conn: &Connection,
    token_hash: &[u8],
) -> Result<Option<VerificationTokenRow>, ServerError> {
    conn.query_row(
        "select id, user_id, expires_at, used_at
         from verification_tokens
         where token_hash = ?",
        params![token_hash],
        |r| {
            Ok(VerificationTokenRow {
                id: r.get(0)?,
                user_id: r.get(1)?,
                expires_at: r.get(2)?,
                used_at: r.get(3)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select verification token failed: {e}")))
}

#[cfg(test)]
pub fn find_token_by_hash(
    conn: &Connection,
    token_hash: &[u8],
) -> Result<Option<VerificationTokenRow>, ServerError> {
    select_token(conn, token_hash)
}

/// Consume a verification token hash:
/// - must exist
/// - must be unexpired (expires_at > now)
/// - must be unused (used_at is null)
/// If valid, sets used_at=now and returns Some(user_id). Otherwise returns Ok(None).
pub fn consume_verification_token(
    conn: &mut Connection,
    token_hash: &[u8],
    now: i64,
) -> Result<Option<i64>, ServerError> {
    let tx = conn
        .transaction()
        .map_err(|e| ServerError::DbError(format!("begin tx failed: {e}")))?;

    let Some(row) = select_token(&tx, token_hash)? else {
        return Ok(None);
    };

    if row.used_at.is_some() || row.expires_at <= now {
        tracing::debug!(token_id = row.id, "verification token used or expired");
        return Ok(None);
    }

    // Guard on used_at so only one consumer wins.
    let updated = tx
        .execute(
            "update verification_tokens set used_at = ? where id = ? and used_at is null",
            params![now, row.id],
        )
        .map_err(|e| ServerError::DbError(format!("update token used_at failed: {e}")))?;

    if updated != 1 {
        return Ok(None);
    }

    tx.commit()
        .map_err(|e| ServerError::DbError(format!("commit tx failed: {e}")))?;

    Ok(Some(row.user_id))
}
