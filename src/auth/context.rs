// src/auth/context.rs
use rusqlite::Connection;

use crate::auth::sessions::{load_user_from_session, SessionUser};
use crate::errors::ServerError;

/// Who is signed in for the current request.
///
/// Built once per request and handed to every page render, so the navbar
/// never has to look the session up on its own. Login and logout update it
/// explicitly through [`SessionContext::refresh`] and [`SessionContext::invalidate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    user: Option<SessionUser>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Unknown, expired or revoked tokens resolve to anonymous.
    pub fn resolve(
        conn: &Connection,
        token: Option<&str>,
        now: i64,
    ) -> Result<Self, ServerError> {
        let Some(token) = token else {
            return Ok(Self::anonymous());
        };
        Ok(Self {
            user: load_user_from_session(conn, token, now)?,
        })
    }

    /// Re-read the identity after a login issued `token`.
    pub fn refresh(&mut self, conn: &Connection, token: &str, now: i64) -> Result<(), ServerError> {
        self.user = load_user_from_session(conn, token, now)?;
        Ok(())
    }

    pub fn invalidate(&mut self) {
        self.user = None;
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sessions::{create_session, revoke_session};
    use crate::db::auth::get_or_create_user;
    use crate::db::auth::tests::memory_conn;

    #[test]
    fn missing_or_unknown_token_is_anonymous() {
        let conn = memory_conn();
        assert!(!SessionContext::resolve(&conn, None, 0).unwrap().is_signed_in());
        assert!(!SessionContext::resolve(&conn, Some("nope"), 0)
            .unwrap()
            .is_signed_in());
    }

    #[test]
    fn refresh_then_invalidate() {
        let conn = memory_conn();
        let uid = get_or_create_user(&conn, "nav@bar.com", 1).unwrap();
        let token = create_session(&conn, uid, 1, 100).unwrap();

        let mut ctx = SessionContext::anonymous();
        ctx.refresh(&conn, &token, 2).unwrap();
        assert_eq!(ctx.user().map(|u| u.email.as_str()), Some("nav@bar.com"));

        revoke_session(&conn, &token, 3).unwrap();
        ctx.invalidate();
        assert!(!ctx.is_signed_in());
        assert!(!SessionContext::resolve(&conn, Some(&token), 4)
            .unwrap()
            .is_signed_in());
    }
}
