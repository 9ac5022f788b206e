// src/auth/verify.rs
use crate::auth::token::{hash_token, new_token};
use crate::db::auth as db_auth;
use crate::domain::contact::looks_like_email;
use crate::errors::ServerError;
use rusqlite::Connection;

#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// TTL for verification links in seconds.
    pub ttl_secs: i64,
    /// Relative path used when building links.
    pub verify_path: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 15 * 60,
            verify_path: "/verify-email".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IssuedLink {
    pub email: String,
    pub user_id: i64,
    pub expires_at: i64,
    /// Relative URL like "/verify-email?token=...". The only copy of the raw token.
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedUser {
    pub user_id: i64,
    pub email: String,
}

/// Email verification doubles as passwordless sign-in: each link is single use.
pub struct EmailVerificationService {
    cfg: VerificationConfig,
}

impl EmailVerificationService {
    pub fn new(cfg: VerificationConfig) -> Self {
        Self { cfg }
    }

    /// Trim + lowercase, minimal sanity check.
    pub fn normalize_email(email: &str) -> Result<String, ServerError> {
        let e = email.trim().to_lowercase();
        if !looks_like_email(&e) {
            return Err(ServerError::BadRequest("invalid email".into()));
        }
        Ok(e)
    }

    pub fn request_link(
        &self,
        conn: &Connection,
        email: &str,
        now: i64,
    ) -> Result<IssuedLink, ServerError> {
        let email = Self::normalize_email(email)?;
        let user_id = db_auth::get_or_create_user(conn, &email, now)?;

        let token = new_token();
        let expires_at = now + self.cfg.ttl_secs;
        db_auth::insert_verification_token(conn, user_id, &hash_token(&token), now, expires_at)?;

        tracing::info!(user_id, expires_at, "verification link issued");

        Ok(IssuedLink {
            link: format!("{}?token={}", self.cfg.verify_path, token),
            email,
            user_id,
            expires_at,
        })
    }

    /// Consume `token` and mark the owner's email verified.
    pub fn verify(
        &self,
        conn: &mut Connection,
        token: &str,
        now: i64,
    ) -> Result<VerifiedUser, ServerError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ServerError::BadRequest("missing token".into()));
        }

        let Some(user_id) = db_auth::consume_verification_token(conn, &hash_token(token), now)?
        else {
            return Err(ServerError::Unauthorized("invalid or expired link".into()));
        };

        db_auth::mark_verified(conn, user_id, now)?;
        let user = db_auth::find_user(conn, user_id)?.ok_or(ServerError::InternalError)?;

        tracing::info!(user_id, "email verified");
        Ok(VerifiedUser {
            user_id,
            email: user.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::auth::tests::memory_conn;

    fn svc(ttl_secs: i64) -> EmailVerificationService {
        EmailVerificationService::new(VerificationConfig {
            ttl_secs,
            ..Default::default()
        })
    }

    fn token_of(issued: &IssuedLink) -> &str {
        issued.link.split("token=").nth(1).unwrap()
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        let e = EmailVerificationService::normalize_email("  Test@Example.COM ").unwrap();
        assert_eq!(e, "test@example.com");
        assert!(EmailVerificationService::normalize_email("no-at-symbol").is_err());
        assert!(EmailVerificationService::normalize_email("@example.com").is_err());
    }

    #[test]
    fn request_link_stores_only_the_hash() {
        let conn = memory_conn();
        let issued = svc(60).request_link(&conn, "User@Example.com", 1000).unwrap();

        assert_eq!(issued.email, "user@example.com");
        assert_eq!(issued.expires_at, 1060);
        assert!(issued.link.starts_with("/verify-email?token="));
        assert_eq!(token_of(&issued).len(), 43);

        let row = db_auth::find_token_by_hash(&conn, &hash_token(token_of(&issued)))
            .unwrap()
            .unwrap();
        assert_eq!(row.user_id, issued.user_id);
    }

    #[test]
    fn verify_succeeds_once_then_fails() {
        let mut conn = memory_conn();
        let service = svc(60);
        let issued = service.request_link(&conn, "a@b.com", 1000).unwrap();

        let verified = service.verify(&mut conn, token_of(&issued), 1001).unwrap();
        assert_eq!(verified.user_id, issued.user_id);
        assert_eq!(verified.email, "a@b.com");

        let user = db_auth::find_user(&conn, issued.user_id).unwrap().unwrap();
        assert_eq!(user.email_verified_at, Some(1001));

        match service.verify(&mut conn, token_of(&issued), 1002) {
            Err(ServerError::Unauthorized(_)) => {}
            other => panic!("expected Unauthorized, got: {:?}", other),
        }
    }

    #[test]
    fn verify_fails_if_expired() {
        let mut conn = memory_conn();
        let service = svc(1);
        let issued = service.request_link(&conn, "x@y.com", 1000).unwrap();

        match service.verify(&mut conn, token_of(&issued), 1002) {
            Err(ServerError::Unauthorized(_)) => {}
            other => panic!("expected Unauthorized, got: {:?}", other),
        }
    }

    #[test]
    fn verify_rejects_missing_token() {
        let mut conn = memory_conn();
        match svc(60).verify(&mut conn, "   ", 1000) {
            Err(ServerError::BadRequest(_)) => {}
            other => panic!("expected BadRequest, got: {:?}", other),
        }
    }
}
