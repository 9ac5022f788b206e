use crate::errors::ServerError;
use crate::tests::utils::{
    body_string, header, test_app, test_app_with_config, test_app_with_failing_mail, TestApp,
};

/// Ask for a link and pull the raw token out of the recorded mail.
fn request_token(app: &TestApp, email: &str) -> String {
    let resp = app.post_form("/auth/request-link", &format!("email={email}"), None);
    assert_eq!(resp.status(), 200);

    let sent = app.mailer.sent();
    let html = &sent.last().expect("verification mail").html;
    let start = html.find("token=").expect("token in link") + "token=".len();
    html[start..]
        .split('"')
        .next()
        .unwrap_or_default()
        .to_string()
}

#[test]
fn login_page_loads_successfully() {
    let app = test_app("login_page");
    let resp = app.get("/login", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains(r#"action="/auth/request-link""#));
}

#[test]
fn request_link_returns_partial_html_for_htmx() {
    let app = test_app("request_link");
    let resp = app.post_form("/auth/request-link", "email=Test%40Example.com", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Check your email"));
    assert!(body.contains("test@example.com"));
    // Partial only, so htmx can swap it in.
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "test@example.com");
    assert!(sent[0].html.contains("http://test.local/verify-email?token="));
}

#[test]
fn verification_mail_states_the_configured_lifetime() {
    let app = test_app_with_config("request_link_ttl", |c| c.verify_ttl_secs = 2 * 3600);
    app.post_form("/auth/request-link", "email=ttl%40example.com", None);

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].html.contains("expires in 2 hours."));

    let default_app = test_app("request_link_default_ttl");
    default_app.post_form("/auth/request-link", "email=ttl%40example.com", None);
    assert!(default_app.mailer.sent()[0]
        .html
        .contains("expires in 15 minutes."));
}

#[test]
fn request_link_rejects_bad_email() {
    let app = test_app("request_link_bad");
    let body = body_string(app.post_form("/auth/request-link", "email=nobody", None));

    assert!(body.contains("Please enter a valid email address."));
    assert!(app.mailer.sent().is_empty());
}

#[test]
fn request_link_reports_mail_failure() {
    let app = test_app_with_failing_mail("request_link_fail");
    let body = body_string(app.post_form("/auth/request-link", "email=a%40b.com", None));

    assert!(body.contains("Please try again in a moment."));
    assert!(!body.contains("Check your email"));
}

#[test]
fn verify_sign_in_and_sign_out() {
    let app = test_app("full_flow");
    let token = request_token(&app, "flow%40example.com");

    // Verifying signs in: cookie set and navbar already shows the account.
    let resp = app.get(&format!("/verify-email?token={token}"), None);
    assert_eq!(resp.status(), 200);
    let set_cookie = header(&resp, "Set-Cookie");
    assert!(set_cookie.starts_with("session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));

    let body = body_string(resp);
    assert!(body.contains("flow@example.com is verified."));
    assert!(body.contains("Sign out"));

    let verified: Option<i64> = app
        .state
        .db
        .with_conn(|conn| {
            conn.query_row(
                "select email_verified_at from users where email = ?",
                ["flow@example.com"],
                |r| r.get(0),
            )
            .map_err(ServerError::from)
        })
        .unwrap();
    assert!(verified.is_some());

    let cookie = set_cookie.split(';').next().unwrap().to_string();

    let body = body_string(app.get("/", Some(&cookie)));
    assert!(body.contains("flow@example.com"));
    assert!(body.contains("Sign out"));

    let resp = app.post_form("/logout", "", Some(&cookie));
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/");
    assert!(header(&resp, "Set-Cookie").contains("Max-Age=0"));

    // The old cookie no longer resolves to anyone.
    let body = body_string(app.get("/", Some(&cookie)));
    assert!(!body.contains("flow@example.com"));
    assert!(body.contains(r#"href="/login""#));
}

#[test]
fn verification_link_is_single_use() {
    let app = test_app("single_use");
    let token = request_token(&app, "once%40example.com");

    assert_eq!(
        app.get(&format!("/verify-email?token={token}"), None).status(),
        200
    );

    let resp = app.get(&format!("/verify-email?token={token}"), None);
    assert_eq!(resp.status(), 401);
    assert!(header(&resp, "Set-Cookie").is_empty());

    let body = body_string(resp);
    assert!(body.contains("invalid, already used, or expired"));
    // Retry: a fresh request form right on the page.
    assert!(body.contains(r#"action="/auth/request-link""#));
}

#[test]
fn verification_without_token_is_bad_request() {
    let app = test_app("no_token");
    let resp = app.get("/verify-email", None);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("missing its token"));
}

#[test]
fn unknown_session_cookie_is_anonymous() {
    let app = test_app("bogus_cookie");
    let body = body_string(app.get("/", Some("session=not-a-real-token")));
    assert!(!body.contains("Sign out"));
    assert!(body.contains(r#"href="/login""#));
}
