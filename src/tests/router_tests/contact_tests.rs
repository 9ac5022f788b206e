use crate::db::contact::count_contact_messages;
use crate::tests::utils::{body_string, test_app, test_app_with_failing_mail};

const VALID_FORM: &str =
    "name=Ada&email=ada%40example.com&subject=Viewing&message=Can+I+see+the+villa+on+Saturday%3F";

#[test]
fn valid_message_is_sent_and_form_resets() {
    let app = test_app("contact_ok");
    let resp = app.post_form("/contact", VALID_FORM, None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("your message is on its way"));
    assert!(!body.contains(r#"value="Ada""#));

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, app.state.config.contact_inbox);
    assert!(sent[0].html.contains("Can I see the villa on Saturday?"));

    let stored = app.state.db.with_conn(|conn| count_contact_messages(conn)).unwrap();
    assert_eq!(stored, 1);
}

#[test]
fn invalid_message_shows_field_errors_and_keeps_input() {
    let app = test_app("contact_invalid");
    let body = body_string(app.post_form(
        "/contact",
        "name=Ada&email=not-an-email&message=hi",
        None,
    ));

    assert!(body.contains("Please fix the highlighted fields."));
    assert!(body.contains("Please enter a valid email address."));
    assert!(body.contains("at least 10 characters"));
    assert!(body.contains(r#"value="Ada""#));
    assert!(body.contains(r#"value="not-an-email""#));
    assert!(app.mailer.sent().is_empty());
}

#[test]
fn mail_failure_offers_retry_with_input_kept() {
    let app = test_app_with_failing_mail("contact_fail");
    let resp = app.post_form("/contact", VALID_FORM, None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("send your message right now"));
    assert!(body.contains("Try again"));
    assert!(body.contains(r#"value="Ada""#));
    assert!(body.contains("Can I see the villa on Saturday?"));
}
