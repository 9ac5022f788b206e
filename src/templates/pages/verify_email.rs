use crate::auth::SessionContext;
use crate::templates::components::{alert, email_cta_form, AlertKind};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn verify_success_page(session: &SessionContext, email: &str) -> Markup {
    desktop_layout(
        "Email verified",
        session,
        html! {
            div class="narrow" {
                h1 { "You're signed in" }
                (alert(AlertKind::Success, &format!("{email} is verified.")))
                p { a href="/search" class="button primary" { "Start searching" } }
            }
        },
    )
}

/// Failure state with the retry: request a fresh link right here.
pub fn verify_failed_page(session: &SessionContext, message: &str) -> Markup {
    desktop_layout(
        "Verification failed",
        session,
        html! {
            div class="narrow" {
                h1 { "We couldn't verify that link" }
                (alert(AlertKind::Error, message))
                p { "Links work once and expire after a short while. Request a new one:" }
                (email_cta_form("", None))
            }
        },
    )
}
