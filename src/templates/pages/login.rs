use crate::auth::SessionContext;
use crate::templates::{components::email_cta_form, desktop_layout};
use maud::{html, Markup};

pub fn login_page(session: &SessionContext) -> Markup {
    desktop_layout(
        "Sign in",
        session,
        html! {
            div class="narrow" {
                h1 { "Sign in" }
                @if let Some(user) = session.user() {
                    p class="lead" { "You're signed in as " strong { (user.email) } "." }
                } @else {
                    p class="lead" {
                        "Enter your email and we'll send you a secure sign-in link."
                    }
                    (email_cta_form("", None))
                }
            }
        },
    )
}
