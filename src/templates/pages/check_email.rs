use maud::{html, Markup};

/// Partial swapped in place of the sign-in form after a link was sent.
pub fn check_email_content(email: &str) -> Markup {
    html! {
        div class="check-email fade-in" {
            h3 { "Check your email" }

            p {
                "We sent a sign-in link to "
                strong { (email) }
                "."
            }
            p class="muted" {
                "Click the link in the email to verify your address and sign in."
            }

            a href="/login" { "Try with a different email" }
        }
    }
}
