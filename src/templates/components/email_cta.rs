use maud::{html, Markup};

/// Sign-in form. The response (check-email partial or error) is swapped into `#auth-result`.
pub fn email_cta_form(email: &str, error: Option<&str>) -> Markup {
    html! {
        div class="email-cta-wrapper" {
            form
                method="post"
                action="/auth/request-link"
                hx-post="/auth/request-link"
                hx-target="#auth-result"
                hx-swap="innerHTML"
                hx-disabled-elt="button"
                class="email-cta"
            {
                label class="sr-only" for="email" { "Email address" }
                input
                    type="email"
                    id="email"
                    name="email"
                    value=(email)
                    placeholder="you@domain.com"
                    autocomplete="email"
                    required;

                button type="submit" class="primary" {
                    span class="btn-text" { "Email me a link" }
                    span class="spinner" aria-hidden="true" {}
                }

                p class="microcopy" {
                    "We'll email you a secure link that verifies your address and signs you in."
                }
            }

            div id="auth-result" {
                @if let Some(error) = error {
                    p class="field-error" { (error) }
                }
            }
        }
    }
}
