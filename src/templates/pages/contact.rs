use crate::auth::SessionContext;
use crate::domain::contact::{ContactForm, FieldError, SubmissionState, MIN_MESSAGE_LEN};
use crate::templates::components::{alert, field_error, AlertKind};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// The form keeps whatever was typed unless the message went through.
pub fn contact_page(session: &SessionContext, form: &ContactForm, state: &SubmissionState) -> Markup {
    let errors: &[FieldError] = match state {
        SubmissionState::Invalid(errors) => errors.as_slice(),
        _ => &[],
    };
    let blank = ContactForm::default();
    let form = if *state == SubmissionState::Sent { &blank } else { form };

    desktop_layout(
        "Contact",
        session,
        html! {
            div class="narrow" {
                h1 { "Contact us" }
                p class="lead" { "Questions about a listing or a plan? We usually reply within a day." }

                @match state {
                    SubmissionState::Sent => {
                        (alert(AlertKind::Success, "Thanks, your message is on its way. We'll be in touch soon."))
                    }
                    SubmissionState::Failed(msg) => {
                        (alert(AlertKind::Error, msg))
                    }
                    SubmissionState::Invalid(_) => {
                        (alert(AlertKind::Error, "Please fix the highlighted fields."))
                    }
                    SubmissionState::Idle => {}
                }

                form method="post" action="/contact" class="contact-form" {
                    div class="field" {
                        label for="name" { "Name" }
                        input type="text" id="name" name="name" value=(form.name) required;
                        (field_error(errors, "name"))
                    }
                    div class="field" {
                        label for="email" { "Email" }
                        input type="email" id="email" name="email" value=(form.email) required;
                        (field_error(errors, "email"))
                    }
                    div class="field" {
                        label for="subject" { "Subject" }
                        input type="text" id="subject" name="subject" value=(form.subject);
                    }
                    div class="field" {
                        label for="message" { "Message" }
                        textarea id="message" name="message" rows="6" minlength=(MIN_MESSAGE_LEN) required {
                            (form.message)
                        }
                        (field_error(errors, "message"))
                    }
                    div class="actions" {
                        button type="submit" class="primary" {
                            @if matches!(state, SubmissionState::Failed(_)) { "Try again" } @else { "Send message" }
                        }
                    }
                }
            }
        },
    )
}
