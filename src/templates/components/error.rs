use crate::domain::contact::FieldError;
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    fn class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert-success",
            AlertKind::Error => "alert alert-error",
        }
    }
}

pub fn alert(kind: AlertKind, message: &str) -> Markup {
    html! {
        div class=(kind.class()) role=[(kind == AlertKind::Error).then_some("alert")] {
            (message)
        }
    }
}

/// Inline message under a form input, if `field` has an error.
pub fn field_error(errors: &[FieldError], field: &str) -> Markup {
    html! {
        @for err in errors.iter().filter(|e| e.field == field) {
            p class="field-error" { (err.message) }
        }
    }
}
