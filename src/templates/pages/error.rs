use crate::auth::SessionContext;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str, session: &SessionContext) -> Markup {
    let title = match status {
        404 => "Page not found",
        400 => "Bad request",
        401 => "Not authorized",
        _ => "Something went wrong",
    };

    desktop_layout(
        title,
        session,
        html! {
            div class="narrow error-page" {
                p class="status-code" { (status) }
                h1 { (title) }
                p { (message) }
                p { a href="/" { "Back to home" } }
            }
        },
    )
}
