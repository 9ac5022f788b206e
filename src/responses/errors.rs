use crate::auth::SessionContext;
use crate::errors::ServerError;
use crate::templates::pages::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into an HTML error page with the matching status.
/// Server-side details are logged, never shown.
pub fn error_to_response(err: ServerError, session: &SessionContext) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "We couldn't find that page.".to_string(),
        ServerError::BadRequest(msg) | ServerError::Unauthorized(msg) => msg.clone(),
        ServerError::DbError(_) | ServerError::Mail(_) | ServerError::InternalError => {
            tracing::error!(error = %err, "request failed");
            "Something went wrong on our side. Please try again.".to_string()
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(
            error_page(status, &message, session).into_string(),
        ))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
