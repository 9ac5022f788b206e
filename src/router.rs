use std::collections::HashMap;
use std::io::Read;

use astra::Request;
use maud::html;
use url::form_urlencoded;

use crate::auth::sessions::{
    clear_session_cookie, create_session, revoke_session, session_cookie,
    session_token_from_cookie,
};
use crate::auth::{EmailVerificationService, SessionContext, VerificationConfig};
use crate::config::AppConfig;
use crate::contact::submit_contact;
use crate::db::plans::list_plans;
use crate::db::Database;
use crate::domain::contact::{ContactForm, SubmissionState};
use crate::domain::criteria::clean_text;
use crate::domain::query_codec::parse_opt;
use crate::domain::{
    filter_listings, FilterOptions, FilterStore, QueryString, SearchCriteria, SearchField,
    SortOrder, SORT_PARAM,
};
use crate::errors::{ResultResp, ServerError};
use crate::listings::ListingSource;
use crate::mailer::{verification_mail, Mailer};
use crate::responses::{
    css_response, error_to_response, html_response, html_response_with_cookie, html_with_status,
    redirect,
};
use crate::templates::pages;

const MAIN_CSS: &str = include_str!("../static/main.css");
const FEATURED_COUNT: usize = 3;
const MAX_FORM_BYTES: u64 = 64 * 1024;

// Text the `q` box on /properties and the keyword box on /search look in.
const BROWSE_FIELDS: [SearchField; 3] = [
    SearchField::Title,
    SearchField::Location,
    SearchField::City,
];
const SEARCH_FIELDS: [SearchField; 3] = [
    SearchField::Title,
    SearchField::Location,
    SearchField::Description,
];

/// Everything a request handler may touch. Shared read-only across workers.
pub struct AppState {
    pub config: AppConfig,
    pub db: Database,
    pub listings: Box<dyn ListingSource>,
    pub mailer: Box<dyn Mailer>,
}

fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Resolve the session, then route. Route errors become error pages rendered
/// with the caller's session; only a failed session lookup escapes as `Err`.
pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let now = now_unix();
    let token = req
        .headers()
        .get("Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(session_token_from_cookie)
        .map(str::to_string);

    let mut session = state
        .db
        .with_conn(|conn| SessionContext::resolve(conn, token.as_deref(), now))?;

    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match route(req, state, &mut session, token.as_deref(), now) {
        Ok(resp) => Ok(resp),
        Err(err) => {
            tracing::warn!(
                %method,
                %path,
                status = err.status(),
                signed_in = session.is_signed_in(),
                "{err}"
            );
            Ok(error_to_response(err, &session))
        }
    }
}

fn route(
    req: Request,
    state: &AppState,
    session: &mut SessionContext,
    token: Option<&str>,
    now: i64,
) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = QueryString::parse(req.uri().query().unwrap_or(""));

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(state, session),
        ("GET", "/about") => html_response(pages::about_page(session)),
        ("GET", "/contact") => html_response(pages::contact_page(
            session,
            &ContactForm::default(),
            &SubmissionState::Idle,
        )),
        ("POST", "/contact") => contact_submit(req, state, session, now),
        ("GET", "/pricing") => {
            let plans = state.db.with_conn(|conn| list_plans(conn))?;
            html_response(pages::pricing_page(session, &plans))
        }
        ("GET", "/properties") => properties(state, session, &query),
        ("GET", p) if p.starts_with("/properties/") => {
            let id = p.trim_start_matches("/properties/");
            let rec = state.listings.find(id)?.ok_or(ServerError::NotFound)?;
            html_response(pages::property_details_page(session, &rec))
        }
        ("GET", "/search") => search(state, session, &query),
        ("GET", "/login") => html_response(pages::login_page(session)),
        ("POST", "/auth/request-link") => request_link(req, state, now),
        ("GET", "/verify-email") => verify_email(state, session, &query, now),
        ("POST", "/logout") => logout(state, session, token, now),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        _ => Err(ServerError::NotFound),
    }
}

fn home(state: &AppState, session: &SessionContext) -> ResultResp {
    let records = state.listings.all()?;
    let newest = filter_listings(
        &records,
        &SearchCriteria::default(),
        &FilterOptions::default(),
    );
    let featured: Vec<_> = newest.into_iter().take(FEATURED_COUNT).collect();
    html_response(pages::home_page(session, &featured))
}

fn properties(state: &AppState, session: &SessionContext, query: &QueryString) -> ResultResp {
    let view = pages::PropertiesView {
        q: clean_text(query.get("q").map(str::to_string)),
        status: parse_opt(query.get("status")),
        sort: parse_opt(query.get(SORT_PARAM)).unwrap_or_default(),
    };

    let criteria = SearchCriteria {
        query: view.q.clone(),
        ..Default::default()
    };
    let options = FilterOptions {
        fields: BROWSE_FIELDS.to_vec(),
        status: view.status,
        sort: view.sort,
    };

    let records = state.listings.all()?;
    let results = filter_listings(&records, &criteria, &options);
    html_response(pages::properties_page(session, &view, &results))
}

fn search(state: &AppState, session: &SessionContext, query: &QueryString) -> ResultResp {
    let store = FilterStore::from_query(&query.to_string());
    let sort: SortOrder = parse_opt(query.get(SORT_PARAM)).unwrap_or_default();
    let options = FilterOptions {
        fields: SEARCH_FIELDS.to_vec(),
        sort,
        ..Default::default()
    };

    let records = state.listings.all()?;
    let results = filter_listings(&records, store.criteria(), &options);
    tracing::debug!(query = %query, matches = results.len(), "search");
    html_response(pages::search_page(session, &store, sort, &results))
}

fn contact_submit(
    req: Request,
    state: &AppState,
    session: &SessionContext,
    now: i64,
) -> ResultResp {
    let form = ContactForm::from_pairs(&read_form(req)?);

    let outcome = state
        .db
        .with_conn(|conn| {
            Ok(submit_contact(
                conn,
                state.mailer.as_ref(),
                &state.config.contact_inbox,
                &form,
                now,
            ))
        })
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "contact submission failed before saving");
            SubmissionState::Failed(crate::contact::SUBMIT_FAILED_MESSAGE.to_string())
        });

    html_response(pages::contact_page(session, &form, &outcome))
}

/// Returns the partial that htmx swaps into `#auth-result`.
fn request_link(req: Request, state: &AppState, now: i64) -> ResultResp {
    let form = read_form(req)?;
    let email = form.get("email").map(String::as_str).unwrap_or("");

    let svc = verification_service(&state.config);
    let issued = match state.db.with_conn(|conn| svc.request_link(conn, email, now)) {
        Ok(issued) => issued,
        Err(ServerError::BadRequest(_)) => {
            return html_response(html! {
                p class="field-error" { "Please enter a valid email address." }
            });
        }
        Err(e) => return Err(e),
    };

    let absolute = format!("{}{}", state.config.public_base_url, issued.link);
    let mail = verification_mail(&issued.email, &absolute, issued.expires_at - now);
    if let Err(e) = state.mailer.send(&mail) {
        tracing::error!(error = %e, user_id = issued.user_id, "verification mail failed");
        return html_response(html! {
            p class="field-error" { "We couldn't send the email. Please try again in a moment." }
        });
    }

    html_response(pages::check_email_content(&issued.email))
}

fn verify_email(
    state: &AppState,
    session: &mut SessionContext,
    query: &QueryString,
    now: i64,
) -> ResultResp {
    let token = query.get("token").unwrap_or("");
    let svc = verification_service(&state.config);
    let ttl = state.config.session_ttl_secs;

    let verified = state.db.with_conn(|conn| {
        let user = svc.verify(conn, token, now)?;
        let raw = create_session(conn, user.user_id, now, ttl)?;
        session.refresh(conn, &raw, now)?;
        Ok((user, raw))
    });

    match verified {
        Ok((user, raw)) => html_response_with_cookie(
            pages::verify_success_page(session, &user.email),
            &session_cookie(&raw, ttl),
        ),
        Err(e @ (ServerError::BadRequest(_) | ServerError::Unauthorized(_))) => {
            tracing::info!("verification rejected: {e}");
            let message = match &e {
                ServerError::BadRequest(_) => "This link is missing its token.",
                _ => "This link is invalid, already used, or expired.",
            };
            html_with_status(e.status(), pages::verify_failed_page(session, message))
        }
        Err(e) => Err(e),
    }
}

fn logout(
    state: &AppState,
    session: &mut SessionContext,
    token: Option<&str>,
    now: i64,
) -> ResultResp {
    if let Some(token) = token {
        let revoked = state
            .db
            .with_conn(|conn| revoke_session(conn, token, now))?;
        tracing::info!(revoked, "signed out");
    }
    session.invalidate();
    redirect("/", Some(&clear_session_cookie()))
}

fn verification_service(config: &AppConfig) -> EmailVerificationService {
    EmailVerificationService::new(VerificationConfig {
        ttl_secs: config.verify_ttl_secs,
        ..Default::default()
    })
}

/// `application/x-www-form-urlencoded` body into a map; the last value of a key wins.
fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut raw = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

    Ok(form_urlencoded::parse(&raw)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect())
}
