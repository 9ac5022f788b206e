use crate::config::{AppConfig, ListingSourceKind};
use crate::db::connection::TempDb;
use crate::listings::listing_source_for;
use crate::mailer::tests::RecordingMailer;
use crate::router::{handle, AppState};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::sync::Arc;

pub(crate) struct TestApp {
    pub(crate) state: AppState,
    pub(crate) mailer: Arc<RecordingMailer>,
    _db: TempDb,
}

fn test_config() -> AppConfig {
    AppConfig {
        listing_source: ListingSourceKind::Mock,
        public_base_url: "http://test.local".to_string(),
        ..Default::default()
    }
}

/// Fresh temp-file database per test name, mock listings, recording mailer.
pub(crate) fn test_app(name: &str) -> TestApp {
    build_app(name, test_config(), RecordingMailer::default())
}

pub(crate) fn test_app_with_failing_mail(name: &str) -> TestApp {
    build_app(name, test_config(), RecordingMailer::failing())
}

pub(crate) fn test_app_with_config(name: &str, edit: impl FnOnce(&mut AppConfig)) -> TestApp {
    let mut config = test_config();
    edit(&mut config);
    build_app(name, config, RecordingMailer::default())
}

fn build_app(name: &str, config: AppConfig, mailer: RecordingMailer) -> TestApp {
    let tmp = TempDb::new(&format!("router_{name}"));
    let db = tmp.db().clone();

    let listings = listing_source_for(config.listing_source, &db).expect("mock listings");
    let mailer = Arc::new(mailer);

    TestApp {
        state: AppState {
            config,
            db,
            listings,
            mailer: Box::new(Arc::clone(&mailer)),
        },
        mailer,
        _db: tmp,
    }
}

impl TestApp {
    pub(crate) fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header("Cookie", cookie);
        }
        let req = builder.body(Body::empty()).unwrap();
        handle(req, &self.state).expect("Failed to handle request")
    }

    pub(crate) fn post_form(&self, uri: &str, form: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("Content-Type", "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header("Cookie", cookie);
        }
        let req = builder.body(Body::from(form.as_bytes().to_vec())).unwrap();
        handle(req, &self.state).expect("Failed to handle request")
    }
}

pub(crate) fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub(crate) fn header(resp: &Response, name: &str) -> String {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Position of `needle` in `body`, for asserting render order.
pub(crate) fn pos(body: &str, needle: &str) -> usize {
    body.find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in page"))
}
