use crate::tests::utils::{body_string, header, pos, test_app};

#[test]
fn home_shows_three_newest_listings() {
    let app = test_app("home");
    let resp = app.get("/", None);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Newest listings"));
    assert!(pos(&body, "Corner Retail Space") < pos(&body, "Cozy Studio"));
    assert!(pos(&body, "Cozy Studio") < pos(&body, "Garden Apartment"));
    assert!(!body.contains("Buildable Lot with Views"));
}

#[test]
fn static_pages_load() {
    let app = test_app("static_pages");
    for (uri, marker) in [
        ("/about", "About us"),
        ("/contact", "Contact us"),
        ("/login", "Sign in"),
    ] {
        let resp = app.get(uri, None);
        assert_eq!(resp.status(), 200, "{uri}");
        assert!(body_string(resp).contains(marker), "{uri}");
    }
}

#[test]
fn pricing_lists_seeded_plans() {
    let app = test_app("pricing");
    let body = body_string(app.get("/pricing", None));

    assert!(pos(&body, "<h2>Basic</h2>") < pos(&body, "<h2>Pro</h2>"));
    assert!(pos(&body, "<h2>Pro</h2>") < pos(&body, "<h2>Agency</h2>"));
    assert!(body.contains("$29"));
    assert!(body.contains("Most popular"));
    assert!(body.contains("Free"));
}

#[test]
fn stylesheet_is_served_as_css() {
    let app = test_app("css");
    let resp = app.get("/static/main.css", None);
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/css"));
}

#[test]
fn unknown_path_renders_404_page() {
    let app = test_app("not_found");
    let resp = app.get("/no/such/page", None);
    assert_eq!(resp.status(), 404);

    let body = body_string(resp);
    assert!(body.contains("Page not found"));
    // Still inside the site layout.
    assert!(body.contains(r#"href="/properties""#));
}

#[test]
fn property_details_and_missing_property() {
    let app = test_app("details");

    let resp = app.get("/properties/lux-villa-malibu", None);
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Luxury Villa with Pool"));
    assert!(body.contains("Infinity pool"));
    assert!(body.contains("dana@realty.local"));

    assert_eq!(app.get("/properties/nope", None).status(), 404);
}

#[test]
fn properties_filters_by_text_and_status() {
    let app = test_app("properties_filter");

    let body = body_string(app.get("/properties?q=miami&status=for-rent", None));
    assert!(body.contains("Corner Retail Space"));
    assert!(!body.contains("Beachfront Villa"));
    assert!(body.contains("1 property"));
}

#[test]
fn properties_sorts_by_price() {
    let app = test_app("properties_sort");

    let body = body_string(app.get("/properties?status=for-sale&sort=price-desc", None));
    assert!(pos(&body, "Beachfront Villa") < pos(&body, "Luxury Villa with Pool"));
    assert!(pos(&body, "Luxury Villa with Pool") < pos(&body, "Buildable Lot with Views"));
}

#[test]
fn properties_ignores_unknown_params() {
    let app = test_app("properties_junk");
    let resp = app.get("/properties?status=haunted&sort=random&page=9", None);
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("12 properties"));
}
