use crate::tests::utils::{body_string, pos, test_app};

#[test]
fn query_matches_case_insensitively() {
    let app = test_app("search_query");
    let body = body_string(app.get("/search?query=VILLA", None));

    assert!(body.contains("Luxury Villa with Pool"));
    assert!(body.contains("Beachfront Villa"));
    assert!(!body.contains("Cozy Studio"));
    // The input keeps the submitted text.
    assert!(body.contains(r#"value="VILLA""#));
}

#[test]
fn price_range_is_inclusive_and_normalized() {
    let app = test_app("search_price");
    let body = body_string(app.get("/search?minPrice=300000&maxPrice=500000", None));

    assert!(body.contains("Modern Family Home"));
    assert!(!body.contains("Starter Condo Near Downtown"));
    assert!(!body.contains("Single-Story Ranch House"));
    assert!(body.contains("1 matching listing"));
}

#[test]
fn reversed_price_range_reads_the_other_way() {
    let app = test_app("search_reversed");
    let body = body_string(app.get("/search?minPrice=500000&maxPrice=300000", None));

    assert!(body.contains("Modern Family Home"));
    assert!(body.contains("1 matching listing"));
    assert!(body.contains("Min price is above max price"));
}

#[test]
fn repeated_types_are_all_applied() {
    let app = test_app("search_types");
    let body = body_string(app.get("/search?types=villa&types=condo", None));

    assert!(body.contains("Luxury Villa with Pool"));
    assert!(body.contains("Starter Condo Near Downtown"));
    assert!(!body.contains("Modern Family Home"));
    assert!(body.contains("3 matching listings"));
}

#[test]
fn invalid_numbers_are_ignored() {
    let app = test_app("search_invalid");
    let resp = app.get("/search?minPrice=abc&minBedrooms=-2&category=castle", None);
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("12 matching listings"));
}

#[test]
fn combined_criteria_and_price_sort() {
    let app = test_app("search_combined");
    let body = body_string(app.get(
        "/search?category=residential&minBedrooms=3&city=phoenix&sort=price-asc",
        None,
    ));

    assert!(body.contains("Single-Story Ranch House"));
    assert!(!body.contains("Starter Condo Near Downtown"));
    assert!(body.contains(r#"<option value="price-asc" selected>"#));
}

#[test]
fn price_ascending_puts_cheapest_first() {
    let app = test_app("search_price_asc");
    let body = body_string(app.get("/search?status=ignored&types=house&sort=price-asc", None));

    assert!(pos(&body, "Modern Family Home") < pos(&body, "Single-Story Ranch House"));
    assert!(pos(&body, "Single-Story Ranch House") < pos(&body, "Hilltop Estate"));
}

#[test]
fn empty_search_returns_everything_newest_first() {
    let app = test_app("search_empty");
    let body = body_string(app.get("/search", None));

    assert!(body.contains("12 matching listings"));
    assert!(pos(&body, "Corner Retail Space") < pos(&body, "Buildable Lot with Views"));
}

#[test]
fn keywords_also_search_descriptions() {
    let app = test_app("search_description");
    let body = body_string(app.get("/search?query=rooftop", None));

    assert!(body.contains("1 matching listing</p>"));
    assert!(body.contains("Starter Condo Near Downtown"));

    // The browse page only looks at title, location and city.
    let browse = body_string(app.get("/properties?q=rooftop", None));
    assert!(!browse.contains("Starter Condo Near Downtown"));

    let by_city = body_string(app.get("/properties?q=phoenix", None));
    assert!(by_city.contains("Starter Condo Near Downtown"));
    assert!(by_city.contains("Single-Story Ranch House"));
    assert!(!by_city.contains("Cozy Studio"));
}
