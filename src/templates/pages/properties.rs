use crate::auth::SessionContext;
use crate::domain::{ListingRecord, ListingStatus, SortOrder, SORT_PARAM};
use crate::templates::components::{listing_card, status_badge};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// What the `/properties` page was asked for.
#[derive(Debug, Clone, Default)]
pub struct PropertiesView {
    pub q: Option<String>,
    pub status: Option<ListingStatus>,
    pub sort: SortOrder,
}

pub fn properties_page(
    session: &SessionContext,
    view: &PropertiesView,
    results: &[&ListingRecord],
) -> Markup {
    desktop_layout(
        "Properties",
        session,
        html! {
            h1 { "Properties" }

            form
                method="get"
                action="/properties"
                hx-get="/properties"
                hx-trigger="change, search"
                hx-target="body"
                hx-push-url="true"
                class="toolbar"
            {
                input type="search" name="q" placeholder="Search title, location or city"
                    value=[view.q.as_deref()];
                select name="status" {
                    option value="" selected[view.status.is_none()] { "All statuses" }
                    @for st in ListingStatus::ALL {
                        option value=(st.as_str()) selected[view.status == Some(st)] { (st.label()) }
                    }
                }
                select name=(SORT_PARAM) {
                    @for order in SortOrder::ALL {
                        option value=(order.as_str()) selected[order == view.sort] { (order.label()) }
                    }
                }
                button type="submit" { "Apply" }
            }

            p class="muted result-count" {
                (results.len()) @if results.len() == 1 { " property" } @else { " properties" }
            }

            @if results.is_empty() {
                p class="empty" { "No properties match. " a href="/properties" { "Reset" } }
            } @else {
                div class="listing-grid" {
                    @for rec in results {
                        (listing_card(rec))
                    }
                }
            }
        },
    )
}

pub fn property_details_page(session: &SessionContext, rec: &ListingRecord) -> Markup {
    desktop_layout(
        &rec.title,
        session,
        html! {
            p { a href="/properties" { "All properties" } }

            article class="property-details" {
                header {
                    (status_badge(rec.status))
                    h1 { (rec.title) }
                    p class="listing-location" { (rec.location) }
                    p class="listing-price" { (rec.price) }
                }

                dl class="facts" {
                    dt { "Type" } dd { (rec.property_type.label()) }
                    dt { "Category" } dd { (rec.category.label()) }
                    dt { "Bedrooms" } dd { (rec.bedrooms) }
                    dt { "Bathrooms" } dd { (rec.bathrooms) }
                    dt { "Area" } dd { (rec.area_sqft) " sqft" }
                    dt { "Listed" } dd { (rec.listed_at.format("%B %-d, %Y").to_string()) }
                }

                @if !rec.description.is_empty() {
                    p class="description" { (rec.description) }
                }

                @if !rec.features.is_empty() {
                    h2 { "Features" }
                    ul class="features" {
                        @for f in &rec.features {
                            li { (f) }
                        }
                    }
                }

                @if let Some(agent) = &rec.agent_name {
                    aside class="card agent" {
                        h2 { "Listing agent" }
                        p { (agent) }
                        @if let Some(email) = &rec.agent_email {
                            p { a href={ "mailto:" (email) } { (email) } }
                        }
                    }
                }
            }
        },
    )
}
