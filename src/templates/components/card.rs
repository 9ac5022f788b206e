use crate::domain::{ListingRecord, ListingStatus};
use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn status_badge(status: ListingStatus) -> Markup {
    html! {
        span class={ "badge badge-" (status.as_str()) } { (status.label()) }
    }
}

/// Summary tile linking to the details page.
pub fn listing_card(rec: &ListingRecord) -> Markup {
    html! {
        article class="card listing-card" {
            div class="listing-card-head" {
                (status_badge(rec.status))
                span class="listing-type" { (rec.property_type.label()) }
            }
            h3 {
                a href={ "/properties/" (rec.id) } { (rec.title) }
            }
            p class="listing-location" { (rec.location) }
            p class="listing-price" { (rec.price) }
            ul class="listing-facts" {
                @if rec.bedrooms > 0 {
                    li { (rec.bedrooms) " bd" }
                }
                @if rec.bathrooms > 0 {
                    li { (rec.bathrooms) " ba" }
                }
                li { (rec.area_sqft) " sqft" }
            }
        }
    }
}
