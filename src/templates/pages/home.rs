// templates/pages/home.rs

use crate::auth::SessionContext;
use crate::domain::ListingRecord;
use crate::templates::{components::listing_card, desktop_layout};
use maud::{html, Markup};

pub fn home_page(session: &SessionContext, featured: &[&ListingRecord]) -> Markup {
    desktop_layout(
        "Home",
        session,
        html! {
            section class="hero" {
                h1 { "Find your next place" }
                p class="lead" { "Homes, rentals and commercial space, updated daily." }

                form method="get" action="/search" class="hero-search" {
                    label class="sr-only" for="hero-query" { "Search" }
                    input type="search" id="hero-query" name="query" placeholder="Try \"villa\" or \"downtown\"";
                    button type="submit" class="primary" { "Search" }
                }
            }

            section class="featured" {
                h2 { "Newest listings" }
                @if featured.is_empty() {
                    p class="muted" { "No listings yet. Check back soon." }
                } @else {
                    div class="listing-grid" {
                        @for rec in featured {
                            (listing_card(rec))
                        }
                    }
                }
                p { a href="/properties" { "Browse all properties" } }
            }
        },
    )
}
