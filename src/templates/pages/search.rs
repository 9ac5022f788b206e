use crate::auth::SessionContext;
use crate::domain::{FilterStore, ListingRecord, SortOrder};
use crate::templates::components::{listing_card, search_filter_form};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn search_page(
    session: &SessionContext,
    store: &FilterStore,
    sort: SortOrder,
    results: &[&ListingRecord],
) -> Markup {
    desktop_layout(
        "Search",
        session,
        html! {
            h1 { "Search properties" }

            (search_filter_form(store, sort))

            section class="results" {
                p class="muted result-count" {
                    (results.len())
                    @if results.len() == 1 { " matching listing" } @else { " matching listings" }
                }
                @if results.is_empty() {
                    p class="empty" {
                        "Nothing matches these filters. Try widening the price range or clearing a type."
                    }
                } @else {
                    div class="listing-grid" {
                        @for rec in results {
                            (listing_card(rec))
                        }
                    }
                }
            }
        },
    )
}
