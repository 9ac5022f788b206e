use crate::domain::query_codec::{self, KEY_TYPES};
use crate::domain::{Category, FilterStore, PropertyType, SearchCriteria, SortOrder, SORT_PARAM};
use maud::{html, Markup};

/// `/search` URL for `criteria`; the default sort is left out.
pub fn search_url(criteria: &SearchCriteria, sort: SortOrder) -> String {
    let mut qs = query_codec::encode(criteria);
    if sort != SortOrder::default() {
        qs.push(SORT_PARAM, sort.as_str());
    }
    qs.to_url("/search")
}

/// GET form over every criteria field. Type chips are links to the toggled search,
/// and the selected types ride along as hidden inputs so a plain submit keeps them.
pub fn search_filter_form(store: &FilterStore, sort: SortOrder) -> Markup {
    let c = store.criteria();
    let clear_url = store.clone().clear().to_url("/search");

    html! {
        form method="get" action="/search" class="search-form" {
            div class="field wide" {
                label for="query" { "Keywords" }
                input type="search" id="query" name="query" placeholder="Villa, pool, downtown..."
                    value=[c.query.as_deref()];
            }

            div class="field" {
                label for="category" { "Category" }
                select id="category" name="category" {
                    option value="" selected[c.category.is_none()] { "Any" }
                    @for cat in Category::ALL {
                        option value=(cat.as_str()) selected[c.category == Some(cat)] { (cat.label()) }
                    }
                }
            }

            div class="field" {
                label for="minPrice" { "Min price" }
                input type="number" id="minPrice" name="minPrice" min="0" step="1000"
                    value=[c.min_price];
            }
            div class="field" {
                label for="maxPrice" { "Max price" }
                input type="number" id="maxPrice" name="maxPrice" min="0" step="1000"
                    value=[c.max_price];
            }

            div class="field" {
                label for="minBedrooms" { "Bedrooms" }
                select id="minBedrooms" name="minBedrooms" {
                    option value="" selected[c.min_bedrooms.is_none()] { "Any" }
                    @for n in 1..=5u32 {
                        option value=(n) selected[c.min_bedrooms == Some(n)] { (n) "+" }
                    }
                }
            }

            div class="field" {
                label for="city" { "City" }
                input type="text" id="city" name="city" value=[c.city.as_deref()];
            }

            div class="field" {
                label for="sort" { "Sort" }
                select id="sort" name=(SORT_PARAM) {
                    @for order in SortOrder::ALL {
                        option value=(order.as_str()) selected[order == sort] { (order.label()) }
                    }
                }
            }

            fieldset class="type-chips" {
                legend { "Property type" }
                @for ty in PropertyType::ALL {
                    @let active = c.types.contains(&ty);
                    a.chip.chip-active[active]
                        href=(search_url(&store.toggled(ty), sort))
                        aria-pressed=(active)
                    { (ty.label()) }
                }
                @for ty in &c.types {
                    input type="hidden" name=(KEY_TYPES) value=(ty.as_str());
                }
            }

            @if c.has_reversed_price_range() {
                p class="notice" {
                    "Min price is above max price, so the range was read the other way round."
                }
            }

            div class="actions" {
                button type="submit" class="primary" { "Search" }
                @if !c.is_empty() {
                    a href=(clear_url) class="button" { "Clear filters" }
                }
            }
        }
    }
}
