use crate::auth::SessionContext;
use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub fn about_page(session: &SessionContext) -> Markup {
    desktop_layout(
        "About",
        session,
        html! {
            h1 { "About us" }
            p class="lead" {
                "We help buyers, renters and agents find each other without the noise."
            }

            div class="card-grid" {
                (card("Every listing, one search", html! {
                    p { "Filter by price, type, bedrooms and city, then share the exact search with a link." }
                }))
                (card("Agents who answer", html! {
                    p { "Every listing names the agent responsible for it. Questions go straight to them." }
                }))
                (card("Plans for teams", html! {
                    p {
                        "Agencies publish and manage listings on a paid plan. "
                        a href="/pricing" { "See pricing" } "."
                    }
                }))
            }
        },
    )
}
