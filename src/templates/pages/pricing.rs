use crate::auth::SessionContext;
use crate::db::plans::Plan;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn pricing_page(session: &SessionContext, plans: &[Plan]) -> Markup {
    desktop_layout(
        "Pricing",
        session,
        html! {
            h1 { "Pricing" }
            p class="lead" { "Searching is free. Agents and agencies pay to publish." }

            div class="plan-grid" {
                @for plan in plans {
                    article.card.plan.plan-highlighted[plan.highlighted] {
                        @if plan.highlighted {
                            span class="badge" { "Most popular" }
                        }
                        h2 { (plan.name) }
                        p class="plan-price" {
                            (plan.display_price())
                            @if plan.price_cents > 0 {
                                span class="muted" { " / " (plan.billing_interval) }
                            }
                        }
                        ul {
                            @for feature in &plan.features {
                                li { (feature) }
                            }
                        }
                        a href="/login" class="button primary" { "Get started" }
                    }
                }
            }
        },
    )
}
