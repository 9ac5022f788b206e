use crate::auth::SessionContext;
use maud::{html, Markup, DOCTYPE};

const NAV_LINKS: [(&str, &str); 6] = [
    ("/", "Home"),
    ("/properties", "Properties"),
    ("/search", "Search"),
    ("/pricing", "Pricing"),
    ("/about", "About"),
    ("/contact", "Contact"),
];

pub fn desktop_layout(title: &str, session: &SessionContext, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Realty" }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#524ed2"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                        }
                        span { "Realty" }
                    }
                    nav {
                        ul {
                            @for (href, label) in NAV_LINKS {
                                li { a href=(href) { (label) } }
                            }
                        }
                    }

                    @match session.user() {
                        Some(user) => {
                            div class="account" {
                                span class="account-email" { (user.email) }
                                form method="post" action="/logout" class="inline" {
                                    button type="submit" class="link" { "Sign out" }
                                }
                            }
                        }
                        None => {
                            a href="/login" class="button primary" { "Sign in" }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
                footer class="site-footer" {
                    p { "Realty. Homes, rentals and commercial space." }
                }
            }
        }
    }
}
