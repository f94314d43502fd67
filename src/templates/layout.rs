use maud::{html, Markup, DOCTYPE};

pub fn base_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Music Catalog" }

                style {
                    r#"
                    body { font-family: sans-serif; margin: 0; color: #1f2937; background: #f9fafb; }
                    nav, main, footer { max-width: 48rem; margin: 0 auto; padding: 1rem; }
                    nav a { margin-right: 1rem; }
                    code, pre { background: #e5e7eb; padding: 0.1rem 0.3rem; border-radius: 4px; }
                    table { border-collapse: collapse; }
                    td, th { border: 1px solid #d1d5db; padding: 0.3rem 0.6rem; text-align: left; }
                    "#
                }
            }
            body {
                (nav_bar())

                main {
                    (content)
                }

                (footer())
            }
        }
    }
}

fn nav_bar() -> Markup {
    html! {
        nav {
            strong { "Music Catalog" }
            " "
            a href="/about" { "About" }
            a href="/help" { "Help" }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer {
            small { "Music Catalog - artists, tracks, albums and stores over JSON" }
        }
    }
}
