use maud::{html, Markup};

use super::layout::base_layout;
use crate::handlers::API_PREFIX;

const RESOURCES: [(&str, &str); 3] = [
    ("artists", r#"{"name": "Pink"}"#),
    (
        "tracks",
        r#"{"title": "Cover Me In Sunshine", "version": "Studio Edit", "explicit": false, "isrc": "TEST000000001", "audio_file": "https://cdn.example.com/a.wav", "artists": [{"name": "Pink"}]}"#,
    ),
    (
        "albums",
        r#"{"title": "Sample Album", "upc": "00000000000111", "artwork_file": "https://cdn.example.com/a.jpg", "release_date": "2021-01-01", "stores": ["apple", "spotify"], "tracks": []}"#,
    ),
];

pub fn about_page() -> Markup {
    let content = html! {
        h1 { "About" }
        p {
            "A catalog of artists, their tracks, the albums those tracks appear on "
            "and the stores that distribute each album."
        }
        p {
            "Every resource lives under "
            code { (API_PREFIX) }
            " and speaks JSON."
        }
    };

    base_layout("About", content)
}

pub fn help_page() -> Markup {
    let content = html! {
        h1 { "Help" }
        table {
            thead {
                tr {
                    th { "Method" }
                    th { "Path" }
                    th { "Result" }
                }
            }
            tbody {
                @for (collection, _) in RESOURCES {
                    tr {
                        td { "GET" }
                        td { code { (API_PREFIX) "/" (collection) "/all" } }
                        td { "every " (collection.trim_end_matches('s')) ", newest first" }
                    }
                    tr {
                        td { "GET" }
                        td { code { (API_PREFIX) "/" (collection) "/<id>" } }
                        td { "one " (collection.trim_end_matches('s')) }
                    }
                    tr {
                        td { "POST" }
                        td { code { (API_PREFIX) "/" (collection) "/<id>" } }
                        td { "201 with the created record" }
                    }
                    tr {
                        td { "PUT" }
                        td { code { (API_PREFIX) "/" (collection) "/<id>" } }
                        td { "201, changes only the fields sent" }
                    }
                    tr {
                        td { "DELETE" }
                        td { code { (API_PREFIX) "/" (collection) "/<id>" } }
                        td { "204, associations removed too" }
                    }
                }
            }
        }

        h2 { "Example bodies" }
        @for (collection, body) in RESOURCES {
            h3 { (collection) }
            pre { (body) }
        }
        p {
            "Stores are one of "
            code { "spotify" } ", " code { "apple" } " or " code { "youtube" }
            "; an album reuses a store that already exists."
        }
    };

    base_layout("Help", content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_page_lists_every_collection() {
        let page = help_page().into_string();
        for (collection, _) in RESOURCES {
            assert!(page.contains(&format!("{}/{}/all", API_PREFIX, collection)));
        }
    }

    #[test]
    fn about_page_has_title() {
        assert!(about_page().into_string().contains("<title>About - Music Catalog</title>"));
    }
}
