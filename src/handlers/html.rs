use axum::response::Html;

use crate::templates::{about_page, help_page};

/// About page, also served at `/`
pub async fn about() -> Html<String> {
    Html(about_page().into_string())
}

pub async fn help() -> Html<String> {
    Html(help_page().into_string())
}
