//! Serves the single-page client.
//!
//! The UI is a static HTML document embedded in the binary at compile time so
//! the service deploys as one artifact with no asset directory to configure.

use axum::response::Html;

static INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
