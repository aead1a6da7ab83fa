use askama::Template;
use axum::response::{Html, IntoResponse, Response};

// The page is fully static; the table body is filled in client-side by the
// inline script fetching /weatherforecast.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate;

pub async fn get_index() -> Response {
    Html(IndexTemplate.render().expect("Template should always succeed")).into_response()
}
