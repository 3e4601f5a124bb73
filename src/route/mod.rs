use axum::{response::Html, routing::get, Router};

use crate::{view, AppState};

pub mod blog;

pub fn routes() -> Router<AppState> {
	blog::routes().route("/contact", get(contact))
}

/// Renders the static contact page; no data dependency.
async fn contact() -> Html<String> {
	view::contact()
}
