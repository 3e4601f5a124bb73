use axum::{
	extract::{Form, Path, State},
	http::{header, StatusCode},
	response::{Html, IntoResponse, Response},
};
use validator::Validate;

use crate::{db, view, Database};

use super::model::BlogForm;

/// Redirect used after mutations. Axum's `Redirect::to` answers 303;
/// these routes answer a literal 302 Found.
fn to_blogs() -> impl IntoResponse {
	(StatusCode::FOUND, [(header::LOCATION, "/blogs")])
}

/// Renders the full list of posts, newest first.
///
/// A failing store is logged and rendered as an empty list; the
/// visitor never sees a persistence error.
pub async fn list(State(database): State<Database>) -> Html<String> {
	let posts = db::list_all(&database).await.unwrap_or_else(|err| {
		tracing::error!(%err, "cannot load blog entries");
		Vec::new()
	});

	view::blogs(&posts)
}

/// Renders a single post. A missing id renders the absent state, not
/// a 404.
pub async fn detail(
	State(database): State<Database>,
	Path(blog_id): Path<i64>,
) -> Html<String> {
	let post = db::get_by_id(&database, blog_id)
		.await
		.unwrap_or_else(|err| {
			tracing::error!(%err, blog_id, "cannot load blog entry");
			None
		});

	view::single(post.as_ref())
}

/// Renders the empty creation form.
pub async fn create_form() -> Html<String> {
	view::create(&BlogForm::default(), None)
}

/// Validates the submitted form. Valid input inserts a post and
/// redirects to the listing; invalid input re-renders the form with
/// field messages and the submitted values intact.
pub async fn create(
	State(database): State<Database>,
	Form(form): Form<BlogForm>,
) -> Response {
	if let Err(errors) = form.validate() {
		return view::create(&form, Some(&errors)).into_response();
	}

	match db::insert(&database, &form.into_post()).await {
		Ok(id) => tracing::debug!(id, "created blog entry"),
		Err(err) => tracing::error!(%err, "cannot create blog entry"),
	}

	to_blogs().into_response()
}

/// Deletes the post and redirects to the listing, whether or not the
/// row existed. Delete-over-GET mirrors the plain links in the listing.
pub async fn delete(
	State(database): State<Database>,
	Path(blog_id): Path<i64>,
) -> impl IntoResponse {
	if let Err(err) = db::delete_by_id(&database, blog_id).await {
		tracing::error!(%err, blog_id, "cannot delete blog entry");
	}

	to_blogs()
}
