/// A model representing a single blog post.
///
/// Use this when fetching from the database and rendering a page.
/// Posts are immutable once created; the only mutation is deletion.
#[derive(Debug, sqlx::FromRow)]
pub struct Post {
	pub id: i64,
	pub title: String,
	pub text: String,
	pub author: String,
	/// Assigned by the store at insert time with `datetime('now')`.
	/// Nullable in the schema, but always populated by [`crate::db::insert`].
	pub blog_date: Option<chrono::NaiveDateTime>,
}

/// The fields of a post that a visitor supplies.
///
/// Validation happens at the form boundary, not here.
#[derive(Debug)]
pub struct NewPost {
	pub title: String,
	pub text: String,
	pub author: String,
}
