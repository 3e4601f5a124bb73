//! SQLite persistence for blog posts.
//!
//! One statement per operation. Every operation borrows a pooled
//! connection for exactly its own statement, released on all return
//! paths, error paths included.

use crate::{
	model::{NewPost, Post},
	Database, Error,
};

const CREATE_BLOGS_TABLE: &str = r"
	CREATE TABLE IF NOT EXISTS blogs (
		id integer PRIMARY KEY AUTOINCREMENT,
		title text NOT NULL,
		text text NOT NULL,
		author text NOT NULL,
		blog_date timestamp
	)
";

const SAMPLE_AUTHOR: &str = "Jörg Dieber";

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipisicing elit. \
	Molestiae ut ratione similique temporibus tempora dicta soluta? Qui hic, \
	voluptatem nemo quo corporis dignissimos voluptatum debitis cumque fugiat \
	mollitia quasi quod. Lorem ipsum dolor sit amet, consectetur adipisicing \
	elit. Molestiae ut ratione similique.";

const SAMPLE_POSTS: [(&str, &str); 5] = [
	("Create a new blog", LOREM),
	("I used a template for this blog", LOREM),
	("The persistence is done with SQLite", LOREM),
	("I hope this is the example you wanted", LOREM),
	(
		"DB Getting Start",
		"It creates some test blog entries if the database does not contain \
			any blog entries. You can also reset the database by deleting the \
			file db/blog.db.",
	),
];

/// Extracts the parent directory of the database file from a `sqlite://`
/// url, skipping in-memory databases and query parameters.
pub fn file_parent(url: &str) -> Option<&std::path::Path> {
	let path = url.strip_prefix("sqlite://")?.split('?').next()?;

	if path.is_empty() || path == ":memory:" {
		return None;
	}

	std::path::Path::new(path)
		.parent()
		.filter(|parent| !parent.as_os_str().is_empty())
}

/// Creates the blogs table if it does not exist, then seeds the sample
/// posts if the table is empty.
///
/// The seed is guarded by the row count, so running setup against a
/// populated database adds nothing.
pub async fn setup(db: &Database) -> Result<(), Error> {
	sqlx::query(CREATE_BLOGS_TABLE).execute(db).await?;

	if !list_all(db).await?.is_empty() {
		return Ok(());
	}

	for (title, text) in SAMPLE_POSTS {
		insert(
			db,
			&NewPost {
				title: title.to_string(),
				text: text.to_string(),
				author: SAMPLE_AUTHOR.to_string(),
			},
		)
		.await?;
	}

	Ok(())
}

/// Inserts a new post, stamping it with the store's current time, and
/// returns the assigned id.
///
/// The caller is responsible for validating the fields first.
pub async fn insert(db: &Database, post: &NewPost) -> Result<i64, Error> {
	let result = sqlx::query(
		r"
			INSERT INTO blogs (title, text, author, blog_date)
			VALUES (?, ?, ?, datetime('now'))
		",
	)
	.bind(&post.title)
	.bind(&post.text)
	.bind(&post.author)
	.execute(db)
	.await?;

	Ok(result.last_insert_rowid())
}

/// Returns every post, newest first. An empty table yields an empty
/// vector, not an error.
pub async fn list_all(db: &Database) -> Result<Vec<Post>, Error> {
	let posts = sqlx::query_as::<_, Post>(
		"SELECT id, title, text, author, blog_date FROM blogs ORDER BY id DESC",
	)
	.fetch_all(db)
	.await?;

	Ok(posts)
}

/// Returns the post with the given id, or `None` if no row matches.
pub async fn get_by_id(db: &Database, id: i64) -> Result<Option<Post>, Error> {
	let post = sqlx::query_as::<_, Post>(
		"SELECT id, title, text, author, blog_date FROM blogs WHERE id = ?",
	)
	.bind(id)
	.fetch_optional(db)
	.await?;

	Ok(post)
}

/// Deletes the post with the given id. A missing row is a no-op.
pub async fn delete_by_id(db: &Database, id: i64) -> Result<(), Error> {
	sqlx::query("DELETE FROM blogs WHERE id = ?")
		.bind(id)
		.execute(db)
		.await?;

	Ok(())
}
