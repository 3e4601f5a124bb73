use axum::{routing::get, Router};

use crate::AppState;

pub mod model;
pub mod route;

pub fn routes() -> Router<AppState> {
	use route::*;

	Router::new()
		.route("/", get(list))
		.route("/blogs", get(list))
		.route("/blog/:id", get(detail))
		.route("/create", get(create_form).post(create))
		.route("/delete/:id", get(delete))
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::test::*;
	use crate::{db, Database};

	#[sqlx::test]
	async fn test_create_view_delete_flow(db: Database) {
		let app = app(db.clone()).await;

		let response = app
			.post("/create")
			.form(&json!({
				"title": "A",
				"author": "B",
				"text": "C",
			}))
			.await;

		assert_eq!(response.status_code(), 302);
		assert_eq!(response.header("location"), "/blogs");

		let posts = db::list_all(&db).await.unwrap();

		assert_eq!(posts.len(), 6);
		assert_eq!(posts[0].id, 6);
		assert_eq!(posts[0].title, "A");
		assert_eq!(posts[0].author, "B");
		assert_eq!(posts[0].text, "C");
		assert!(posts[0].blog_date.is_some());

		let response = app.get("/blog/6").await;

		assert_eq!(response.status_code(), 200);
		assert!(response.text().contains("<h1>A</h1>"));

		let response = app.get("/delete/6").await;

		assert_eq!(response.status_code(), 302);
		assert_eq!(response.header("location"), "/blogs");

		let response = app.get("/blog/6").await;

		assert_eq!(response.status_code(), 200);
		assert!(response.text().contains("does not exist"));

		assert_eq!(db::list_all(&db).await.unwrap().len(), 5);
	}

	#[sqlx::test]
	async fn test_invalid_create_rerenders_form(db: Database) {
		let app = app(db.clone()).await;

		let response = app
			.post("/create")
			.form(&json!({
				"title": "",
				"author": "B",
				"text": "C",
			}))
			.await;

		assert_eq!(response.status_code(), 200);
		assert!(response.text().contains("This field is required."));
		// the submitted values survive the round trip
		assert!(response.text().contains("value=\"B\""));

		// a field that is absent altogether fails the same way
		let response = app
			.post("/create")
			.form(&json!({
				"title": "A",
				"author": "B",
			}))
			.await;

		assert_eq!(response.status_code(), 200);
		assert!(response.text().contains("This field is required."));

		assert_eq!(db::list_all(&db).await.unwrap().len(), 5);
	}

	#[sqlx::test]
	async fn test_listing_routes(db: Database) {
		let app = app(db).await;

		for path in ["/", "/blogs"] {
			let response = app.get(path).await;

			assert_eq!(response.status_code(), 200);
			assert!(response.text().contains("Create a new blog"));
		}
	}

	#[sqlx::test]
	async fn test_delete_missing_id_still_redirects(db: Database) {
		let app = app(db.clone()).await;

		let response = app.get("/delete/999").await;

		assert_eq!(response.status_code(), 302);
		assert_eq!(db::list_all(&db).await.unwrap().len(), 5);
	}

	#[sqlx::test]
	async fn test_empty_create_form(db: Database) {
		let app = app(db).await;

		let response = app.get("/create").await;

		assert_eq!(response.status_code(), 200);
		assert!(!response.text().contains("This field is required."));
	}

	#[sqlx::test]
	async fn test_rendered_content_is_escaped(db: Database) {
		let app = app(db).await;

		let response = app
			.post("/create")
			.form(&json!({
				"title": "<script>alert(1)</script>",
				"author": "eve",
				"text": "a & b",
			}))
			.await;

		assert_eq!(response.status_code(), 302);

		let page = app.get("/blogs").await.text();

		assert!(!page.contains("<script>alert"));
		assert!(page.contains("&lt;script&gt;"));
	}
}
