#![warn(clippy::pedantic)]

mod db;
mod error;
mod model;
mod route;
mod view;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::Error;

pub type Database = sqlx::Pool<sqlx::Sqlite>;
pub type AppState = State;

/// The shared application state.
///
/// The blog only needs the connection pool; anything else a handler
/// depends on would be added here and extracted with [`axum::extract::State`].
#[derive(Clone, axum::extract::FromRef)]
pub struct State {
	pub database: Database,
}

fn router(state: State) -> Router {
	route::routes()
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt::init();
	dotenvy::dotenv().ok();

	let database_url = std::env::var("DATABASE_URL")
		.unwrap_or_else(|_| "sqlite://db/blog.db?mode=rwc".to_string());

	// `mode=rwc` creates the database file, but not its parent directory.
	if let Some(dir) = db::file_parent(&database_url) {
		std::fs::create_dir_all(dir).expect("failed to create database directory");
	}

	let state = State {
		database: Database::connect(&database_url)
			.await
			.expect("failed to connect to database"),
	};

	db::setup(&state.database)
		.await
		.expect("failed to set up database");

	let app = router(state);

	let port = std::env::var("PORT").map_or_else(
		|_| 3000,
		|port| port.parse().expect("PORT must be a number"),
	);

	let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
		.await
		.expect("failed to bind to port");

	tracing::info!("listening on port {}", port);

	axum::serve(listener, app).await.unwrap();
}
