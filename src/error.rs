/// Error type for the application.
///
/// Persistence failures never reach the client: route handlers log them
/// and fall back to an empty or absent result, so the Display output can
/// carry the full database detail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}
