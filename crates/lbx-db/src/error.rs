use thiserror::Error;

/// Errors surfaced by a [`crate::FlashcardStore`].
///
/// Both store implementations return the same variants for the same
/// conditions so callers cannot tell them apart behaviorally.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No flashcard exists with the requested id.
    #[error("flashcard not found")]
    NotFound,
    /// Input rejected before it reached the backing store.
    #[error("{0}")]
    Validation(String),
    /// The backing store failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
