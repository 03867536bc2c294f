use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use lbx_db::models::{Flashcard, NewFlashcard};

use crate::{ApiError, ApiState};

/// Create the flashcard routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/flashcards", get(list_flashcards))
        .route("/flashcards", post(create_flashcard))
        .route("/flashcards/{id}", get(get_flashcard))
        .route("/flashcards/{id}", put(update_flashcard))
        .route("/flashcards/{id}", delete(delete_flashcard))
        .route("/flashcards/{id}/review", post(review_flashcard))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateFlashcard {
    #[serde(rename = "box")]
    box_number: i16,
    next_review: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct ReviewSubmission {
    correct: bool,
}

/// Box and date checks for a raw update.
///
/// The scheduler is never invoked with an out-of-range box; this is the
/// guard in front of it for client-supplied state.
fn validate_update(payload: &UpdateFlashcard, today: NaiveDate) -> Result<(), ApiError> {
    if !(lbx_srs::BOX_MIN..=lbx_srs::BOX_MAX).contains(&payload.box_number) {
        return Err(ApiError::Validation(format!(
            "Box must be between {} and {}",
            lbx_srs::BOX_MIN,
            lbx_srs::BOX_MAX
        )));
    }
    // next_review only moves forward
    if payload.next_review < today {
        return Err(ApiError::Validation(
            "nextReview must not be in the past".to_string(),
        ));
    }
    Ok(())
}

/// Get all flashcards
async fn list_flashcards(State(state): State<ApiState>) -> Result<Json<Vec<Flashcard>>, ApiError> {
    let cards = state.store.list().await?;
    Ok(Json(cards))
}

/// Get a flashcard by ID
async fn get_flashcard(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<Flashcard>, ApiError> {
    let card = state.store.get(id).await?;
    Ok(Json(card))
}

/// Create a new flashcard, starting in box 1 and due today
async fn create_flashcard(
    State(state): State<ApiState>,
    Json(payload): Json<NewFlashcard>,
) -> Result<(StatusCode, Json<Flashcard>), ApiError> {
    let card = state.store.create(payload).await?;
    tracing::debug!(id = card.id, "flashcard created");
    Ok((StatusCode::CREATED, Json(card)))
}

/// Overwrite a flashcard's box and next review date
async fn update_flashcard(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateFlashcard>,
) -> Result<Json<Flashcard>, ApiError> {
    validate_update(&payload, Utc::now().date_naive())?;

    let card = state
        .store
        .update_review(id, payload.box_number, payload.next_review)
        .await?;
    Ok(Json(card))
}

/// Delete a flashcard
async fn delete_flashcard(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Apply a review outcome to a flashcard.
///
/// Runs the Leitner scheduler server-side: a correct answer promotes the
/// card one box (capped at 5), a wrong answer sends it back to box 1, and
/// the next review date follows the interval of the new box. Box and date
/// are persisted as one write.
async fn review_flashcard(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReviewSubmission>,
) -> Result<Json<Flashcard>, ApiError> {
    let card = state.store.get(id).await?;

    let (box_number, next_review) =
        lbx_srs::compute_next_state(card.box_number, payload.correct, Utc::now().date_naive());

    let updated = state.store.update_review(id, box_number, next_review).await?;
    tracing::debug!(
        id,
        correct = payload.correct,
        from_box = card.box_number,
        to_box = box_number,
        "flashcard reviewed"
    );

    Ok(Json(updated))
}
