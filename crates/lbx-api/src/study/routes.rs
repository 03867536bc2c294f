use axum::{Json, Router, extract::State, routing::get};

use crate::{ApiError, ApiState};

use super::session::{StudySession, build_session};

/// Create the study routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/study/session", get(get_session))
}

/// Get the current study session: the card to show plus box counts
async fn get_session(State(state): State<ApiState>) -> Result<Json<StudySession>, ApiError> {
    let cards = state.store.list().await?;
    Ok(Json(build_session(cards)))
}
