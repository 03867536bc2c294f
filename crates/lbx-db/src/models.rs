use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Flashcard model - a question/answer pair moving through the Leitner boxes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    /// Unique flashcard identifier, assigned by the store at creation
    pub id: i64,
    /// Question text (front of the card)
    pub question: String,
    /// Answer text (back of the card)
    pub answer: String,
    /// Leitner box in [1, 5]; new cards start in box 1
    #[serde(rename = "box")]
    #[sqlx(rename = "box")]
    pub box_number: i16,
    /// Date the card is next due for review
    pub next_review: NaiveDate,
}

/// Fields supplied by the client when creating a flashcard.
///
/// Box and review date are never client-supplied at creation; every new
/// card starts in box 1, due today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFlashcard {
    pub question: String,
    pub answer: String,
}

impl NewFlashcard {
    /// Reject empty question or answer text.
    pub fn validate(&self) -> Result<(), crate::StoreError> {
        if self.question.is_empty() {
            return Err(crate::StoreError::Validation(
                "Question is required".to_string(),
            ));
        }
        if self.answer.is_empty() {
            return Err(crate::StoreError::Validation(
                "Answer is required".to_string(),
            ));
        }
        Ok(())
    }
}
