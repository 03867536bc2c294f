use chrono::NaiveDate;
use sqlx::{Executor, Postgres};

use crate::models::Flashcard;

pub async fn list_flashcards<'e, E>(executor: E) -> Result<Vec<Flashcard>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, question, answer, box, next_review
            FROM flashcards
            ORDER BY id
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_flashcard<'e, E>(executor: E, id: i64) -> Result<Option<Flashcard>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, question, answer, box, next_review
            FROM flashcards
            WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Insert a new card. The database assigns the id; box and next_review
/// take their column defaults (box 1, due today).
pub async fn insert_flashcard<'e, E>(
    executor: E,
    question: &str,
    answer: &str,
) -> Result<Flashcard, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO flashcards (question, answer)
            VALUES ($1, $2)
            RETURNING id, question, answer, box, next_review
        "#,
    )
    .bind(question)
    .bind(answer)
    .fetch_one(executor)
    .await
}

/// Overwrite box and next_review for a card in a single statement.
///
/// Returns `None` when the id does not exist.
pub async fn update_flashcard_review<'e, E>(
    executor: E,
    id: i64,
    box_number: i16,
    next_review: NaiveDate,
) -> Result<Option<Flashcard>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            UPDATE flashcards
            SET box = $2, next_review = $3
            WHERE id = $1
            RETURNING id, question, answer, box, next_review
        "#,
    )
    .bind(id)
    .bind(box_number)
    .bind(next_review)
    .fetch_optional(executor)
    .await
}

/// Delete a card, reporting whether a row was actually removed.
pub async fn delete_flashcard<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM flashcards
            WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}
