//! Storage backends for flashcards.
//!
//! [`FlashcardStore`] is the single interface the API layer talks to. The
//! two implementations are behaviorally interchangeable: a volatile
//! in-memory map and a Postgres table, selected explicitly at startup and
//! passed into the router state rather than held as a global.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::StoreError;
use crate::models::{Flashcard, NewFlashcard};
use crate::repositories::flashcard as repo;

/// CRUD contract for flashcard persistence.
///
/// `box_number` and `next_review` are only ever written together through
/// [`FlashcardStore::update_review`]; there is no partial update.
#[async_trait]
pub trait FlashcardStore: Send + Sync {
    /// All cards in creation (id) order.
    async fn list(&self) -> Result<Vec<Flashcard>, StoreError>;

    /// A single card by id.
    async fn get(&self, id: i64) -> Result<Flashcard, StoreError>;

    /// Create a card in box 1, due today, with a fresh unique id.
    async fn create(&self, new: NewFlashcard) -> Result<Flashcard, StoreError>;

    /// Atomically overwrite a card's box and next review date.
    async fn update_review(
        &self,
        id: i64,
        box_number: i16,
        next_review: NaiveDate,
    ) -> Result<Flashcard, StoreError>;

    /// Remove a card.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

/// Volatile in-memory store.
///
/// A `BTreeMap` keyed by id gives stable creation-order listing; the mutex
/// keeps the id counter monotonic under concurrent creates.
#[derive(Debug, Default)]
pub struct MemStore {
    inner: Mutex<MemInner>,
}

#[derive(Debug)]
struct MemInner {
    cards: BTreeMap<i64, Flashcard>,
    next_id: i64,
}

impl Default for MemInner {
    fn default() -> Self {
        Self {
            cards: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FlashcardStore for MemStore {
    async fn list(&self) -> Result<Vec<Flashcard>, StoreError> {
        let inner = self.inner.lock().expect("mem store poisoned");
        Ok(inner.cards.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Flashcard, StoreError> {
        let inner = self.inner.lock().expect("mem store poisoned");
        inner.cards.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn create(&self, new: NewFlashcard) -> Result<Flashcard, StoreError> {
        new.validate()?;

        let mut inner = self.inner.lock().expect("mem store poisoned");
        let id = inner.next_id;
        inner.next_id += 1;

        let card = Flashcard {
            id,
            question: new.question,
            answer: new.answer,
            box_number: 1,
            next_review: Utc::now().date_naive(),
        };
        inner.cards.insert(id, card.clone());

        Ok(card)
    }

    async fn update_review(
        &self,
        id: i64,
        box_number: i16,
        next_review: NaiveDate,
    ) -> Result<Flashcard, StoreError> {
        let mut inner = self.inner.lock().expect("mem store poisoned");
        let card = inner.cards.get_mut(&id).ok_or(StoreError::NotFound)?;

        card.box_number = box_number;
        card.next_review = next_review;

        Ok(card.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("mem store poisoned");
        inner
            .cards
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

/// Durable Postgres-backed store.
///
/// Id uniqueness comes from the `BIGSERIAL` key; each update is a single
/// `UPDATE` statement, so row-level atomicity covers the box/next_review
/// pair without explicit locking.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FlashcardStore for PgStore {
    async fn list(&self) -> Result<Vec<Flashcard>, StoreError> {
        Ok(repo::list_flashcards(&self.pool).await?)
    }

    async fn get(&self, id: i64) -> Result<Flashcard, StoreError> {
        repo::get_flashcard(&self.pool, id)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, new: NewFlashcard) -> Result<Flashcard, StoreError> {
        new.validate()?;
        Ok(repo::insert_flashcard(&self.pool, &new.question, &new.answer).await?)
    }

    async fn update_review(
        &self,
        id: i64,
        box_number: i16,
        next_review: NaiveDate,
    ) -> Result<Flashcard, StoreError> {
        repo::update_flashcard_review(&self.pool, id, box_number, next_review)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        if repo::delete_flashcard(&self.pool, id).await? {
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }
}
