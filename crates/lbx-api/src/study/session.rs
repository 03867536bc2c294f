//! Study session assembly.
//!
//! The "current card" is simply the first card in list order, with no
//! due-date filter. This mirrors the long-standing study-mode behavior and
//! is kept as the documented contract; filtering by `next_review <= today`
//! would be the stricter Leitner reading, but changing it is a product
//! decision, not a bug fix to slip in here.

use serde::Serialize;

use lbx_db::models::Flashcard;

/// Snapshot handed to the study view: the card to show plus how many
/// cards sit in each box.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub current: Option<Flashcard>,
    pub box_counts: [usize; 5],
    pub total: usize,
}

/// Pick the card to study next: element 0 of the listing.
pub fn select_current(cards: &[Flashcard]) -> Option<&Flashcard> {
    cards.first()
}

/// Count cards per box, index 0 holding box 1.
pub fn box_counts(cards: &[Flashcard]) -> [usize; 5] {
    let mut counts = [0; 5];
    for card in cards {
        counts[(card.box_number - 1) as usize] += 1;
    }
    counts
}

/// Build the session snapshot for a card listing.
pub fn build_session(cards: Vec<Flashcard>) -> StudySession {
    let box_counts = box_counts(&cards);
    let total = cards.len();
    let current = select_current(&cards).cloned();

    StudySession {
        current,
        box_counts,
        total,
    }
}
