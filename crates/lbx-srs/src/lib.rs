//! Leitner scheduler for the Leitner Box API
//!
//! This crate provides the core box-promotion algorithm and review-date
//! scheduling. It is pure computation: no I/O, no clock access, fully
//! deterministic given its inputs.

use chrono::{Duration, NaiveDate};

/// Lowest proficiency box.
pub const BOX_MIN: i16 = 1;

/// Highest proficiency box.
pub const BOX_MAX: i16 = 5;

/// Review intervals in days, indexed by box number (1-based).
///
/// A card in box 1 comes back after 1 day, a card in box 5 after 30 days.
pub const INTERVAL_DAYS: [i64; 5] = [1, 2, 5, 10, 30];

/// Compute the box a card moves to after a review.
///
/// A correct answer promotes the card one box, capped at [`BOX_MAX`]
/// (answering correctly in the top box keeps it there, this is not an
/// error). An incorrect answer sends the card all the way back to box 1,
/// not one step down.
///
/// # Preconditions
///
/// `current` must be within `[BOX_MIN, BOX_MAX]`. Callers validate before
/// reaching the scheduler; this is checked with a `debug_assert!` only.
pub fn next_box(current: i16, correct: bool) -> i16 {
    debug_assert!((BOX_MIN..=BOX_MAX).contains(&current));

    if correct { BOX_MAX.min(current + 1) } else { BOX_MIN }
}

/// Look up the review interval in days for a box number.
pub fn interval_days(box_number: i16) -> i64 {
    debug_assert!((BOX_MIN..=BOX_MAX).contains(&box_number));

    INTERVAL_DAYS[(box_number - 1) as usize]
}

/// Compute a card's next state from a review outcome.
///
/// Returns the new box together with the next review date, which is `now`
/// plus the interval of the *new* box. The two values always change
/// together; callers persist them as a pair.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lbx_srs::compute_next_state;
///
/// let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let (box_number, next_review) = compute_next_state(3, true, now);
/// assert_eq!(box_number, 4);
/// assert_eq!(next_review, NaiveDate::from_ymd_opt(2024, 1, 11).unwrap());
/// ```
pub fn compute_next_state(current: i16, correct: bool, now: NaiveDate) -> (i16, NaiveDate) {
    let new_box = next_box(current, correct);
    let next_review = now + Duration::days(interval_days(new_box));

    (new_box, next_review)
}
