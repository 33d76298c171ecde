//! Advisory duplicate detection for candidate expenses.
//!
//! The local check is advisory only: the snapshot it runs against may be stale relative to
//! concurrent writers, so callers must re-verify against the store's own verdict after
//! submission (the `flagged_duplicates` field of the create response) and prefer the server's
//! answer over the local guess.

use crate::model::Expense;

/// Returns true if `candidate` matches any record in `existing`.
///
/// The rule is a conjunction over all four fields: `date` exactly equal, `amount` exactly
/// text-equal (no numeric tolerance), `category` exactly equal, and `description` equal after
/// lowercasing both sides. An empty `existing` list is never a duplicate. A missing
/// description compares as the empty string.
pub fn is_duplicate(candidate: &Expense, existing: &[Expense]) -> bool {
    existing.iter().any(|e| is_exact_match(candidate, e))
}

/// The four-field equality rule behind [`is_duplicate`].
pub fn is_exact_match(a: &Expense, b: &Expense) -> bool {
    a.date == b.date
        && a.amount == b.amount
        && a.category == b.category
        && fold_eq(&a.description, &b.description)
}

/// Returns true if the store flagged a record corresponding to `candidate` in its create
/// response. Flagged records are correlated back to the submission on `date` plus
/// case-insensitive `description`.
pub fn matches_flagged(candidate: &Expense, flagged: &[Expense]) -> bool {
    flagged
        .iter()
        .any(|e| e.date == candidate.date && fold_eq(&e.description, &candidate.description))
}

fn fold_eq(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
