//! Add command handler.

use crate::api::{self, Mode};
use crate::args::AddArgs;
use crate::commands::Out;
use crate::model::Expense;
use crate::{dedup, Config, Result};
use anyhow::Context;
use chrono::NaiveDate;
use tracing::debug;

/// Adds a new expense to the store.
///
/// The candidate is first checked against a fresh snapshot with the advisory duplicate rule;
/// a local hit blocks the submission before any create call is made. Otherwise the expense is
/// submitted and the store's own duplicate verdict is reconciled with the local guess, the
/// store's answer winning (the local snapshot may have been stale relative to concurrent
/// writers). After a successful create the snapshot is re-fetched so the returned record
/// carries its store-assigned id.
///
/// A detected duplicate, local or remote, is not an error: the command succeeds with an
/// advisory message and no structured data.
pub async fn add(config: Config, mode: Mode, args: AddArgs) -> Result<Out<Expense>> {
    // The date is stored as a string but must be a real ISO-8601 calendar date.
    NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", args.date))?;

    let candidate = Expense {
        id: None,
        date: args.date,
        description: args.description,
        amount: args.amount,
        category: args.category,
    };

    let mut store = api::store(&config, mode)?;
    let existing = store.list().await?;
    if dedup::is_duplicate(&candidate, &existing) {
        return Ok(Out::new_message(
            "Duplicate expense detected! Nothing was submitted.",
        ));
    }

    let outcome = store.create(vec![candidate.clone()]).await?;
    debug!("Store response: {}", outcome.message);

    if dedup::matches_flagged(&candidate, &outcome.flagged_duplicates) {
        return Ok(Out::new_message(
            "This expense is a duplicate! The store rejected it.",
        ));
    }

    // Refresh after the mutation and find the stored copy of the submission.
    let refreshed = store.list().await?;
    let stored = refreshed
        .into_iter()
        .rev()
        .find(|e| dedup::is_exact_match(e, &candidate));

    match stored {
        Some(stored) => {
            let id = stored.id.clone().unwrap_or_default();
            Ok(Out::new(format!("Added expense with id: {id}"), stored))
        }
        None => Ok(Out::new("Added expense".to_string(), candidate)),
    }
}
