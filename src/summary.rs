//! Aggregates an expense snapshot into a grand total and per-category subtotals.

use crate::model::Expense;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// The aggregate view of an expense collection.
///
/// Totals are accumulated as `Decimal` and never rounded here; rendering to two decimal
/// places happens at the display boundary, so callers may re-aggregate without compounding
/// rounding error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Sum of every parseable amount. Zero when the input is empty or nothing parses.
    pub total_amount: Decimal,

    /// Subtotals keyed by category label. Contains exactly the categories observed among
    /// records with parseable amounts.
    pub category_totals: BTreeMap<String, Decimal>,
}

/// Computes the [`Summary`] of `expenses` in a single pass.
///
/// A record whose amount does not parse to a number contributes to neither the grand total
/// nor its category subtotal; the record itself remains visible in listings.
pub fn summarize(expenses: &[Expense]) -> Summary {
    let mut summary = Summary::default();
    for expense in expenses {
        let Some(amount) = expense.amount.value() else {
            continue;
        };
        summary.total_amount += amount;
        *summary
            .category_totals
            .entry(expense.category.clone())
            .or_insert(Decimal::ZERO) += amount;
    }
    summary
}
