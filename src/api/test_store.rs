//! Implements the very simple `ExpenseStore` trait using in-memory data for testing purposes.
//!
//! Note: this is compiled even in the "production" version of this app so that we can run the
//! whole app, top-to-bottom, without a running expenses API server.

use crate::api::{CreateOutcome, ExpenseStore};
use crate::model::{Amount, Expense};
use crate::{dedup, Result};
use anyhow::Context;
use std::io::Cursor;

/// The success indicator the real server sends when a create batch was processed.
const PROCESSED_MESSAGE: &str = "Expenses processed successfully";

/// An implementation of the `ExpenseStore` trait that does not use the network. It holds the
/// collection in memory and, by default, is seeded with some existing data.
pub(crate) struct TestStore {
    expenses: Vec<Expense>,
    next_id: u32,
}

impl TestStore {
    /// Create a new `TestStore` holding `expenses`. Ids for created records continue from one
    /// past the seed count.
    pub(crate) fn new(expenses: Vec<Expense>) -> Self {
        let next_id = expenses.len() as u32 + 1;
        Self { expenses, next_id }
    }

    fn assign_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }
}

impl Default for TestStore {
    /// Loads seed data from this module.
    fn default() -> Self {
        Self::new(seed_expenses().unwrap())
    }
}

#[async_trait::async_trait]
impl ExpenseStore for TestStore {
    async fn list(&mut self) -> Result<Vec<Expense>> {
        Ok(self.expenses.clone())
    }

    async fn create(&mut self, batch: Vec<Expense>) -> Result<CreateOutcome> {
        // Reproduces the server-side verdict: a record is flagged if it duplicates either a
        // stored record or an earlier record accepted from the same batch.
        let mut flagged = Vec::new();
        for mut expense in batch {
            if dedup::is_duplicate(&expense, &self.expenses) {
                flagged.push(expense);
                continue;
            }
            expense.id = Some(self.assign_id());
            self.expenses.push(expense);
        }
        Ok(CreateOutcome {
            message: PROCESSED_MESSAGE.to_string(),
            flagged_duplicates: flagged,
        })
    }

    async fn update(&mut self, id: &str, expense: &Expense) -> Result<Expense> {
        let found = self
            .expenses
            .iter_mut()
            .find(|e| e.id.as_deref() == Some(id))
            .with_context(|| format!("No expense with id '{id}'"))?;
        *found = Expense {
            id: Some(id.to_string()),
            ..expense.clone()
        };
        Ok(found.clone())
    }

    async fn delete(&mut self, id: &str) -> Result<()> {
        let ix = self
            .expenses
            .iter()
            .position(|e| e.id.as_deref() == Some(id))
            .with_context(|| format!("No expense with id '{id}'"))?;
        self.expenses.remove(ix);
        Ok(())
    }
}

/// Provides the seed data from this module.
fn seed_expenses() -> Result<Vec<Expense>> {
    load_csv(EXPENSE_DATA)
}

/// Loads expense records from a CSV-formatted string with columns
/// id, date, description, amount, category.
fn load_csv(csv_data: &str) -> Result<Vec<Expense>> {
    let bytes = csv_data.as_bytes();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(Cursor::new(bytes));

    let mut expenses = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let field = |ix: usize| record.get(ix).unwrap_or_default().to_string();
        expenses.push(Expense {
            id: Some(field(0)),
            date: field(1),
            description: field(2),
            amount: Amount::new(field(3)),
            category: field(4),
        });
    }
    Ok(expenses)
}

/// Seed expense data.
const EXPENSE_DATA: &str = r##"id,date,description,amount,category
1,2025-07-01,Weekly groceries,82.45,Food
2,2025-07-02,Monthly bus pass,25.00,Transport
3,2025-07-03,Electric bill,61.20,Utilities
4,2025-07-05,Movie night,18.50,Entertainment
5,2025-07-06,Coffee beans,14.99,Food
6,2025-07-08,Water bill,45.88,Utilities
7,2025-07-09,Takeout dinner,32.75,Food
8,2025-07-11,Rideshare to airport,27.40,Transport
"##;
