//! The `ExpenseStore` collaborator: the remote CRUD API that owns all persistence.
//!
//! The client never stores expenses itself. It fetches a full snapshot with `list`, mutates
//! through `create`/`update`/`delete`, and re-fetches after every mutation.

mod http;
mod test_store;

use crate::model::Expense;
use crate::{Config, Result};
use serde::{Deserialize, Serialize};

pub(crate) use http::HttpStore;
pub(crate) use test_store::TestStore;

/// The environment variable that switches the program to the in-memory store.
pub const IN_TEST_MODE_ENV: &str = "EXPENSES_IN_TEST_MODE";

/// Selects the store implementation backing the commands.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The real expenses API, reached over HTTP at the configured base URL.
    #[default]
    Http,
    /// An in-memory store seeded with sample data, so the whole app can run without a server.
    Test,
}

impl Mode {
    /// Returns `Mode::Test` when `EXPENSES_IN_TEST_MODE` is set and non-zero in length,
    /// otherwise `Mode::Http`.
    pub fn from_env() -> Self {
        match std::env::var(IN_TEST_MODE_ENV) {
            Ok(value) if !value.is_empty() => Mode::Test,
            _ => Mode::Http,
        }
    }
}

/// The store's response to a batch create.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateOutcome {
    /// A human-readable success indicator.
    #[serde(default)]
    pub message: String,

    /// Records the store judged to be duplicates within the submitted batch. Callers must
    /// prefer this verdict over any local duplicate guess, because the local snapshot may
    /// have been stale at submission time.
    #[serde(default, rename = "flaggedDuplicates")]
    pub flagged_duplicates: Vec<Expense>,
}

/// The full-collection CRUD contract of the remote expenses API.
#[async_trait::async_trait]
pub trait ExpenseStore {
    /// Fetches the full collection snapshot.
    async fn list(&mut self) -> Result<Vec<Expense>>;

    /// Creates one or more new expenses and returns the store's message along with its own
    /// duplicate verdict.
    async fn create(&mut self, batch: Vec<Expense>) -> Result<CreateOutcome>;

    /// Replaces the full record stored under `id`. There is no partial patch.
    async fn update(&mut self, id: &str, expense: &Expense) -> Result<Expense>;

    /// Deletes the record stored under `id`.
    async fn delete(&mut self, id: &str) -> Result<()>;
}

/// Creates the `ExpenseStore` for the given mode.
pub(crate) fn store(config: &Config, mode: Mode) -> Result<Box<dyn ExpenseStore + Send>> {
    Ok(match mode {
        Mode::Http => Box::new(HttpStore::new(config)?),
        Mode::Test => Box::new(TestStore::default()),
    })
}
