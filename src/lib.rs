mod api;
pub mod args;
pub mod commands;
mod config;
pub mod dedup;
mod error;
pub mod model;
pub mod summary;
mod utils;

pub use api::CreateOutcome;
pub use api::ExpenseStore;
pub use api::Mode;
pub use config::Config;
pub use error::Error;
pub use error::Result;
