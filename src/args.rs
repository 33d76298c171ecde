//! These structs provide the CLI interface for the expenses CLI.

use crate::commands::OutputFormat;
use crate::model::Amount;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// expenses: A command-line client for tracking expenses.
///
/// All persistence lives in a remote expenses API that exposes CRUD endpoints at `/expenses`.
/// This program holds no local data beyond its configuration file: every command fetches a
/// fresh snapshot of the collection, so what you see always reflects the store at the time of
/// the call.
///
/// Run `expenses init --api-url <URL>` once to create the data directory and point the client
/// at your server, then use `add`, `list`, `summary`, `update` and `delete`.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the data directory and initialize the configuration file.
    ///
    /// This is the first command you should run when setting up the expenses CLI. Decide what
    /// directory you want configuration stored in and pass it as --expenses-home (by default
    /// it will be $HOME/expenses), and pass the base URL of your expenses API server as
    /// --api-url.
    Init(InitArgs),
    /// Add a new expense.
    ///
    /// The candidate is checked against the current collection before submission: an expense
    /// with the same date, amount, category and (case-insensitive) description as an existing
    /// record is considered a duplicate and is not submitted. The server performs its own
    /// duplicate check as well, and its verdict wins.
    Add(AddArgs),
    /// List the expenses currently in the store.
    List(ListArgs),
    /// Show the total of all expenses and a subtotal for each category.
    Summary(SummaryArgs),
    /// Replace an expense record by id. All fields must be provided; there is no partial
    /// update.
    Update(UpdateArgs),
    /// Delete one or more expenses by id.
    Delete(DeleteArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where expenses configuration is held. Defaults to ~/expenses
    #[arg(long, env = "EXPENSES_HOME", default_value_t = default_expenses_home())]
    expenses_home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, expenses_home: PathBuf) -> Self {
        Self {
            log_level,
            expenses_home: expenses_home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn expenses_home(&self) -> &DisplayPath {
        &self.expenses_home
    }
}

/// Args for the `expenses init` command.
#[derive(Debug, Parser, Clone)]
pub struct InitArgs {
    /// The base URL of the expenses API server, e.g. http://localhost:4000
    #[arg(long)]
    pub api_url: String,
}

impl InitArgs {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }
}

/// Args for the `expenses add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// The calendar date of the expense in YYYY-MM-DD form.
    #[arg(long)]
    pub date: String,

    /// A free-text label for the expense.
    #[arg(long)]
    pub description: String,

    /// The amount spent, e.g. 12.50
    #[arg(long)]
    pub amount: Amount,

    /// The category label, e.g. Food, Transport, Utilities, Entertainment.
    #[arg(long)]
    pub category: String,
}

impl AddArgs {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount: Amount::new(amount),
            category: category.into(),
        }
    }
}

/// Args for the `expenses list` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct ListArgs {
    /// The output format for the expense table.
    #[arg(long, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ListArgs {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

/// Args for the `expenses summary` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct SummaryArgs {}

/// Args for the `expenses update` command.
#[derive(Debug, Parser, Clone)]
pub struct UpdateArgs {
    /// The id of the expense to replace.
    pub id: String,

    /// The calendar date of the expense in YYYY-MM-DD form.
    #[arg(long)]
    pub date: String,

    /// A free-text label for the expense.
    #[arg(long)]
    pub description: String,

    /// The amount spent, e.g. 12.50
    #[arg(long)]
    pub amount: Amount,

    /// The category label, e.g. Food, Transport, Utilities, Entertainment.
    #[arg(long)]
    pub category: String,
}

impl UpdateArgs {
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            description: description.into(),
            amount: Amount::new(amount),
            category: category.into(),
        }
    }
}

/// Args for the `expenses delete` command.
#[derive(Debug, Parser, Clone)]
pub struct DeleteArgs {
    /// The ids of the expenses to delete.
    #[arg(required = true)]
    pub ids: Vec<String>,
}

impl DeleteArgs {
    pub fn new<S: Into<String>>(ids: impl IntoIterator<Item = S>) -> Self {
        Self {
            ids: ids.into_iter().map(|s| s.into()).collect(),
        }
    }
}

fn default_expenses_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("expenses"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --expenses-home or EXPENSES_HOME instead of relying on the \
                default expenses home directory. If you continue using the program right now, \
                you may have problems!",
            );
            PathBuf::from("expenses")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
