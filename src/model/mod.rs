mod amount;
mod expense;

pub use amount::Amount;
pub use expense::Expense;
