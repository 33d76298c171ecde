//! Update command handler.

use crate::api::{self, Mode};
use crate::args::UpdateArgs;
use crate::commands::Out;
use crate::model::Expense;
use crate::{Config, Result};
use anyhow::Context;
use chrono::NaiveDate;

/// Replaces the full record stored under `id`. Every field of the stored record takes the
/// submitted value; there is no partial patch.
pub async fn update(config: Config, mode: Mode, args: UpdateArgs) -> Result<Out<Expense>> {
    NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", args.date))?;

    let fields = Expense {
        id: Some(args.id.clone()),
        date: args.date,
        description: args.description,
        amount: args.amount,
        category: args.category,
    };

    let mut store = api::store(&config, mode)?;
    let updated = store.update(&args.id, &fields).await?;
    let message = format!("Updated expense {}", args.id);
    Ok(Out::new(message, updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amount;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_update_replaces_the_record() {
        let env = TestEnv::new().await;
        let args = UpdateArgs::new("3", "2025-07-04", "Gas bill", "70.00", "Utilities");

        let out = update(env.config(), Mode::Test, args).await.unwrap();

        assert!(out.message().contains("Updated expense 3"));
        let updated = out.structure().unwrap();
        assert_eq!(updated.id.as_deref(), Some("3"));
        assert_eq!(updated.description, "Gas bill");
        assert_eq!(updated.amount, Amount::new("70.00"));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_an_error() {
        let env = TestEnv::new().await;
        let args = UpdateArgs::new("999", "2025-07-04", "Gas bill", "70.00", "Utilities");
        assert!(update(env.config(), Mode::Test, args).await.is_err());
    }

    #[tokio::test]
    async fn test_update_rejects_a_bad_date() {
        let env = TestEnv::new().await;
        let args = UpdateArgs::new("3", "someday", "Gas bill", "70.00", "Utilities");
        assert!(update(env.config(), Mode::Test, args).await.is_err());
    }
}
