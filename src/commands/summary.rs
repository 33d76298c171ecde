//! Summary command handler.

use crate::api::{self, Mode};
use crate::commands::Out;
use crate::summary::{summarize, Summary};
use crate::{Config, Result};
use format_num::format_num;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Fetches the snapshot and renders the grand total and per-category subtotals.
///
/// Rounding to two decimal places happens here, at the display boundary; the aggregator
/// itself never rounds.
pub async fn summary(config: Config, mode: Mode) -> Result<Out<Summary>> {
    let mut store = api::store(&config, mode)?;
    let expenses = store.list().await?;
    let summary = summarize(&expenses);

    let mut message = format!("Total Expenses: {}", display_amount(summary.total_amount));
    for (category, subtotal) in &summary.category_totals {
        message.push_str(&format!("\n  {category}: {}", display_amount(*subtotal)));
    }
    Ok(Out::new(message, summary))
}

/// Formats a decimal amount for display, e.g. `$1,234.50`.
fn display_amount(amount: Decimal) -> String {
    format!(
        "${}",
        format_num!(",.2", amount.to_f64().unwrap_or_default())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;
    use std::str::FromStr;

    #[tokio::test]
    async fn test_summary_over_the_seed_data() {
        let env = TestEnv::new().await;
        let out = summary(env.config(), Mode::Test).await.unwrap();

        // Seed data sums to 308.17: Food 130.19, Transport 52.40, Utilities 107.08,
        // Entertainment 18.50
        assert!(out.message().contains("Total Expenses: $308.17"));
        assert!(out.message().contains("Food: $130.19"));
        assert!(out.message().contains("Transport: $52.40"));
        assert!(out.message().contains("Utilities: $107.08"));
        assert!(out.message().contains("Entertainment: $18.50"));

        let structure = out.structure().unwrap();
        assert_eq!(structure.total_amount, Decimal::from_str("308.17").unwrap());
        assert_eq!(structure.category_totals.len(), 4);
    }

    #[test]
    fn test_display_amount_rounds_to_two_decimals() {
        assert_eq!(display_amount(Decimal::from_str("6.666").unwrap()), "$6.67");
        assert_eq!(display_amount(Decimal::ZERO), "$0.00");
        assert_eq!(
            display_amount(Decimal::from_str("1234.5").unwrap()),
            "$1,234.50"
        );
    }
}
