//! Delete command handler.

use crate::api::{self, Mode};
use crate::args::DeleteArgs;
use crate::commands::Out;
use crate::{Config, Result};

/// Deletes one or more expenses by id.
///
/// Each id is an independent call to the store; the first failure stops the run, leaving any
/// earlier deletions in place.
pub async fn delete(config: Config, mode: Mode, args: DeleteArgs) -> Result<Out<Vec<String>>> {
    let mut store = api::store(&config, mode)?;
    let mut deleted = Vec::new();
    for id in &args.ids {
        store.delete(id).await?;
        deleted.push(id.clone());
    }

    let count = deleted.len();
    let message = format!(
        "Deleted {} expense{}",
        count,
        if count == 1 { "" } else { "s" }
    );
    Ok(Out::new(message, deleted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_delete_one() {
        let env = TestEnv::new().await;
        let args = DeleteArgs::new(["2"]);

        let out = delete(env.config(), Mode::Test, args).await.unwrap();

        assert!(out.message().contains("Deleted 1 expense"));
        assert_eq!(out.structure().unwrap(), &vec!["2".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_several() {
        let env = TestEnv::new().await;
        let args = DeleteArgs::new(["1", "2", "3"]);

        let out = delete(env.config(), Mode::Test, args).await.unwrap();

        assert!(out.message().contains("Deleted 3 expenses"));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_an_error() {
        let env = TestEnv::new().await;
        let args = DeleteArgs::new(["999"]);
        assert!(delete(env.config(), Mode::Test, args).await.is_err());
    }
}
