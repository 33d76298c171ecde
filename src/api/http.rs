//! Implements the `ExpenseStore` trait over HTTP using reqwest.

use crate::api::{CreateOutcome, ExpenseStore};
use crate::model::Expense;
use crate::{Config, Result};
use anyhow::Context;
use reqwest::{Client, Response};
use tracing::trace;
use url::Url;

/// Implements the `ExpenseStore` trait against the expenses API at the configured base URL.
/// Requests and responses are JSON.
pub(crate) struct HttpStore {
    client: Client,
    base_url: Url,
}

impl HttpStore {
    pub(crate) fn new(config: &Config) -> Result<Self> {
        let mut base_url = config.api_url().clone();
        // Url::join treats a path without a trailing slash as a file and would replace its
        // last segment, so normalize here.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// The URL of the full collection: `{base}/expenses`.
    fn collection_url(&self) -> Result<Url> {
        self.base_url
            .join("expenses")
            .context("Unable to construct the expenses collection URL")
    }

    /// The URL of a single record: `{base}/expenses/{id}`.
    fn record_url(&self, id: &str) -> Result<Url> {
        self.base_url
            .join(&format!("expenses/{id}"))
            .with_context(|| format!("Unable to construct the URL for expense '{id}'"))
    }
}

#[async_trait::async_trait]
impl ExpenseStore for HttpStore {
    async fn list(&mut self) -> Result<Vec<Expense>> {
        let url = self.collection_url()?;
        trace!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to reach the expenses API at {url}"))?;
        let response = check_status(response, "fetch expenses").await?;
        response
            .json()
            .await
            .context("Failed to parse the expense list response")
    }

    async fn create(&mut self, batch: Vec<Expense>) -> Result<CreateOutcome> {
        let url = self.collection_url()?;
        trace!("POST {url}");
        // The API accepts a JSON array of one or more new expenses.
        let response = self
            .client
            .post(url.clone())
            .json(&batch)
            .send()
            .await
            .with_context(|| format!("Failed to reach the expenses API at {url}"))?;
        let response = check_status(response, "create expenses").await?;
        response
            .json()
            .await
            .context("Failed to parse the create response")
    }

    async fn update(&mut self, id: &str, expense: &Expense) -> Result<Expense> {
        let url = self.record_url(id)?;
        trace!("PUT {url}");
        let response = self
            .client
            .put(url.clone())
            .json(expense)
            .send()
            .await
            .with_context(|| format!("Failed to reach the expenses API at {url}"))?;
        let response = check_status(response, &format!("update expense '{id}'")).await?;
        response
            .json()
            .await
            .context("Failed to parse the update response")
    }

    async fn delete(&mut self, id: &str) -> Result<()> {
        let url = self.record_url(id)?;
        trace!("DELETE {url}");
        let response = self
            .client
            .delete(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to reach the expenses API at {url}"))?;
        let _ = check_status(response, &format!("delete expense '{id}'")).await?;
        Ok(())
    }
}

/// Maps a non-2xx response to an error, capturing the body for context.
async fn check_status(response: Response, action: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read response body".to_string());
    anyhow::bail!("Failed to {action}: the API returned {status}: {body}")
}
