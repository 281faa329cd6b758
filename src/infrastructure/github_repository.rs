// GitHub-backed dataset repository implementation
use crate::application::dataset_repository::DatasetRepository;
use crate::infrastructure::config::GithubSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

const USER_AGENT: &str = concat!("motion-telemetry/", env!("CARGO_PKG_VERSION"));

/// Datasets are the `.json` files at the root of one GitHub repository;
/// identifiers are the file names without the suffix.
#[derive(Debug, Clone)]
pub struct GithubDatasetRepository {
    client: reqwest::Client,
    user: String,
    repo: String,
    branch: String,
}

#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
}

impl GithubDatasetRepository {
    pub fn new(settings: GithubSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            user: settings.user,
            repo: settings.repo,
            branch: settings.branch,
        }
    }
}

#[async_trait]
impl DatasetRepository for GithubDatasetRepository {
    async fn list_dataset_ids(&self) -> Result<Vec<String>> {
        let url = format!(
            "https://api.github.com/repos/{}/{}/contents/",
            self.user, self.repo
        );

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .context("Failed to send request to the GitHub contents API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("GitHub contents listing failed with status {}: {}", status, body);
        }

        let entries = response
            .json::<Vec<ContentEntry>>()
            .await
            .context("Failed to parse GitHub contents response")?;

        Ok(entries
            .into_iter()
            .filter_map(|entry| entry.name.strip_suffix(".json").map(str::to_string))
            .collect())
    }

    async fn fetch_document(&self, dataset_id: &str) -> Result<Value> {
        let url = format!(
            "https://raw.githubusercontent.com/{}/{}/{}/{}.json",
            self.user,
            self.repo,
            self.branch,
            urlencoding::encode(dataset_id)
        );

        tracing::debug!(dataset_id, "fetching telemetry document");
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .context("Failed to send request for the telemetry document")?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("telemetry document fetch failed with status {}", status);
        }

        response
            .json::<Value>()
            .await
            .context("Failed to parse the telemetry document as JSON")
    }
}
