use crate::model::{Dataset, FetchError};
use crate::source::traits::DatasetSource;

use reqwest::Client;
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct HttpDatasetSource {
    pub client: Client,
    pub url: String,
}

impl HttpDatasetSource {
    pub fn new(url: &str, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self { client, url: url.to_string() })
    }
}

#[async_trait::async_trait]
impl DatasetSource for HttpDatasetSource {
    async fn fetch(&self) -> Result<Dataset, FetchError> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Dataset request to {} returned {}", self.url, status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| FetchError::Http(e.to_string()))?;
        parse_dataset(&body)
    }
}

pub struct FileDatasetSource {
    pub path: PathBuf,
}

impl FileDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl DatasetSource for FileDatasetSource {
    async fn fetch(&self) -> Result<Dataset, FetchError> {
        debug!("Reading dataset from {}", self.path.display());
        let body = tokio::fs::read_to_string(&self.path).await?;
        parse_dataset(&body)
    }
}

pub fn parse_dataset(body: &str) -> Result<Dataset, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))
}
