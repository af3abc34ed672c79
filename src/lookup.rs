// One lookup flow: classify, fetch, select, truncate
use crate::classifier::classify;
use crate::model::{Dataset, DisplayItem, LookupError};
use crate::selector::select;
use crate::source::DatasetSource;
use tracing::{info, warn};

pub const DEFAULT_DISPLAY_LIMIT: usize = 2;

/// Classifies `text` and selects the full matching set from an already loaded dataset.
pub fn resolve(text: &str, dataset: &Dataset) -> Result<Vec<DisplayItem>, LookupError> {
    let category = classify(text).ok_or(LookupError::UnrecognizedKeyword)?;
    let items = select(category, dataset);
    if items.is_empty() {
        return Err(LookupError::EmptyResult(category));
    }
    Ok(items)
}

pub struct Recommender<S: DatasetSource> {
    pub source: S,
    pub display_limit: usize,
}

impl<S: DatasetSource> Recommender<S> {
    pub fn new(source: S) -> Self {
        Self { source, display_limit: DEFAULT_DISPLAY_LIMIT }
    }

    /// At least one item is always shown when anything matched.
    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit.max(1);
        self
    }

    /// Runs the whole flow. The dataset is fetched fresh on every call, and only
    /// after the keyword is recognized. The zero check happens before truncation.
    pub async fn search(&self, text: &str) -> Result<Vec<DisplayItem>, LookupError> {
        let Some(category) = classify(text) else {
            info!("Unrecognized keyword: {:?}", text.trim());
            return Err(LookupError::UnrecognizedKeyword);
        };

        info!("Fetching dataset for {}...", category);
        let dataset = self.source.fetch().await.map_err(|e| {
            warn!("Dataset fetch failed: {}", e);
            LookupError::from(e)
        })?;

        let mut items = select(category, &dataset);
        info!("Matched {} item(s) for {}", items.len(), category);
        if items.is_empty() {
            return Err(LookupError::EmptyResult(category));
        }

        items.truncate(self.display_limit.max(1));
        Ok(items)
    }
}
