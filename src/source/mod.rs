pub mod fetcher;
pub mod traits;

pub use fetcher::{FileDatasetSource, HttpDatasetSource};
pub use traits::DatasetSource;

use crate::model::FetchError;

/// Picks the HTTP source for URLs and the file source for anything else.
pub fn source_for(location: &str, user_agent: &str) -> Result<Box<dyn DatasetSource>, FetchError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpDatasetSource::new(location, user_agent)?))
    } else {
        Ok(Box::new(FileDatasetSource::new(location)))
    }
}
