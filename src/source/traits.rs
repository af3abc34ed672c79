use crate::model::{Dataset, FetchError};

#[async_trait::async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> Result<Dataset, FetchError>;
}

#[async_trait::async_trait]
impl<T: DatasetSource + ?Sized> DatasetSource for Box<T> {
    async fn fetch(&self) -> Result<Dataset, FetchError> {
        (**self).fetch().await
    }
}
