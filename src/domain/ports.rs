use crate::domain::model::Comic;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ComicLookup: Send + Sync {
    async fn get_comic_by_id(&self, id: u64) -> Result<Comic>;
}

/// Client-side navigation.
pub trait PageRouter: Send + Sync {
    fn push(&self, path: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn comics_api_base_url(&self) -> &str;
    fn request_timeout_seconds(&self) -> u64;
}
