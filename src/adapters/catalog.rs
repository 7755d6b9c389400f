use crate::domain::model::Comic;
use crate::domain::ports::ComicLookup;
use crate::utils::error::{Result, StorefrontError};
use async_trait::async_trait;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    comics: HashMap<u64, Comic>,
}

impl InMemoryCatalog {
    pub fn new(comics: impl IntoIterator<Item = Comic>) -> Self {
        Self {
            comics: comics.into_iter().map(|comic| (comic.id, comic)).collect(),
        }
    }

    pub fn insert(&mut self, comic: Comic) {
        self.comics.insert(comic.id, comic);
    }
}

#[async_trait]
impl ComicLookup for InMemoryCatalog {
    async fn get_comic_by_id(&self, id: u64) -> Result<Comic> {
        self.comics
            .get(&id)
            .cloned()
            .ok_or(StorefrontError::ComicNotFound { id })
    }
}
