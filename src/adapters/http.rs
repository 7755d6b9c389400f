use crate::domain::model::Comic;
use crate::domain::ports::{ComicLookup, ConfigProvider};
use crate::utils::error::{Result, StorefrontError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

// The comics API answers either with the comic itself or wrapped in `data`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ComicPayload {
    Wrapped { data: Comic },
    Bare(Comic),
}

impl From<ComicPayload> for Comic {
    fn from(payload: ComicPayload) -> Self {
        match payload {
            ComicPayload::Wrapped { data } => data,
            ComicPayload::Bare(comic) => comic,
        }
    }
}

pub struct HttpComicService {
    base_url: String,
    client: Client,
}

impl HttpComicService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.comics_api_base_url(),
            Duration::from_secs(config.request_timeout_seconds()),
        )
    }

    fn comic_url(&self, id: u64) -> String {
        format!("{}/comics/{}", self.base_url, id)
    }
}

#[async_trait]
impl ComicLookup for HttpComicService {
    async fn get_comic_by_id(&self, id: u64) -> Result<Comic> {
        let url = self.comic_url(id);
        tracing::debug!("Fetching comic from: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Comics API response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(StorefrontError::ComicNotFound { id });
        }
        if !status.is_success() {
            return Err(StorefrontError::ComicLookup {
                id,
                message: format!("comics API answered {}", status),
            });
        }

        let payload: ComicPayload = response.json().await?;
        Ok(payload.into())
    }
}
