/*!
 * Sources for the raw language asset.
 */

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::encoding::decode_latin1;
use crate::errors::TranslationFetchError;

/// Source of the raw language asset text.
///
/// The HTTP implementation below is the production one; tests substitute
/// counting or failing fetchers to drive the cache without a device.
#[async_trait]
pub trait LangFetcher: Send + Sync + Debug {
    /// Fetch the asset and decode it to text
    async fn fetch(&self) -> Result<String, TranslationFetchError>;
}

/// Fetches `translate.lang.extension.js` from the CCU WebUI
#[derive(Debug)]
pub struct HttpLangFetcher {
    /// HTTP client for the asset request
    client: Client,
    /// Full asset URL
    url: String,
}

impl HttpLangFetcher {
    /// Asset URL for a host/language pair. The WebUI serves its assets on
    /// the plain HTTP port, not the rega port.
    pub fn asset_url(host: &str, language: &str) -> String {
        format!(
            "http://{}/webui/js/lang/{}/translate.lang.extension.js",
            host, language
        )
    }

    /// Create a fetcher for the given asset URL
    pub fn new(url: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            url,
        }
    }
}

#[async_trait]
impl LangFetcher for HttpLangFetcher {
    async fn fetch(&self) -> Result<String, TranslationFetchError> {
        debug!("fetching translation asset from {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let body = response.error_for_status()?.bytes().await?;
        if body.is_empty() {
            return Err(TranslationFetchError::EmptyAsset);
        }
        Ok(decode_latin1(&body))
    }
}
