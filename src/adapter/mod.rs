use crate::config::UpstreamConfig;
use crate::error::{Error, Result};
use crate::headers;
use crate::models::{TranslationResult, Variant};
use crate::profile::{AdapterProfile, Extraction};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info};

/// Stateless adapter from a normalized translation request to a normalized
/// result via exactly one upstream GET. The reqwest client is shared and
/// safe for concurrent reuse; no other state is held between calls.
pub struct TranslateAdapter {
    client: Client,
    config: UpstreamConfig,
}

impl TranslateAdapter {
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_idle_timeout(std::time::Duration::from_secs(60))
            .tcp_keepalive(Some(std::time::Duration::from_secs(30)))
            .build()
            .map_err(Error::Http)?;

        Ok(Self { client, config })
    }

    /// Translate one text. Never returns an error to the caller: any upstream
    /// problem (network, status, parse) is captured into a failure result
    /// carrying the error description, the variant and the original text.
    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
        variant: Variant,
    ) -> TranslationResult {
        match self.fetch(text, source_lang, target_lang, variant).await {
            Ok(extraction) => {
                info!(
                    "Translation succeeded - variant: {:?}, detected source: {}",
                    variant, extraction.source_language
                );
                TranslationResult::ok(
                    extraction.translated_text,
                    extraction.source_language,
                    target_lang.to_string(),
                    extraction.confidence,
                    variant,
                    text.to_string(),
                )
            }
            Err(e) => {
                error!("Translation failed - variant: {:?}: {}", variant, e);
                TranslationResult::failure(e.to_string(), variant, text.to_string())
            }
        }
    }

    // One upstream round trip: build the variant's query and header set,
    // GET, check status, parse JSON, extract the variant's fields.
    async fn fetch(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
        variant: Variant,
    ) -> Result<Extraction> {
        let profile = AdapterProfile::for_variant(variant);
        let params = profile.build_query(text, source_lang, target_lang);
        let headers = headers::random_headers(profile.referer);

        debug!(
            "fetch: start -> {} (variant {:?})",
            self.config.base_url, variant
        );

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&params)
            .headers(headers)
            .send()
            .await
            .map_err(|e| {
                error!("HTTP client request failed: {:?}", e);
                Error::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());

            error!("Upstream error response (status {}): {}", status, body);

            return Err(Error::Upstream(format!(
                "Upstream returned error status {}: {}",
                status, body
            )));
        }

        let body = response.text().await.map_err(Error::Http)?;
        let body: Value = serde_json::from_str(&body)?;
        Ok(profile.extract(&body, source_lang))
    }
}
