use anyhow::{Context, Result};
use chrono::Utc;
use serde::Deserialize;

use crate::config::CoreConfig;
use crate::models::{LiveMetadata, TokenRecord, VisibilityList};

/// One page of the owned-tokens response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OwnedTokensPage {
    #[serde(default)]
    owned_nfts: Vec<TokenRecord>,
    #[serde(default)]
    page_key: Option<String>,
}

/// Client for the hosted indexing API plus the two plain-JSON fetches
/// (per-token metadata, visibility list). Constructed once from config and
/// passed in wherever needed; `reqwest::Client` clones share the pool.
#[derive(Clone)]
pub struct IndexerClient {
    api_key: String,
    base_url: String,
    contract_address: String,
    visibility_list_url: String,
    client: reqwest::Client,
}

impl IndexerClient {
    pub fn new(config: &CoreConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.indexer_base_url.clone(),
            contract_address: config.contract_address.clone(),
            visibility_list_url: config.visibility_list_url.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// All tokens of the configured contract owned by `address`, following
    /// `pageKey` pagination until exhausted.
    pub async fn tokens_for_owner(&self, address: &str) -> Result<Vec<TokenRecord>> {
        let url = format!("{}/{}/getNFTsForOwner", self.base_url, self.api_key);
        let mut tokens = Vec::new();
        let mut page_key: Option<String> = None;

        loop {
            let mut request = self.client.get(&url).query(&[
                ("owner", address),
                ("contractAddresses[]", self.contract_address.as_str()),
                ("withMetadata", "true"),
                ("pageSize", "100"),
            ]);
            if let Some(key) = &page_key {
                request = request.query(&[("pageKey", key.as_str())]);
            }

            let response = request
                .send()
                .await
                .context("Failed to send owned-tokens request")?;
            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                anyhow::bail!("Indexer error ({}): {}", status, error_text);
            }

            let page: OwnedTokensPage = response
                .json()
                .await
                .context("Failed to parse owned-tokens response")?;
            tokens.extend(page.owned_nfts);

            match page.page_key {
                Some(key) => page_key = Some(key),
                None => break,
            }
        }

        tracing::debug!(count = tokens.len(), "fetched owned tokens");
        Ok(tokens)
    }

    /// Live metadata for one token, best effort.
    pub async fn fetch_metadata(&self, uri: &str) -> Result<LiveMetadata> {
        let response = self
            .client
            .get(uri)
            .send()
            .await
            .context("Failed to send metadata request")?;
        if !response.status().is_success() {
            anyhow::bail!("Metadata fetch error ({})", response.status());
        }
        response
            .json()
            .await
            .context("Failed to parse token metadata")
    }

    /// The shared confirmed-NSFW list. The timestamp query defeats any
    /// intermediate caching of the hosted document.
    pub async fn fetch_visibility_list(&self) -> Result<VisibilityList> {
        let response = self
            .client
            .get(&self.visibility_list_url)
            .query(&[("t", Utc::now().timestamp_millis().to_string())])
            .send()
            .await
            .context("Failed to send visibility list request")?;
        if !response.status().is_success() {
            anyhow::bail!("Visibility list error ({})", response.status());
        }
        response
            .json()
            .await
            .context("Failed to parse visibility list")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owned_tokens_page() {
        let json = r#"{
            "ownedNfts": [
                {
                    "tokenId": "1",
                    "name": "Daring Diva #1",
                    "tokenUri": "https://metadata.example/1.json",
                    "image": { "cachedUrl": "https://cdn.example/1.png" },
                    "contract": { "address": "0xabc", "symbol": "DIVA" }
                },
                { "tokenId": "2", "contract": { "address": "0xabc" } }
            ],
            "totalCount": 2,
            "pageKey": "next-page"
        }"#;

        let page: OwnedTokensPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.owned_nfts.len(), 2);
        assert_eq!(page.owned_nfts[0].token_id, "1");
        assert_eq!(page.page_key.as_deref(), Some("next-page"));
    }

    #[test]
    fn test_parse_last_page() {
        let page: OwnedTokensPage = serde_json::from_str(r#"{"ownedNfts": []}"#).unwrap();
        assert!(page.owned_nfts.is_empty());
        assert!(page.page_key.is_none());
    }

    #[tokio::test]
    #[ignore] // Requires actual API key and network access
    async fn test_tokens_for_owner_live() {
        let config = CoreConfig::from_env().expect("ALCHEMY_API_KEY not set");
        let client = IndexerClient::new(&config);
        let tokens = client
            .tokens_for_owner("0x0000000000000000000000000000000000000001")
            .await
            .unwrap();
        assert!(tokens.is_empty());
    }
}
