use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::LiveMetadata;

/// One owned token as returned by the indexing API. Immutable for the
/// session once fetched; re-fetched on address or connection change.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    /// String-encoded integer, unique within the contract.
    pub token_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Where the live metadata document lives. Absent for unrevealed URIs.
    #[serde(default)]
    pub token_uri: Option<String>,
    #[serde(default)]
    pub image: TokenImage,
    pub contract: ContractInfo,
    #[serde(default)]
    pub mint: MintInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenImage {
    #[serde(default)]
    pub cached_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractInfo {
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MintInfo {
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl TokenRecord {
    pub fn mint_timestamp(&self) -> Option<DateTime<Utc>> {
        self.mint.timestamp
    }
}

/// Token record plus its independently fetched live metadata. A failed
/// metadata fetch leaves `live` empty and the token degrades to the
/// un-enriched record.
#[derive(Debug, Clone)]
pub struct EnrichedToken {
    pub record: TokenRecord,
    pub live: Option<LiveMetadata>,
}

impl EnrichedToken {
    pub fn attributes(&self) -> &[crate::models::TraitAttribute] {
        self.live
            .as_ref()
            .map(|m| m.attributes.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_indexer_token() {
        let json = r#"{
            "tokenId": "17",
            "name": "Daring Diva #17",
            "description": "A daring diva.",
            "tokenUri": "https://metadata.example/17.json",
            "image": { "cachedUrl": "https://cdn.example/17.png" },
            "contract": {
                "address": "0xd127d434266ebf4cb4f861071eba50a799a23d9d",
                "name": "Daring Divas",
                "symbol": "DIVA",
                "tokenType": "ERC721"
            },
            "mint": { "timestamp": "2024-06-01T12:00:00Z" }
        }"#;

        let record: TokenRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.token_id, "17");
        assert_eq!(record.image.cached_url.as_deref(), Some("https://cdn.example/17.png"));
        assert_eq!(record.contract.symbol.as_deref(), Some("DIVA"));
        assert_eq!(record.contract.token_type.as_deref(), Some("ERC721"));
        assert!(record.mint_timestamp().is_some());
    }

    #[test]
    fn test_deserialize_minimal_token() {
        // Only tokenId and contract are guaranteed by the API.
        let json = r#"{
            "tokenId": "3",
            "contract": { "address": "0xabc" }
        }"#;

        let record: TokenRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.token_id, "3");
        assert!(record.name.is_none());
        assert!(record.token_uri.is_none());
        assert!(record.image.cached_url.is_none());
        assert!(record.mint_timestamp().is_none());
    }

    #[test]
    fn test_attributes_empty_without_live_metadata() {
        let record: TokenRecord =
            serde_json::from_str(r#"{"tokenId":"1","contract":{"address":"0xabc"}}"#).unwrap();
        let token = EnrichedToken { record, live: None };
        assert!(token.attributes().is_empty());
    }
}
