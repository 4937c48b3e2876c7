//! Pure view builders: everything the presentation layer renders for a card
//! is derived here from the data store plus the UI's transient reveal state.

use std::collections::HashMap;
use std::path::Path;

use crate::config::uncensored_image_path;
use crate::models::metadata::{trait_f64, trait_str};
use crate::models::{EnrichedToken, TraitAttribute};
use crate::score::STATUS_RARITY_ASSIGNED;
use crate::store::AppDataStore;

/// Collection-level header data, taken from the first loaded token as the
/// records all reference the same contract.
#[derive(Debug, Clone)]
pub struct CollectionInfo {
    pub name: String,
    pub description: String,
    pub symbol: String,
    pub token_type: String,
    pub contract_address: String,
    pub external_url: Option<String>,
}

pub fn collection_info(store: &AppDataStore) -> Option<CollectionInfo> {
    let first = store.tokens.first()?;
    Some(CollectionInfo {
        name: first.record.contract.name.clone().unwrap_or_default(),
        description: first.record.description.clone().unwrap_or_default(),
        symbol: first.record.contract.symbol.clone().unwrap_or_default(),
        token_type: first.record.contract.token_type.clone().unwrap_or_default(),
        contract_address: first.record.contract.address.clone(),
        external_url: first.live.as_ref().and_then(|m| m.external_url.clone()),
    })
}

#[derive(Debug, Clone)]
pub struct CardView {
    pub token_id: String,
    pub title: String,
    pub status_label: &'static str,
    pub rarity: String,
    pub wear: String,
    pub foil: String,
    pub flagged: bool,
    pub revealed: bool,
    pub minted: String,
    pub description: String,
    pub score: f64,
    pub image: String,
}

pub fn build_card_views(
    store: &AppDataStore,
    revealed: &HashMap<String, bool>,
    uncensored_dir: &Path,
) -> Vec<CardView> {
    store
        .tokens
        .iter()
        .map(|token| {
            let token_id = token.record.token_id.clone();
            let flagged = store.visibility.is_flagged(&token_id);
            let is_revealed = revealed.get(&token_id).copied().unwrap_or(false);
            let attributes = token.attributes();

            let status_label =
                if trait_str(attributes, "Status") == Some(STATUS_RARITY_ASSIGNED) {
                    "Opened"
                } else {
                    "Unopened"
                };

            CardView {
                title: token
                    .record
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("#{token_id}")),
                status_label,
                rarity: trait_str(attributes, "Rarity")
                    .unwrap_or("N/A")
                    .to_string(),
                wear: wear_display(attributes),
                foil: trait_str(attributes, "Foil")
                    .unwrap_or("N/A")
                    .to_string(),
                flagged,
                revealed: is_revealed,
                minted: token
                    .record
                    .mint_timestamp()
                    .map(|t| t.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
                description: token
                    .live
                    .as_ref()
                    .and_then(|m| m.description.clone())
                    .or_else(|| token.record.description.clone())
                    .unwrap_or_default(),
                score: store.score_for(token),
                image: effective_image(token, flagged, is_revealed, uncensored_dir),
                token_id,
            }
        })
        .collect()
}

/// The image a card shows: live metadata image if present, else the cached
/// record image, else empty. A flagged token that is currently revealed
/// substitutes the locally hosted alternate instead. Reveal is cosmetic
/// only; it never feeds the score.
pub fn effective_image(
    token: &EnrichedToken,
    flagged: bool,
    revealed: bool,
    uncensored_dir: &Path,
) -> String {
    if flagged && revealed {
        return uncensored_image_path(uncensored_dir, &token.record.token_id)
            .display()
            .to_string();
    }
    token
        .live
        .as_ref()
        .and_then(|m| m.image.clone())
        .or_else(|| token.record.image.cached_url.clone())
        .unwrap_or_default()
}

fn wear_display(attributes: &[TraitAttribute]) -> String {
    let label = trait_str(attributes, "Wear").unwrap_or("N/A");
    match trait_f64(attributes, "Wear Value") {
        Some(value) => format!("{} ({:.1}%)", label, value * 100.0),
        None => label.to_string(),
    }
}
