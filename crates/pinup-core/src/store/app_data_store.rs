use crate::models::{EnrichedToken, VisibilityList};
use crate::score;
use crate::worker::DataChange;

/// Single source of truth for session data. Lives on the UI thread behind
/// `Rc<RefCell<_>>`; all mutation happens through discrete, serialized
/// `DataChange` applications.
#[derive(Debug, Default)]
pub struct AppDataStore {
    pub tokens: Vec<EnrichedToken>,
    pub visibility: VisibilityList,
    pub loading: bool,
    generation: u64,
}

impl AppDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load batch. Bumps the generation counter so any
    /// still-in-flight response from an earlier batch is discarded on
    /// arrival instead of overwriting newer state.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.tokens.clear();
        self.generation
    }

    pub fn apply(&mut self, change: DataChange) {
        match change {
            DataChange::VisibilityLoaded(list) => {
                self.visibility = list;
            }
            DataChange::TokensLoaded { generation, tokens } => {
                if generation != self.generation {
                    tracing::debug!(generation, current = self.generation, "discarding stale token batch");
                    return;
                }
                self.tokens = tokens;
                self.loading = false;
            }
            DataChange::TokensLoadFailed { generation } => {
                if generation != self.generation {
                    return;
                }
                self.tokens.clear();
                self.loading = false;
            }
        }
    }

    /// Reset on disconnect. The visibility list is session-wide and survives.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.tokens.clear();
        self.loading = false;
    }

    pub fn score_for(&self, token: &EnrichedToken) -> f64 {
        score::compute_score(
            token.attributes(),
            token.record.mint_timestamp(),
            &token.record.token_id,
            self.visibility.is_flagged(&token.record.token_id),
        )
    }

    /// Collection total: arithmetic sum of per-token scores over the
    /// currently loaded set.
    pub fn total_score(&self) -> f64 {
        self.tokens.iter().map(|token| self.score_for(token)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LiveMetadata, TokenRecord};

    fn token(token_id: &str, live_json: Option<&str>) -> EnrichedToken {
        let record: TokenRecord = serde_json::from_str(&format!(
            r#"{{"tokenId": "{token_id}", "contract": {{"address": "0xabc"}}}}"#
        ))
        .unwrap();
        let live: Option<LiveMetadata> = live_json.map(|json| serde_json::from_str(json).unwrap());
        EnrichedToken { record, live }
    }

    fn graded_token(token_id: &str) -> EnrichedToken {
        token(
            token_id,
            Some(
                r#"{"attributes": [
                    {"trait_type": "Status", "value": "Rarity Assigned"},
                    {"trait_type": "Rarity", "value": "Epic"}
                ]}"#,
            ),
        )
    }

    #[test]
    fn test_begin_load_bumps_generation_and_clears() {
        let mut store = AppDataStore::new();
        let first = store.begin_load();
        store.apply(DataChange::TokensLoaded {
            generation: first,
            tokens: vec![graded_token("1")],
        });
        assert_eq!(store.tokens.len(), 1);

        let second = store.begin_load();
        assert!(second > first);
        assert!(store.tokens.is_empty());
        assert!(store.loading);
    }

    #[test]
    fn test_stale_batch_is_discarded() {
        let mut store = AppDataStore::new();
        let stale = store.begin_load();
        let current = store.begin_load();

        // The response for the superseded request arrives late.
        store.apply(DataChange::TokensLoaded {
            generation: stale,
            tokens: vec![graded_token("1"), graded_token("2")],
        });
        assert!(store.tokens.is_empty());
        assert!(store.loading);

        store.apply(DataChange::TokensLoaded {
            generation: current,
            tokens: vec![graded_token("3")],
        });
        assert_eq!(store.tokens.len(), 1);
        assert!(!store.loading);
    }

    #[test]
    fn test_failed_load_clears_loading() {
        let mut store = AppDataStore::new();
        let generation = store.begin_load();
        store.apply(DataChange::TokensLoadFailed { generation });
        assert!(!store.loading);
        assert!(store.tokens.is_empty());
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut store = AppDataStore::new();
        let stale = store.begin_load();
        let _current = store.begin_load();
        store.apply(DataChange::TokensLoadFailed { generation: stale });
        assert!(store.loading);
    }

    #[test]
    fn test_unenriched_token_scores_zero() {
        let store = AppDataStore::new();
        assert_eq!(store.score_for(&token("1", None)), 0.0);
    }

    #[test]
    fn test_total_is_sum_of_item_scores() {
        let mut store = AppDataStore::new();
        let generation = store.begin_load();
        store.apply(DataChange::TokensLoaded {
            generation,
            tokens: vec![graded_token("1"), graded_token("50"), token("3", None)],
        });

        let sum: f64 = store.tokens.iter().map(|t| store.score_for(t)).sum();
        assert_eq!(store.total_score(), sum);
        assert!(store.total_score() > 0.0);

        // Removing a token changes the total by exactly that token's score.
        let removed = store.tokens.pop().unwrap();
        let removed_score = store.score_for(&removed);
        assert!((store.total_score() - (sum - removed_score)).abs() < 1e-9);
    }

    #[test]
    fn test_nsfw_flag_raises_score() {
        let mut store = AppDataStore::new();
        let generation = store.begin_load();
        store.apply(DataChange::TokensLoaded {
            generation,
            tokens: vec![graded_token("7")],
        });

        let clean = store.total_score();
        store.apply(DataChange::VisibilityLoaded(VisibilityList::from_entries([
            ("7", true),
        ])));
        assert!(store.total_score() > clean);
    }

    #[test]
    fn test_clear_keeps_visibility() {
        let mut store = AppDataStore::new();
        store.apply(DataChange::VisibilityLoaded(VisibilityList::from_entries([
            ("7", true),
        ])));
        let generation = store.begin_load();
        store.apply(DataChange::TokensLoaded {
            generation,
            tokens: vec![graded_token("7")],
        });

        store.clear();
        assert!(store.tokens.is_empty());
        assert!(store.visibility.is_flagged("7"));
    }
}
