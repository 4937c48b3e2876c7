use std::collections::HashMap;

use serde::Deserialize;

/// Remote document mapping token id -> confirmed-NSFW flag, shared across
/// all tokens and fetched once per session. A missing entry means "not
/// flagged".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct VisibilityList {
    entries: HashMap<String, bool>,
}

impl VisibilityList {
    pub fn is_flagged(&self, token_id: &str) -> bool {
        self.entries.get(token_id).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn from_entries<I: IntoIterator<Item = (&'static str, bool)>>(entries: I) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(id, flagged)| (id.to_string(), flagged))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_remote_document() {
        let list: VisibilityList =
            serde_json::from_str(r#"{"12": true, "40": false, "7": true}"#).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.is_flagged("12"));
        assert!(!list.is_flagged("40"));
    }

    #[test]
    fn test_missing_entry_is_not_flagged() {
        let list = VisibilityList::from_entries([("12", true)]);
        assert!(!list.is_flagged("999"));
    }

    #[test]
    fn test_default_is_empty() {
        // Fetch failure leaves the default in place: nothing is flagged.
        let list = VisibilityList::default();
        assert!(list.is_empty());
        assert!(!list.is_flagged("12"));
    }
}
