use serde::Deserialize;
use serde_json::Value;

/// Live metadata document fetched from a token's URI. Attributes carry no
/// fixed schema; a missing trait means "unknown / not applicable".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub attributes: Vec<TraitAttribute>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TraitAttribute {
    pub trait_type: String,
    #[serde(default)]
    pub value: Value,
}

pub fn find_trait<'a>(attributes: &'a [TraitAttribute], trait_type: &str) -> Option<&'a Value> {
    attributes
        .iter()
        .find(|attr| attr.trait_type == trait_type)
        .map(|attr| &attr.value)
}

pub fn trait_str<'a>(attributes: &'a [TraitAttribute], trait_type: &str) -> Option<&'a str> {
    find_trait(attributes, trait_type).and_then(Value::as_str)
}

/// Numeric trait value. Malformed values are treated as absent rather than
/// surfaced as errors.
pub fn trait_f64(attributes: &[TraitAttribute], trait_type: &str) -> Option<f64> {
    match find_trait(attributes, trait_type)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl LiveMetadata {
    pub fn trait_str(&self, trait_type: &str) -> Option<&str> {
        trait_str(&self.attributes, trait_type)
    }

    pub fn trait_f64(&self, trait_type: &str) -> Option<f64> {
        trait_f64(&self.attributes, trait_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LiveMetadata {
        serde_json::from_str(
            r#"{
                "name": "Daring Diva #1",
                "image": "ipfs://Qm.../1.png",
                "external_url": "https://vibe.market/collection",
                "attributes": [
                    { "trait_type": "Status", "value": "Rarity Assigned" },
                    { "trait_type": "Rarity", "value": "Epic" },
                    { "trait_type": "Wear Value", "value": 0.12 },
                    { "trait_type": "Grade", "value": "0.3" },
                    { "trait_type": "Foil", "value": "None" },
                    { "trait_type": "Broken", "value": "not-a-number" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_trait_lookup() {
        let meta = sample();
        assert_eq!(meta.trait_str("Status"), Some("Rarity Assigned"));
        assert_eq!(meta.trait_str("Rarity"), Some("Epic"));
        assert_eq!(meta.trait_str("Missing"), None);
    }

    #[test]
    fn test_numeric_traits() {
        let meta = sample();
        assert_eq!(meta.trait_f64("Wear Value"), Some(0.12));
        // Numbers encoded as strings still parse.
        assert_eq!(meta.trait_f64("Grade"), Some(0.3));
        // Malformed numeric values resolve to None, not an error.
        assert_eq!(meta.trait_f64("Broken"), None);
        assert_eq!(meta.trait_f64("Missing"), None);
    }

    #[test]
    fn test_attribute_without_value() {
        let meta: LiveMetadata =
            serde_json::from_str(r#"{"attributes":[{"trait_type":"Status"}]}"#).unwrap();
        assert_eq!(meta.trait_str("Status"), None);
        assert_eq!(meta.trait_f64("Status"), None);
    }

    #[test]
    fn test_empty_document() {
        let meta: LiveMetadata = serde_json::from_str("{}").unwrap();
        assert!(meta.attributes.is_empty());
        assert!(meta.image.is_none());
    }
}
