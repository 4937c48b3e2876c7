//! Pin-Up Points. A token's display score is a pure function of its traits,
//! mint timestamp, token id and confirmed-NSFW flag - no hidden state, no
//! randomness. Recomputed whenever any input changes.

use chrono::{DateTime, Utc};

use crate::models::metadata::{trait_f64, trait_str, TraitAttribute};

/// `Status` value that marks a card as opened and graded. Anything else
/// scores zero outright.
pub const STATUS_RARITY_ASSIGNED: &str = "Rarity Assigned";

const RARITY_MULTIPLIERS: [(&str, f64); 4] = [
    ("Common", 1.0),
    ("Rare", 3.28),
    ("Epic", 9.85),
    ("Legendary", 23.0),
];

pub fn compute_score(
    traits: &[TraitAttribute],
    mint_timestamp: Option<DateTime<Utc>>,
    token_id: &str,
    is_confirmed_nsfw: bool,
) -> f64 {
    compute_score_at(Utc::now(), traits, mint_timestamp, token_id, is_confirmed_nsfw)
}

/// Deterministic variant with an explicit "now", used by the wrapper above
/// and directly by tests.
pub fn compute_score_at(
    now: DateTime<Utc>,
    traits: &[TraitAttribute],
    mint_timestamp: Option<DateTime<Utc>>,
    token_id: &str,
    is_confirmed_nsfw: bool,
) -> f64 {
    // Terminal rule: unopened / ungraded cards score zero.
    if trait_str(traits, "Status") != Some(STATUS_RARITY_ASSIGNED) {
        return 0.0;
    }

    let rarity = trait_str(traits, "Rarity")
        .map(rarity_multiplier)
        .unwrap_or(1.0);

    // Lower wear is better: multiplier peaks at 2.0 for pristine cards.
    // An absent or malformed wear value is scored as the worst case.
    let wear_value = trait_f64(traits, "Wear Value").unwrap_or(1.0);
    let wear = (2.0 - wear_value).max(0.0);

    let foil = match trait_str(traits, "Foil") {
        Some(value) if value != "None" => 5.0,
        _ => 1.0,
    };

    let nsfw = if is_confirmed_nsfw { 3.0 } else { 1.0 };

    let age = mint_timestamp
        .map(|minted| 1.0 + 0.001 * age_in_whole_days(now, minted))
        .unwrap_or(1.0);

    let token = token_id_multiplier(token_id);

    (rarity * wear * foil * nsfw * age * token).sqrt() * 10.0
}

fn rarity_multiplier(rarity: &str) -> f64 {
    RARITY_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == rarity)
        .map(|(_, mult)| *mult)
        .unwrap_or(1.0)
}

/// Ceiling of the absolute distance between now and the mint timestamp,
/// in days.
fn age_in_whole_days(now: DateTime<Utc>, minted: DateTime<Utc>) -> f64 {
    let seconds = (now - minted).num_seconds().abs();
    (seconds as f64 / 86_400.0).ceil()
}

/// Rewards early mints: strictly decreasing in the token id, asymptoting
/// to 1.0. An unparseable id gets the neutral multiplier.
fn token_id_multiplier(token_id: &str) -> f64 {
    match token_id.trim().parse::<u64>() {
        Ok(id) => 2.0 * (-0.005 * (id as f64 - 1.0)).exp() + 1.0,
        Err(_) => 1.0,
    }
}
