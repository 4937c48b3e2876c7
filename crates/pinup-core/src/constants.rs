pub const APP_VERSION: &str = "v1.0.0";

/// The Daring Divas collection contract on Base mainnet.
pub const DARING_DIVAS_CONTRACT: &str = "0xD127d434266eBF4CB4F861071ebA50A799A23d9d";

/// Hosted NFT indexing API, Base mainnet. The API key is appended as a path
/// segment: `{base}/{key}/getNFTsForOwner`.
pub const INDEXER_BASE_URL: &str = "https://base-mainnet.g.alchemy.com/nft/v3";

/// Remote document mapping token id -> "confirmed NSFW" flag.
pub const VISIBILITY_LIST_URL: &str =
    "https://gist.githubusercontent.com/Mostraet/3e4cc308c270f278499f1b03440ad2ab/raw/censored-list.json";

pub const MAIN_SITE_URL: &str = "https://daringdivas.art";

pub const COLLECTION_TAGLINE: &str = "\"Pin Me Up, Honey!\"";

pub const API_KEY_ENV: &str = "ALCHEMY_API_KEY";

pub const LOG_FILE_ENV: &str = "PINUP_LOG_FILE";
