pub mod metadata;
pub mod token;
pub mod visibility;

pub use metadata::{LiveMetadata, TraitAttribute};
pub use token::{ContractInfo, EnrichedToken, TokenRecord};
pub use visibility::VisibilityList;
