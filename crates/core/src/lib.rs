pub mod builtin;
pub mod catalog;
pub mod matcher;
pub mod models;
pub mod normalize;


pub use builtin::BUILTIN_RULES;
pub use catalog::{CatalogError, RuleCatalog};
pub use matcher::{respond, Matcher};
pub use models::*;
pub use normalize::{normalize_text, LowercaseNormalizer, Normalizer};
