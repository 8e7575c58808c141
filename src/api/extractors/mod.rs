//! Custom extractors.

mod services;
mod validated_json;

pub use validated_json::ValidatedJson;
