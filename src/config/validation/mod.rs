//! Configuration validation

mod trait_def;
mod validators;

pub use trait_def::Validate;
pub use validators::warn_permissive_config;
