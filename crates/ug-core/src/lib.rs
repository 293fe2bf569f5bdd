//! ug-core: stable foundation for umlgraph.
//!
//! Contains:
//! - ids (string identifiers shared by nodes and links)
//! - error (shared error types)

pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{UgError, UgResult};
pub use ids::*;
