//! Data-driven raid content and loaders.
//!
//! This crate provides loaders for the TOML/RON files a deployment ships:
//! - Raid configuration (data-driven via TOML)
//! - World raid template pool (data-driven via RON)
//!
//! Content seeds runtime repositories and configuration; it never appears in
//! raid results directly.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, WorldRaidTemplateLoader};
