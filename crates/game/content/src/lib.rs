//! Data-driven content for the land simulation.
//!
//! This crate ships the tunable balance values in `data/game.toml` and the
//! loaders that turn TOML text into [`land_core::GameConfig`]. Content feeds
//! the engine through its config oracle and never appears in game state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult};
