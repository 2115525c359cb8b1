//! OSRS Items - game-ready item dataset builder
//!
//! Combines the items-complete.json item database with real-time GE prices
//! from the OSRS Wiki, keeps tradeable non-quest items whose OSRSBox icon
//! exists, and writes one entry per item name. A second job refreshes
//! equipment slots in a generated file.

pub mod artifact;
pub mod config;
pub mod dedupe;
pub mod error;
pub mod filter;
pub mod game;
pub mod icons;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod patch;
pub mod pipeline;
pub mod wiki;

pub use config::Config;
pub use error::{ItemsError, PriceFetchError, Result};
pub use models::{GameItem, NormalizedRecord, RawRecord};
pub use normalize::normalize_item_name;
pub use patch::{run_patch, PatchReport};
pub use pipeline::{build_game_items, run_generate};
pub use wiki::PriceSnapshot;
