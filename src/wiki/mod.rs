//! OSRS Wiki real-time prices API client

mod latest_prices;

pub use latest_prices::{LatestPriceEntry, PriceSnapshot};
