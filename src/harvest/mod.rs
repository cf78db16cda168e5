//! Harvest module: the crawl-resolve-persist pipeline
//!
//! This module contains the core harvesting logic:
//! - building the shared HTTP client
//! - resolving reference links to joined display strings
//! - fetching and flattening individual records
//! - the window loop with its empty-window termination heuristic
//! - detached batch persistence with a final drain

mod client;
mod fetcher;
mod orchestrator;
mod resolver;
mod sink;

pub use client::build_http_client;
pub use fetcher::fetch_record;
pub use orchestrator::{HarvestReport, Harvester};
pub use resolver::resolve_links;
pub use sink::PersistenceSink;

use crate::config::Config;
use crate::Result;

/// Runs a complete harvest
///
/// This is the main entry point for a harvest run. It will:
/// 1. Open the storage database (creating the schema if absent)
/// 2. Build the shared HTTP client
/// 3. Walk ID windows until one comes back entirely not-found
/// 4. Drain all outstanding persistence units
///
/// # Arguments
///
/// * `config` - The harvester configuration
///
/// # Returns
///
/// * `Ok(HarvestReport)` - Harvest completed; counts of what was ingested
/// * `Err(HarvestError)` - Harvest failed
pub async fn harvest(config: Config) -> Result<HarvestReport> {
    let mut harvester = Harvester::new(config)?;
    harvester.run().await
}
