//! Harvest orchestration - the window loop
//!
//! Walks the catalog in fixed-size ID windows starting at 1. Every ID in a
//! window is fetched concurrently; a window that comes back entirely
//! not-found ends the harvest. Any other window has its not-found gaps
//! filtered out and the remaining documents dispatched to the persistence
//! sink without waiting for the commit, so storage writes overlap with the
//! next window's fetches. The loop only returns after draining every
//! outstanding persistence unit.

use crate::config::Config;
use crate::harvest::client::build_http_client;
use crate::harvest::fetcher::fetch_record;
use crate::harvest::sink::PersistenceSink;
use crate::record::RecordOutcome;
use crate::storage::SqliteStorage;
use crate::Result;
use futures::future::try_join_all;
use reqwest::Client;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Summary of a finished harvest run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarvestReport {
    /// Number of windows dispatched to the sink
    pub windows_dispatched: u64,

    /// Total documents handed to the sink across all windows
    pub records_harvested: u64,

    /// Highest catalog ID probed, including the terminal empty window
    pub last_probed_id: u64,
}

/// Main harvester structure
pub struct Harvester {
    config: Config,
    client: Client,
    sink: PersistenceSink,
}

impl Harvester {
    /// Creates a new harvester instance
    ///
    /// Opens (or creates) the storage database and builds the shared HTTP
    /// client.
    ///
    /// # Arguments
    ///
    /// * `config` - The harvester configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Harvester)` - Ready to run
    /// * `Err(HarvestError)` - Failed to initialize storage or the client
    pub fn new(config: Config) -> Result<Self> {
        let storage = SqliteStorage::new(Path::new(&config.output.database_path))?;
        let client = build_http_client(&config.client)?;
        let sink = PersistenceSink::new(Arc::new(Mutex::new(storage)));

        Ok(Self {
            config,
            client,
            sink,
        })
    }

    /// Runs the harvest loop to completion
    ///
    /// The crawl cursor lives here and only here: it starts at 1 and
    /// advances by `window_size` strictly between windows, never while a
    /// window is in flight.
    pub async fn run(&mut self) -> Result<HarvestReport> {
        let base_url = self.config.catalog.base_url.clone();
        let window_size = self.config.catalog.window_size;

        tracing::info!(
            "Starting harvest of {} (window size {})",
            base_url,
            window_size
        );

        let start_time = std::time::Instant::now();
        let mut start_id: u64 = 1;
        let mut report = HarvestReport {
            windows_dispatched: 0,
            records_harvested: 0,
            last_probed_id: 0,
        };

        loop {
            let window = start_id..start_id + window_size;
            report.last_probed_id = window.end - 1;
            tracing::debug!("Fetching window [{}, {})", window.start, window.end);

            // One concurrent fetch per ID; results come back in ID order
            // regardless of completion order. A fetch or resolution failure
            // anywhere in the window aborts the whole harvest.
            let fetches = window
                .clone()
                .map(|id| fetch_record(&self.client, &base_url, id));
            let outcomes = try_join_all(fetches).await?;

            // Termination heuristic: only a window with no records at all
            // signals the end of the catalog. Scattered gaps inside a
            // populated window are expected (deleted entries) and are
            // simply filtered out below.
            if outcomes.iter().all(RecordOutcome::is_not_found) {
                tracing::info!(
                    "Window [{}, {}) is empty, catalog exhausted",
                    window.start,
                    window.end
                );
                break;
            }

            let documents: Vec<_> = outcomes
                .into_iter()
                .filter_map(RecordOutcome::into_document)
                .collect();

            report.windows_dispatched += 1;
            report.records_harvested += documents.len() as u64;

            // Fire-and-continue: the commit overlaps with the next window.
            self.sink.dispatch(documents);

            start_id += window_size;
        }

        // Drain guarantee: every dispatched batch is committed before the
        // harvest returns.
        tracing::debug!("Draining {} persistence units", self.sink.pending_units());
        self.sink.drain().await?;

        tracing::info!(
            "Harvest completed: {} records in {} windows, {:?} elapsed",
            report.records_harvested,
            report.windows_dispatched,
            start_time.elapsed()
        );

        Ok(report)
    }
}
