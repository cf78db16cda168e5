//! Per-record fetching and flattening
//!
//! Fetches the primary `people` resource for one catalog ID, decides
//! existence purely from the response status, sanitizes the body, and
//! resolves all five reference groups concurrently before reassembling the
//! flattened document.

use crate::harvest::resolver::resolve_links;
use crate::record::{reference_links, RecordOutcome, ResolvedDocument, REFERENCE_GROUPS};
use crate::{HarvestError, Result};
use reqwest::Client;
use serde_json::{Map, Value};

/// Builds the primary resource URL for a catalog ID
fn record_url(base_url: &str, id: u64) -> String {
    format!("{}/people/{}", base_url, id)
}

/// Fetches and flattens one catalog record
///
/// Existence is decided by status alone: any non-success status yields
/// [`RecordOutcome::NotFound`] without inspecting the body. On success the
/// body is decoded, sanitized (transient fields stripped, `id` forced to the
/// requested value), and every reference group is resolved concurrently; the
/// outcome is returned only once all five resolutions finish.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `base_url` - Catalog base URL, without a trailing slash
/// * `id` - The catalog ID to fetch
///
/// # Returns
///
/// * `Ok(RecordOutcome::Resolved(_))` - The flattened document
/// * `Ok(RecordOutcome::NotFound)` - The catalog has no record at this ID
/// * `Err(HarvestError)` - Transport, decode, or resolution failure
pub async fn fetch_record(client: &Client, base_url: &str, id: u64) -> Result<RecordOutcome> {
    let url = record_url(base_url, id);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|source| HarvestError::Http {
            url: url.clone(),
            source,
        })?;

    if !response.status().is_success() {
        tracing::debug!("Record {} not found (HTTP {})", id, response.status());
        return Ok(RecordOutcome::NotFound);
    }

    let raw: Map<String, Value> =
        response
            .json()
            .await
            .map_err(|source| HarvestError::Decode { url, source })?;

    // Reference links are read from the raw body; the document itself is
    // sanitized up front so the groups can be overwritten in place below.
    let links: Vec<Vec<String>> = REFERENCE_GROUPS
        .iter()
        .map(|group| reference_links(&raw, group))
        .collect();
    let mut document = ResolvedDocument::from_raw(raw, id);

    let (films, starships, vehicles, species, homeworld) = tokio::try_join!(
        resolve_links(client, &links[0], REFERENCE_GROUPS[0].attribute),
        resolve_links(client, &links[1], REFERENCE_GROUPS[1].attribute),
        resolve_links(client, &links[2], REFERENCE_GROUPS[2].attribute),
        resolve_links(client, &links[3], REFERENCE_GROUPS[3].attribute),
        resolve_links(client, &links[4], REFERENCE_GROUPS[4].attribute),
    )?;

    document.set_field("films", films);
    document.set_field("starships", starships);
    document.set_field("vehicles", vehicles);
    document.set_field("species", species);
    document.set_field("homeworld", homeworld);

    Ok(RecordOutcome::Resolved(document))
}
