//! Reference link resolution
//!
//! Given a list of URLs pointing at other catalog resources, fetch them all
//! concurrently, pull one display attribute out of each response, and join
//! the values into a single `", "`-delimited string in the original link
//! order.

use crate::{HarvestError, Result};
use futures::future::try_join_all;
use reqwest::Client;
use serde_json::Value;

/// Resolves a list of reference links to a joined display string
///
/// Every link is fetched concurrently; `try_join_all` keeps the output in
/// input order regardless of completion order. An empty link list resolves
/// to an empty string without touching the network.
///
/// Any individual fetch, decode, or missing-attribute failure aborts the
/// whole resolution. There is no per-link retry and no partial join.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `links` - Ordered reference URLs
/// * `attribute` - Field to extract from each referenced resource
pub async fn resolve_links(client: &Client, links: &[String], attribute: &str) -> Result<String> {
    if links.is_empty() {
        return Ok(String::new());
    }

    let fetches = links
        .iter()
        .map(|link| fetch_attribute(client, link, attribute));
    let values = try_join_all(fetches).await?;

    Ok(values.join(", "))
}

/// Fetches one referenced resource and extracts the display attribute
async fn fetch_attribute(client: &Client, url: &str, attribute: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| HarvestError::Http {
            url: url.to_string(),
            source,
        })?;

    let body: Value = response
        .json()
        .await
        .map_err(|source| HarvestError::Decode {
            url: url.to_string(),
            source,
        })?;

    body.get(attribute)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| HarvestError::MissingAttribute {
            url: url.to_string(),
            attribute: attribute.to_string(),
        })
}
