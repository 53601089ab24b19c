//! HuggingFace Hub implementation of [`SpaceCatalog`].
//!
//! Issues one blocking `GET {endpoint}/api/spaces` per search. Filters the hub
//! expresses as tags (library, license, task tags) go out as repeated
//! `filter` parameters.

use super::{RawSpace, SpaceCatalog, SpaceQuery};
use crate::config::{HubConfig, NetworkConfig};
use crate::criteria::SortDirection;
use crate::error::{Result, SpacesError};
use reqwest::blocking::{Client, Response};
use reqwest::{header, StatusCode};
use tracing::{debug, info};
use url::Url;

/// Blocking client for the hub's spaces listing.
pub struct HubCatalog {
    client: Client,
    config: HubConfig,
}

impl std::fmt::Debug for HubCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubCatalog")
            .field("config", &self.config)
            .finish()
    }
}

impl HubCatalog {
    /// Create a catalog client from resolved settings.
    pub fn new(config: HubConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(NetworkConfig::USER_AGENT)
            .build()
            .map_err(|e| SpacesError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                cause: None,
            })?;

        Ok(Self { client, config })
    }

    /// Create a catalog client configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(HubConfig::from_env()?)
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    /// Full request URL for a query. Absent filters add no parameters.
    pub fn request_url(&self, query: &SpaceQuery) -> Result<Url> {
        let mut url = self.config.spaces_url()?;
        {
            let mut pairs = url.query_pairs_mut();

            if let Some(search) = &query.search {
                pairs.append_pair("search", search);
            }
            if let Some(library) = query.library {
                pairs.append_pair("filter", library.as_filter());
            }
            if let Some(license) = &query.license {
                pairs.append_pair("filter", &format!("license:{}", license.to_lowercase()));
            }
            if let Some(tasks) = &query.tasks {
                for task in tasks {
                    pairs.append_pair("filter", task);
                }
            }
            if let Some(hardware) = query.hardware {
                pairs.append_pair("hardware", hardware.as_str());
            }
            if let Some(private) = query.private {
                pairs.append_pair("private", if private { "true" } else { "false" });
            }

            pairs.append_pair("sort", query.sort.as_api_field());
            pairs.append_pair(
                "direction",
                match query.direction {
                    SortDirection::Descending => "-1",
                    SortDirection::Ascending => "1",
                },
            );
            pairs.append_pair("limit", &query.limit.to_string());
            pairs.append_pair("full", "true");
        }
        Ok(url)
    }

    /// Convert a non-success response into a remote error.
    fn status_error(response: Response) -> SpacesError {
        let status = response.status();
        let retry_after_secs = response
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let body = response.text().unwrap_or_default();
        status_to_error(status, retry_after_secs, &body)
    }
}

impl SpaceCatalog for HubCatalog {
    fn list_spaces(&self, query: &SpaceQuery) -> Result<Vec<RawSpace>> {
        let url = self.request_url(query)?;
        debug!("Listing spaces: {}", url);

        let mut request = self.client.get(url);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        if !response.status().is_success() {
            return Err(Self::status_error(response));
        }

        let records: Vec<serde_json::Value> = response.json()?;
        info!("Catalog returned {} spaces", records.len());

        Ok(records.into_iter().map(RawSpace::from_value).collect())
    }
}

/// Map an HTTP failure status to the matching remote error.
pub(crate) fn status_to_error(
    status: StatusCode,
    retry_after_secs: Option<u64>,
    body: &str,
) -> SpacesError {
    let message = api_error_message(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string()
    });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SpacesError::Unauthorized {
            status: status.as_u16(),
            message,
        },
        StatusCode::TOO_MANY_REQUESTS => SpacesError::RateLimited {
            service: "huggingface".to_string(),
            retry_after_secs,
        },
        _ => SpacesError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

/// The hub reports failures as `{"error": "..."}`.
fn api_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|v| v.as_str())
        .map(String::from)
}
