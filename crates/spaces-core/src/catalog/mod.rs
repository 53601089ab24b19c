//! The remote spaces catalog as consumed by the explorer.
//!
//! - [`SpaceCatalog`] - the list/search capability, injected into the explorer
//! - [`SpaceQuery`] - outbound parameters for one call
//! - [`RawSpace`] - one returned record, every field optional
//! - [`hub`] - HTTP implementation against the HuggingFace Hub

pub mod hub;

use crate::criteria::{FilterCriteria, Hardware, Library, SortDirection, SortKey};
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::warn;

pub use hub::HubCatalog;

/// List/search capability of a spaces catalog.
///
/// Implementations perform exactly one remote call per invocation and own
/// any transport policy (timeouts, auth headers).
pub trait SpaceCatalog {
    fn list_spaces(&self, query: &SpaceQuery) -> Result<Vec<RawSpace>>;
}

impl<C: SpaceCatalog + ?Sized> SpaceCatalog for &C {
    fn list_spaces(&self, query: &SpaceQuery) -> Result<Vec<RawSpace>> {
        (**self).list_spaces(query)
    }
}

impl<C: SpaceCatalog + ?Sized> SpaceCatalog for Box<C> {
    fn list_spaces(&self, query: &SpaceQuery) -> Result<Vec<RawSpace>> {
        (**self).list_spaces(query)
    }
}

impl<C: SpaceCatalog + ?Sized> SpaceCatalog for Arc<C> {
    fn list_spaces(&self, query: &SpaceQuery) -> Result<Vec<RawSpace>> {
        (**self).list_spaces(query)
    }
}

/// Parameters of one catalog list call. `None` fields are not sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaceQuery {
    pub search: Option<String>,
    pub library: Option<Library>,
    pub license: Option<String>,
    pub hardware: Option<Hardware>,
    /// `Some(true)` private only, `Some(false)` public only
    pub private: Option<bool>,
    pub sort: SortKey,
    pub direction: SortDirection,
    pub limit: u32,
    /// Tags/tasks every result must carry
    pub tasks: Option<BTreeSet<String>>,
}

impl From<&FilterCriteria> for SpaceQuery {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            search: criteria.query.clone(),
            library: criteria.library,
            license: criteria.license.clone(),
            hardware: criteria.hardware,
            private: criteria.visibility.map(|v| v.is_private()),
            sort: criteria.sort,
            direction: criteria.direction,
            limit: criteria.limit,
            tasks: criteria.tags.clone(),
        }
    }
}

/// One space record as returned by the catalog.
///
/// Every field is optional and a field with an unexpected JSON type reads as
/// absent, so one odd record never fails a batch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSpace {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub space_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub sdk: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub hardware: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub runtime: Option<RawRuntime>,
    #[serde(default, deserialize_with = "lenient")]
    pub private: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub likes: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub runs: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_modified: Option<String>,
}

/// Runtime block of a space (present with `full=true`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRuntime {
    #[serde(default, deserialize_with = "lenient")]
    pub stage: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub hardware: Option<RawRuntimeHardware>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRuntimeHardware {
    #[serde(default, deserialize_with = "lenient")]
    pub current: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub requested: Option<String>,
}

impl RawSpace {
    /// Decode one element of a listing, defaulting every field when the
    /// element is not an object.
    pub fn from_value(value: serde_json::Value) -> Self {
        // serde would otherwise read a JSON array positionally into the fields.
        if !value.is_object() {
            warn!("Space record is not an object, using empty defaults: {}", value);
            return Self::default();
        }
        match serde_json::from_value(value) {
            Ok(space) => space,
            Err(e) => {
                warn!("Unreadable space record, using empty defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Hardware label: the top-level field, else the runtime's current hardware.
    pub fn hardware_label(&self) -> Option<&str> {
        self.hardware.as_deref().or_else(|| {
            self.runtime
                .as_ref()
                .and_then(|r| r.hardware.as_ref())
                .and_then(|h| h.current.as_deref())
        })
    }
}

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A list of strings where non-string elements are skipped.
fn lenient_strings<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}
