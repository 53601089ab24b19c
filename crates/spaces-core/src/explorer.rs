//! The search pipeline: normalize, query the catalog once, map rows.

use crate::catalog::{RawSpace, SpaceCatalog, SpaceQuery};
use crate::criteria::{normalize, FilterCriteria, SearchInput};
use crate::error::Result;
use crate::mapper::{map_row, SpaceRow};
use tracing::{debug, info};

/// Filter translator and result mapper over an injected catalog.
///
/// Holds no state besides the catalog handle; every call to [`run`] performs
/// its own remote request.
///
/// [`run`]: SpacesExplorer::run
#[derive(Debug)]
pub struct SpacesExplorer<C> {
    catalog: C,
}

impl<C: SpaceCatalog> SpacesExplorer<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Issue exactly one catalog call for the given criteria.
    pub fn search(&self, criteria: &FilterCriteria) -> Result<Vec<RawSpace>> {
        let query = SpaceQuery::from(criteria);
        debug!("Catalog query: {:?}", query);
        self.catalog.list_spaces(&query)
    }

    /// Run a full search from raw form input.
    ///
    /// Fails without rows if normalization or the catalog call fails; an empty
    /// result set is `Ok(vec![])`.
    pub fn run(&self, input: &SearchInput) -> Result<Vec<SpaceRow>> {
        let criteria = normalize(input)?;
        let spaces = self.search(&criteria)?;
        let rows: Vec<SpaceRow> = spaces.iter().map(map_row).collect();
        info!("Search produced {} rows", rows.len());
        Ok(rows)
    }
}
