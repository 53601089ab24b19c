//! Spaces Core - filter translation and result mapping for HuggingFace Spaces.
//!
//! Turns raw search form values into one catalog list call and flattens the
//! returned records into display rows. The catalog is injected, so the same
//! pipeline runs against the live hub or a test double.
//!
//! # Example
//!
//! ```rust,no_run
//! use spaces_core::{HubCatalog, SearchInput, SpacesExplorer};
//!
//! fn main() -> spaces_core::Result<()> {
//!     let explorer = SpacesExplorer::new(HubCatalog::from_env()?);
//!
//!     let input = SearchInput {
//!         query: "chat".to_string(),
//!         library: "Gradio".to_string(),
//!         ..SearchInput::default()
//!     };
//!
//!     for row in explorer.run(&input)? {
//!         println!("{} ({} likes) {}", row.name, row.likes, row.url);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod criteria;
pub mod error;
pub mod explorer;
pub mod mapper;

// Re-export commonly used types
pub use catalog::{HubCatalog, RawSpace, SpaceCatalog, SpaceQuery};
pub use config::{HubConfig, NetworkConfig, SearchConfig};
pub use criteria::{
    normalize, option_tables, parse_tags, FilterCriteria, FormOption, Hardware, Library,
    OptionTable, SearchInput, SortDirection, SortKey, Visibility,
};
pub use error::{Result, SpacesError};
pub use explorer::SpacesExplorer;
pub use mapper::{map_row, space_url, SpaceRow, COLUMNS};
