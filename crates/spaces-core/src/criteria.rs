//! Search form input and its normalized filter criteria.
//!
//! [`SearchInput`] carries the raw values a form (or the CLI) collects.
//! [`normalize`] turns them into [`FilterCriteria`], where every dropdown left
//! at the "All" sentinel becomes `None` and every label has been matched
//! against an exhaustive option table.

use crate::config::SearchConfig;
use crate::error::{Result, SpacesError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A finite set of dropdown choices with fixed display labels.
pub trait FormOption: Sized + Copy + 'static {
    /// Every variant, in display order.
    fn variants() -> &'static [Self];

    /// Display label shown to the user.
    fn label(&self) -> &'static str;

    /// Exact-match lookup by display label.
    fn from_label(label: &str) -> Option<Self> {
        Self::variants().iter().copied().find(|v| v.label() == label)
    }

    /// Display labels in order.
    fn labels() -> Vec<&'static str> {
        Self::variants().iter().map(|v| v.label()).collect()
    }
}

/// Application framework a space is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Library {
    Gradio,
    Streamlit,
    Flask,
    FastApi,
    Transformers,
    Diffusers,
}

impl Library {
    /// Tag value understood by the hub's `filter` parameter.
    pub fn as_filter(&self) -> &'static str {
        match self {
            Library::Gradio => "gradio",
            Library::Streamlit => "streamlit",
            Library::Flask => "flask",
            Library::FastApi => "fastapi",
            Library::Transformers => "transformers",
            Library::Diffusers => "diffusers",
        }
    }
}

impl FormOption for Library {
    fn variants() -> &'static [Self] {
        &[
            Library::Gradio,
            Library::Streamlit,
            Library::Flask,
            Library::FastApi,
            Library::Transformers,
            Library::Diffusers,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            Library::Gradio => "Gradio",
            Library::Streamlit => "Streamlit",
            Library::Flask => "Flask",
            Library::FastApi => "FastAPI",
            Library::Transformers => "Transformers",
            Library::Diffusers => "Diffusers",
        }
    }
}

/// Hardware class a space runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hardware {
    Cpu,
    Gpu,
}

impl Hardware {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hardware::Cpu => "cpu",
            Hardware::Gpu => "gpu",
        }
    }
}

impl FormOption for Hardware {
    fn variants() -> &'static [Self] {
        &[Hardware::Cpu, Hardware::Gpu]
    }

    fn label(&self) -> &'static str {
        match self {
            Hardware::Cpu => "CPU",
            Hardware::Gpu => "GPU",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// Value of the catalog's `private` parameter.
    pub fn is_private(&self) -> bool {
        matches!(self, Visibility::Private)
    }

    /// Display label for a record's `private` flag.
    pub fn from_private(private: bool) -> Self {
        if private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

impl FormOption for Visibility {
    fn variants() -> &'static [Self] {
        &[Visibility::Public, Visibility::Private]
    }

    fn label(&self) -> &'static str {
        match self {
            Visibility::Public => "Public",
            Visibility::Private => "Private",
        }
    }
}

/// Attribute used to order results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    LastModified,
    FirstIndexed,
    Likes,
    Runs,
}

impl SortKey {
    /// Field name the hub sorts on.
    pub fn as_api_field(&self) -> &'static str {
        match self {
            SortKey::LastModified => "lastModified",
            SortKey::FirstIndexed => "createdAt",
            SortKey::Likes => "likes",
            SortKey::Runs => "runs",
        }
    }
}

impl FormOption for SortKey {
    fn variants() -> &'static [Self] {
        &[
            SortKey::LastModified,
            SortKey::FirstIndexed,
            SortKey::Likes,
            SortKey::Runs,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            SortKey::LastModified => "Last Modified",
            SortKey::FirstIndexed => "First Indexed",
            SortKey::Likes => "Likes",
            SortKey::Runs => "Runs",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Descending,
    Ascending,
}

impl SortDirection {
    /// "asc" or "desc".
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Descending => "desc",
            SortDirection::Ascending => "asc",
        }
    }

    /// Ascending order reverses the catalog's natural descending order.
    pub fn is_reverse(&self) -> bool {
        matches!(self, SortDirection::Ascending)
    }
}

impl FormOption for SortDirection {
    fn variants() -> &'static [Self] {
        &[SortDirection::Descending, SortDirection::Ascending]
    }

    fn label(&self) -> &'static str {
        match self {
            SortDirection::Descending => "Descending",
            SortDirection::Ascending => "Ascending",
        }
    }
}

/// License identifiers offered by the form. Other identifiers are passed
/// through unchanged.
pub const LICENSE_OPTIONS: &[&str] = &["Apache-2.0", "MIT", "BSD-3-Clause", "GPL-3.0"];

/// One dropdown's choices, for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionTable {
    pub name: &'static str,
    pub values: Vec<&'static str>,
    pub default: &'static str,
}

fn with_all(mut labels: Vec<&'static str>) -> Vec<&'static str> {
    labels.insert(0, SearchConfig::ALL);
    labels
}

/// Every dropdown the search form presents, in form order.
pub fn option_tables() -> Vec<OptionTable> {
    vec![
        OptionTable {
            name: "Library",
            values: with_all(Library::labels()),
            default: SearchConfig::ALL,
        },
        OptionTable {
            name: "License",
            values: with_all(LICENSE_OPTIONS.to_vec()),
            default: SearchConfig::ALL,
        },
        OptionTable {
            name: "Visibility",
            values: with_all(Visibility::labels()),
            default: SearchConfig::ALL,
        },
        OptionTable {
            name: "Hardware",
            values: with_all(Hardware::labels()),
            default: SearchConfig::ALL,
        },
        OptionTable {
            name: "Sort By",
            values: SortKey::labels(),
            default: SortKey::default().label(),
        },
        OptionTable {
            name: "Direction",
            values: SortDirection::labels(),
            default: SortDirection::default().label(),
        },
    ]
}

/// Raw values as collected from the search form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInput {
    pub query: String,
    pub library: String,
    pub license: String,
    /// Comma-separated tags
    pub tags: Option<String>,
    pub visibility: String,
    pub hardware: String,
    pub sort_by: String,
    pub direction: String,
    pub limit: u32,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self {
            query: String::new(),
            library: SearchConfig::ALL.to_string(),
            license: SearchConfig::ALL.to_string(),
            tags: None,
            visibility: SearchConfig::ALL.to_string(),
            hardware: SearchConfig::ALL.to_string(),
            sort_by: SortKey::default().label().to_string(),
            direction: SortDirection::default().label().to_string(),
            limit: SearchConfig::DEFAULT_LIMIT,
        }
    }
}

/// Normalized criteria for one search. `None` means "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub query: Option<String>,
    pub library: Option<Library>,
    pub license: Option<String>,
    pub tags: Option<BTreeSet<String>>,
    pub visibility: Option<Visibility>,
    pub hardware: Option<Hardware>,
    pub sort: SortKey,
    pub direction: SortDirection,
    pub limit: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: None,
            library: None,
            license: None,
            tags: None,
            visibility: None,
            hardware: None,
            sort: SortKey::default(),
            direction: SortDirection::default(),
            limit: SearchConfig::DEFAULT_LIMIT,
        }
    }
}

/// Normalize raw form input into filter criteria.
///
/// Dropdown values are matched exactly; an unrecognized label is a
/// validation error rather than a silent default.
pub fn normalize(raw: &SearchInput) -> Result<FilterCriteria> {
    let limit = raw.limit;
    if !(SearchConfig::MIN_LIMIT..=SearchConfig::MAX_LIMIT).contains(&limit) {
        return Err(SpacesError::validation(
            "limit",
            format!(
                "{} is outside {}..={}",
                limit,
                SearchConfig::MIN_LIMIT,
                SearchConfig::MAX_LIMIT
            ),
        ));
    }

    Ok(FilterCriteria {
        query: non_empty(&raw.query),
        library: dropdown("library", &raw.library)?,
        license: if raw.license == SearchConfig::ALL {
            None
        } else {
            non_empty(&raw.license)
        },
        tags: parse_tags(raw.tags.as_deref()),
        visibility: dropdown("visibility", &raw.visibility)?,
        hardware: dropdown("hardware", &raw.hardware)?,
        sort: required("sort_by", &raw.sort_by)?,
        direction: required("direction", &raw.direction)?,
        limit,
    })
}

/// Split a comma-separated tag string into trimmed, non-empty tokens.
///
/// Returns `None` when no tokens remain, so an empty field imposes no filter.
pub fn parse_tags(raw: Option<&str>) -> Option<BTreeSet<String>> {
    let tags: BTreeSet<String> = raw?
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();

    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Dropdown with an "All" sentinel.
fn dropdown<T: FormOption>(field: &str, value: &str) -> Result<Option<T>> {
    if value == SearchConfig::ALL {
        return Ok(None);
    }
    required(field, value).map(Some)
}

/// Dropdown without a sentinel.
fn required<T: FormOption>(field: &str, value: &str) -> Result<T> {
    T::from_label(value).ok_or_else(|| {
        SpacesError::validation(
            field,
            format!(
                "unknown option '{}' (expected one of: {})",
                value,
                T::labels().join(", ")
            ),
        )
    })
}
