//! Integration tests for the SpacesExplorer pipeline.
//!
//! A recording catalog stands in for the hub so every outbound query can be
//! inspected without network access.

use serde_json::json;
use spaces_core::{
    Hardware, Library, RawSpace, SearchInput, SortDirection, SortKey, SpaceCatalog, SpaceQuery,
    SpacesError, SpacesExplorer, COLUMNS,
};
use std::collections::BTreeSet;
use std::sync::Mutex;

/// What the mock catalog answers with.
enum Reply {
    Spaces(Vec<RawSpace>),
    Fail(u16),
}

/// Catalog double that records every query it receives.
struct RecordingCatalog {
    reply: Reply,
    calls: Mutex<Vec<SpaceQuery>>,
}

impl RecordingCatalog {
    fn returning(spaces: Vec<RawSpace>) -> Self {
        Self {
            reply: Reply::Spaces(spaces),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            reply: Reply::Fail(status),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<SpaceQuery> {
        self.calls.lock().unwrap().clone()
    }
}

impl SpaceCatalog for RecordingCatalog {
    fn list_spaces(&self, query: &SpaceQuery) -> spaces_core::Result<Vec<RawSpace>> {
        self.calls.lock().unwrap().push(query.clone());
        match &self.reply {
            Reply::Spaces(spaces) => Ok(spaces.clone()),
            Reply::Fail(status) => Err(SpacesError::Api {
                status: *status,
                message: "catalog unavailable".into(),
            }),
        }
    }
}

fn space(value: serde_json::Value) -> RawSpace {
    RawSpace::from_value(value)
}

fn sample_spaces() -> Vec<RawSpace> {
    vec![
        space(json!({
            "id": "alice/chatbot",
            "author": "alice",
            "spaceType": "gradio",
            "sdk": "gradio",
            "tags": ["nlp", "chat"],
            "hardware": "t4-small",
            "private": false,
            "likes": 120,
            "runs": 5000,
            "lastModified": "2024-06-01T12:00:00.000Z"
        })),
        space(json!({
            "id": "bob/assistant",
            "author": "bob",
            "sdk": "gradio",
            "private": false,
            "likes": 80
        })),
    ]
}

fn end_to_end_input() -> SearchInput {
    SearchInput {
        query: "chat".into(),
        library: "Gradio".into(),
        license: "All".into(),
        tags: Some("nlp, chat".into()),
        visibility: "Public".into(),
        hardware: "GPU".into(),
        sort_by: "Likes".into(),
        direction: "Descending".into(),
        limit: 10,
    }
}

#[test]
fn test_end_to_end_issues_single_translated_call() {
    let catalog = RecordingCatalog::returning(sample_spaces());
    let explorer = SpacesExplorer::new(&catalog);

    let rows = explorer.run(&end_to_end_input()).unwrap();

    let calls = catalog.calls();
    assert_eq!(calls.len(), 1);
    let query = &calls[0];
    assert_eq!(query.search.as_deref(), Some("chat"));
    assert_eq!(query.library, Some(Library::Gradio));
    assert!(query.license.is_none());
    assert_eq!(
        query.tasks,
        Some(BTreeSet::from(["nlp".to_string(), "chat".to_string()]))
    );
    assert_eq!(query.private, Some(false));
    assert_eq!(query.hardware, Some(Hardware::Gpu));
    assert_eq!(query.sort, SortKey::Likes);
    assert_eq!(query.direction, SortDirection::Descending);
    assert_eq!(query.direction.as_str(), "desc");
    assert_eq!(query.limit, 10);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "alice/chatbot");
    assert_eq!(rows[1].name, "bob/assistant");
}

#[test]
fn test_rows_have_exact_output_shape() {
    let catalog = RecordingCatalog::returning(sample_spaces());
    let rows = SpacesExplorer::new(&catalog)
        .run(&end_to_end_input())
        .unwrap();

    let value = serde_json::to_value(&rows[0]).unwrap();
    let keys: BTreeSet<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, COLUMNS.iter().copied().collect::<BTreeSet<_>>());

    assert_eq!(rows[0].tags, "nlp, chat");
    assert_eq!(rows[0].visibility, "Public");
    assert_eq!(rows[0].url, "https://huggingface.co/spaces/alice/chatbot");

    // Second record omits tags, hardware, runs and lastModified.
    assert_eq!(rows[1].tags, "");
    assert_eq!(rows[1].hardware, "");
    assert_eq!(rows[1].runs, 0);
    assert_eq!(rows[1].last_modified, "");
}

#[test]
fn test_sentinels_are_omitted() {
    let catalog = RecordingCatalog::returning(vec![]);
    let explorer = SpacesExplorer::new(&catalog);

    explorer.run(&SearchInput::default()).unwrap();

    let query = &catalog.calls()[0];
    assert!(query.search.is_none());
    assert!(query.library.is_none());
    assert!(query.license.is_none());
    assert!(query.tasks.is_none());
    assert!(query.private.is_none());
    assert!(query.hardware.is_none());
    assert_eq!(query.sort, SortKey::LastModified);
    assert_eq!(query.limit, 20);
}

#[test]
fn test_empty_result_is_not_an_error() {
    let catalog = RecordingCatalog::returning(vec![]);
    let rows = SpacesExplorer::new(&catalog)
        .run(&end_to_end_input())
        .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_remote_failure_propagates_without_rows() {
    let catalog = RecordingCatalog::failing(503);
    let result = SpacesExplorer::new(&catalog).run(&end_to_end_input());

    match result {
        Err(SpacesError::Api { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected remote error, got {:?}", other),
    }
    assert_eq!(catalog.calls().len(), 1);
}

#[test]
fn test_invalid_input_never_reaches_catalog() {
    let catalog = RecordingCatalog::returning(sample_spaces());
    let input = SearchInput {
        direction: "Sideways".into(),
        ..SearchInput::default()
    };

    let err = SpacesExplorer::new(&catalog).run(&input).unwrap_err();
    assert!(!err.is_remote());
    assert!(catalog.calls().is_empty());
}

#[test]
fn test_identical_searches_are_not_cached() {
    let catalog = RecordingCatalog::returning(sample_spaces());
    let explorer = SpacesExplorer::new(&catalog);

    explorer.run(&end_to_end_input()).unwrap();
    explorer.run(&end_to_end_input()).unwrap();

    let calls = catalog.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[test]
fn test_malformed_record_does_not_abort_batch() {
    let catalog = RecordingCatalog::returning(vec![
        space(json!({ "id": "good/one", "likes": 3 })),
        space(json!(["not", "an", "object"])),
        space(json!({ "id": "odd/types", "likes": "lots", "private": "yes" })),
        space(json!({ "id": "good/two" })),
    ]);

    let rows = SpacesExplorer::new(&catalog)
        .run(&SearchInput::default())
        .unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].likes, 3);
    assert_eq!(rows[1].name, "");
    assert_eq!(rows[2].name, "odd/types");
    assert_eq!(rows[2].likes, 0);
    assert_eq!(rows[2].visibility, "Public");
    assert_eq!(rows[3].name, "good/two");
}

#[test]
fn test_private_visibility_filter() {
    let catalog = RecordingCatalog::returning(vec![space(json!({
        "id": "carol/secret",
        "private": true
    }))]);
    let input = SearchInput {
        visibility: "Private".into(),
        ..SearchInput::default()
    };

    let rows = SpacesExplorer::new(&catalog).run(&input).unwrap();

    assert_eq!(catalog.calls()[0].private, Some(true));
    assert_eq!(rows[0].visibility, "Private");
}
