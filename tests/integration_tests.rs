//! Integration tests
//!
//! Tests the full flow: config file → request URL → paginator → envelope JSON

use pagekit::{
    load_config, load_config_from_str, Error, PageEnvelope, PageLinks, PageMarker, PageQuery,
    PageWindow, Paginable, Paginator,
};
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use url::Url;

#[derive(Debug, Clone, Serialize)]
struct Dataset {
    id: u64,
    title: String,
}

fn datasets(total: u64) -> Vec<Dataset> {
    (1..=total)
        .map(|id| Dataset {
            id,
            title: format!("Dataset {id}"),
        })
        .collect()
}

/// Slice the in-memory "result set" the way a data layer would
fn fetch_page(all: &[Dataset], pager: &Paginator) -> Vec<Dataset> {
    let start = usize::try_from(pager.offset()).unwrap().min(all.len());
    let end = usize::try_from(pager.page_end()).unwrap().min(all.len()).max(start);
    all[start..end].to_vec()
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_request_to_envelope() {
    let config = load_config_from_str("default_page_size: 10").unwrap();
    let all = datasets(95);

    let url = Url::parse("https://data.example.com/api/1/datasets/?q=water&page=3").unwrap();
    let pager = PageQuery::from_url(&url, &config)
        .unwrap()
        .paginate(all.len() as u64, &config)
        .unwrap();
    let links = PageLinks::new(url, &config.page_param).unwrap();
    let envelope = PageEnvelope::new(fetch_page(&all, &pager), &pager, &links);

    let value = envelope.to_json().unwrap();
    assert_eq!(value["page"], 3);
    assert_eq!(value["page_size"], 10);
    assert_eq!(value["total"], 95);
    assert_eq!(value["data"].as_array().unwrap().len(), 10);
    assert_eq!(value["data"][0], json!({"id": 21, "title": "Dataset 21"}));
    assert_eq!(
        value["next_page"],
        "https://data.example.com/api/1/datasets/?q=water&page=4"
    );
    assert_eq!(
        value["previous_page"],
        "https://data.example.com/api/1/datasets/?q=water&page=2"
    );
}

#[test]
fn test_walk_all_pages_via_links() {
    let config = load_config_from_str("default_page_size: 7").unwrap();
    let all = datasets(30);

    let mut url = Url::parse("https://data.example.com/api/1/datasets/").unwrap();
    let mut seen = Vec::new();
    let mut visited = 0;

    loop {
        let pager = PageQuery::from_url(&url, &config)
            .unwrap()
            .paginate(all.len() as u64, &config)
            .unwrap();
        let links = PageLinks::new(url.clone(), &config.page_param).unwrap();
        let envelope = PageEnvelope::new(fetch_page(&all, &pager), &pager, &links);
        envelope.validate().unwrap();

        visited += 1;
        seen.extend(envelope.data.iter().map(|d| d.id));

        match envelope.next_page {
            Some(next) => url = Url::parse(&next).unwrap(),
            None => break,
        }
    }

    assert_eq!(visited, 5);
    assert_eq!(seen, (1..=30).collect::<Vec<_>>());
}

#[test]
fn test_last_page_is_partial() {
    let pager = Paginator::new(10, 10, 95).unwrap();
    let page = fetch_page(&datasets(95), &pager);
    assert_eq!(page.len(), 5);
    assert_eq!(page.first().map(|d| d.id), Some(pager.page_start()));
    assert_eq!(page.last().map(|d| d.id), Some(pager.page_end()));
}

#[test]
fn test_out_of_range_page_is_empty() {
    let config = load_config_from_str("").unwrap();
    let url = Url::parse("https://data.example.com/items?page=99").unwrap();
    let pager = PageQuery::from_url(&url, &config)
        .unwrap()
        .paginate(45, &config)
        .unwrap();

    assert!(fetch_page(&datasets(45), &pager).is_empty());
    assert!(!pager.has_next());
    assert!(pager.has_prev());
}

#[test]
fn test_invalid_request_values() {
    let config = load_config_from_str("").unwrap();

    let url = Url::parse("https://data.example.com/items?page=zero").unwrap();
    assert!(matches!(
        PageQuery::from_url(&url, &config),
        Err(Error::InvalidArgument { .. })
    ));

    let url = Url::parse("https://data.example.com/items?page=0").unwrap();
    let query = PageQuery::from_url(&url, &config).unwrap();
    assert!(query.paginate(10, &config).unwrap_err().is_user_input());
}

// ============================================================================
// Navigation with configured window
// ============================================================================

#[test]
fn test_configured_window_from_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "window:\n  left_edge: 1\n  left_current: 1\n  right_current: 2\n  right_edge: 1"
    )
    .unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.window, PageWindow::new(1, 1, 2, 1));

    let pager = Paginator::new(6, 5, 100).unwrap();
    let rendered: Vec<String> = pager
        .iter_pages_with(config.window)
        .map(|m| m.to_string())
        .collect();
    assert_eq!(rendered.join(" "), "1 … 5 6 7 … 20");
}

#[test]
fn test_navigation_json_for_templates() {
    let pager = Paginator::new(5, 10, 200).unwrap();
    let markers: Vec<PageMarker> = pager.iter_pages().collect();
    assert_eq!(
        serde_json::to_value(&markers).unwrap(),
        json!([1, 2, 3, 4, 5, 6, 7, 8, 9, null, 19, 20])
    );
}

#[test]
fn test_summary_json() {
    let summary = Paginator::new(1, 10, 95).unwrap().summary();
    assert_eq!(
        serde_json::to_value(summary).unwrap(),
        json!({
            "page": 1,
            "page_size": 10,
            "total": 95,
            "pages": 10,
            "has_prev": false,
            "has_next": true,
            "page_start": 1,
            "page_end": 10,
        })
    );
}

#[test]
fn test_unbounded_listing() {
    let config = load_config_from_str("max_page_size: null\ndefault_page_size: 0").unwrap();
    let pager = PageQuery::default().paginate(42, &config).unwrap();
    let envelope = PageEnvelope::without_links(fetch_page(&datasets(42), &pager), &pager);

    assert_eq!(envelope.data.len(), 42);
    assert_eq!(envelope.pages(), 1);
    assert_eq!(pager.iter_pages().collect::<Vec<_>>(), vec![PageMarker::Page(1)]);
}
