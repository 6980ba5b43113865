//! Integration tests for the listing synchronization engine.
//!
//! Cover pagination, sort/filter resets, stale-response discard, error
//! recovery and facet accumulation through the public API.

use catalog::testing::{MockListingSource, PagedListingSource};
use catalog::{
    BrowseConfig, ComparisonSet, FacetGroup, FacetOption, FacetValue, ListingItem, ListingPage,
    ListingSource, ListingsEngine, LoadOutcome, SelectedFacet, SortOption, SourceError,
    ToggleOutcome,
};

fn engine(page_size: u32) -> ListingsEngine {
    ListingsEngine::new(BrowseConfig::new("toilets").with_page_size(page_size)).unwrap()
}

fn brand_group(options: &[(&str, u32)]) -> FacetGroup {
    let mut group = FacetGroup::new("brand", "Brand");
    group.options = options
        .iter()
        .map(|(id, count)| {
            FacetOption::new(*id, id.to_uppercase(), FacetValue::Text(id.to_string()))
                .with_count(*count)
        })
        .collect();
    group
}

fn single_item_page(id: &str, total: u64) -> ListingPage {
    ListingPage::new(vec![ListingItem::new(id, id, 10.0, None)], total)
}

#[tokio::test]
async fn test_pages_through_to_total() {
    let source = PagedListingSource::new(100);
    let mut engine = engine(24);

    assert_eq!(engine.refresh(&source).await, LoadOutcome::Applied);
    assert_eq!(engine.items().len(), 24);
    assert_eq!(engine.total_results(), 100);
    assert!(engine.has_more());

    for expected in [48, 72, 96] {
        assert_eq!(engine.load_more(&source).await, LoadOutcome::Applied);
        assert_eq!(engine.items().len(), expected);
        assert!(engine.has_more());
    }

    assert_eq!(engine.load_more(&source).await, LoadOutcome::Applied);
    assert_eq!(engine.items().len(), 100);
    assert!(!engine.has_more());

    assert_eq!(engine.load_more(&source).await, LoadOutcome::Skipped);
    assert_eq!(source.request_count(), 5);

    let pages: Vec<u32> = source.requests().iter().map(|r| r.page_number).collect();
    assert_eq!(pages, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_load_more_strictly_grows_and_never_exceeds_total() {
    let source = PagedListingSource::new(50);
    let mut engine = engine(7);
    engine.refresh(&source).await;

    let mut calls = 0;
    while engine.has_more() {
        let before = engine.items().len();
        assert_eq!(engine.load_more(&source).await, LoadOutcome::Applied);
        let after = engine.items().len();

        assert!(after > before);
        assert!(after as u64 <= engine.total_results());
        calls += 1;
    }

    assert_eq!(calls, 7);
    assert_eq!(engine.items().len(), 50);
}

#[tokio::test]
async fn test_sort_change_resets_to_first_page() {
    let source = PagedListingSource::new(100);
    let mut engine = engine(24);
    engine.refresh(&source).await;
    engine.load_more(&source).await;
    engine.load_more(&source).await;
    assert_eq!(engine.items().len(), 72);

    let outcome = engine.change_sort(&source, SortOption::PriceLowToHigh).await;
    assert_eq!(outcome, LoadOutcome::Applied);

    assert_eq!(engine.items().len(), 24);
    assert_eq!(engine.items()[0].id, PagedListingSource::item_id(2, 0));
    assert_eq!(engine.sort(), SortOption::PriceLowToHigh);

    let last = source.requests().pop().unwrap();
    assert_eq!(last.page_number, 1);
    assert_eq!(last.sort, SortOption::PriceLowToHigh);

    engine.load_more(&source).await;
    assert_eq!(source.requests().pop().unwrap().page_number, 2);
    assert_eq!(engine.items()[24].id, PagedListingSource::item_id(2, 24));
}

#[tokio::test]
async fn test_facet_change_resets_and_empty_selection_removes_group() {
    let source = PagedListingSource::new(100);
    let mut engine = engine(24);
    engine.refresh(&source).await;
    engine.load_more(&source).await;

    let acme = SelectedFacet::new("acme", FacetValue::Text("Acme".into()));
    engine
        .change_facet_selection(&source, "brand", vec![acme])
        .await;

    assert_eq!(engine.items().len(), 24);
    let request = source.requests().pop().unwrap();
    assert_eq!(request.page_number, 1);
    assert!(request.facets.is_selected("brand", "acme"));
    assert!(request.to_wire().facets.is_some());

    engine.change_facet_selection(&source, "brand", vec![]).await;

    assert!(!engine.selected_facets().contains_group("brand"));
    let request = source.requests().pop().unwrap();
    assert!(request.facets.is_empty());
    assert!(request.to_wire().facets.is_none());
}

#[tokio::test]
async fn test_toggle_facet_option_round_trip() {
    let source = PagedListingSource::new(10);
    let mut engine = engine(24);
    engine.refresh(&source).await;

    let range = FacetValue::Range { gte: 0.0, lte: 100.0 };
    engine
        .toggle_facet_option(&source, "prices", "0-100", range.clone())
        .await;
    assert!(engine.selected_facets().is_selected("prices", "0-100"));

    engine
        .toggle_facet_option(&source, "prices", "0-100", range)
        .await;
    assert!(engine.selected_facets().is_empty());
}

#[tokio::test]
async fn test_older_reset_resolving_late_is_discarded() {
    let source = PagedListingSource::new(100);
    let mut engine = engine(24);
    engine.refresh(&source).await;

    let a = engine.begin_sort_change(SortOption::PriceLowToHigh);
    let b = engine.begin_sort_change(SortOption::LargestDiscount);
    assert!(b.generation() > a.generation());

    let a_result = source.fetch(a.request()).await;
    let b_result = source.fetch(b.request()).await;

    assert_eq!(engine.apply(b, b_result), LoadOutcome::Applied);
    assert_eq!(engine.apply(a, a_result), LoadOutcome::Stale);

    assert_eq!(engine.sort(), SortOption::LargestDiscount);
    assert_eq!(engine.items().len(), 24);
    assert!(engine
        .items()
        .iter()
        .all(|item| item.id.starts_with("item-4-")));
    assert!(!engine.is_loading());
}

#[tokio::test]
async fn test_rapid_facet_toggles_apply_only_latest() {
    let source = MockListingSource::new()
        .with_page(single_item_page("only-acme", 1))
        .with_page(single_item_page("acme-and-beta", 1));
    let mut engine = engine(24);

    let a = engine.begin_toggle_facet("brand", "acme", FacetValue::Text("Acme".into()));
    let b = engine.begin_toggle_facet("brand", "beta", FacetValue::Text("Beta".into()));

    assert!(b.request().facets.is_selected("brand", "acme"));
    assert!(b.request().facets.is_selected("brand", "beta"));

    let a_result = source.fetch(a.request()).await;
    let b_result = source.fetch(b.request()).await;

    // A resolves first but B was issued after it
    assert_eq!(engine.apply(a, a_result), LoadOutcome::Stale);
    assert!(engine.is_loading());
    assert!(engine.items().is_empty());

    assert_eq!(engine.apply(b, b_result), LoadOutcome::Applied);
    assert_eq!(engine.items()[0].id, "acme-and-beta");
}

#[tokio::test]
async fn test_reset_supersedes_inflight_load_more() {
    let source = PagedListingSource::new(100);
    let mut engine = engine(24);
    engine.refresh(&source).await;

    let more = engine.begin_load_more().unwrap();
    let reset = engine.begin_sort_change(SortOption::PriceHighToLow);

    let more_result = source.fetch(more.request()).await;
    let reset_result = source.fetch(reset.request()).await;

    assert_eq!(engine.apply(reset, reset_result), LoadOutcome::Applied);
    assert_eq!(engine.apply(more, more_result), LoadOutcome::Stale);

    assert_eq!(engine.items().len(), 24);
    assert!(engine
        .items()
        .iter()
        .all(|item| item.id.starts_with("item-3-")));
    assert_eq!(engine.next_page(), 2);
}

#[tokio::test]
async fn test_failed_load_more_keeps_list_and_allows_retry() {
    let source = PagedListingSource::new(100);
    let mut engine = engine(24);
    engine.refresh(&source).await;
    let before = engine.items().to_vec();

    source.fail_next();
    assert_eq!(engine.load_more(&source).await, LoadOutcome::Failed);

    assert_eq!(engine.items(), before.as_slice());
    assert!(engine.error_message().is_some());
    assert!(!engine.is_loading());
    assert!(engine.has_more());

    assert_eq!(engine.load_more(&source).await, LoadOutcome::Applied);
    assert_eq!(engine.items().len(), 48);
    assert!(engine.error_message().is_none());

    let pages: Vec<u32> = source.requests().iter().map(|r| r.page_number).collect();
    assert_eq!(pages, vec![1, 2, 2]);
}

#[tokio::test]
async fn test_failed_reset_keeps_previous_list_and_catalog() {
    let source = PagedListingSource::new(100).with_facets(vec![brand_group(&[("acme", 3)])]);
    let mut engine = engine(24);
    engine.refresh(&source).await;
    let before = engine.items().to_vec();

    source.fail_next();
    let outcome = engine.change_sort(&source, SortOption::PriceLowToHigh).await;

    assert_eq!(outcome, LoadOutcome::Failed);
    assert_eq!(engine.items(), before.as_slice());
    assert_eq!(engine.facet_catalog().len(), 1);
    assert_eq!(
        engine.error_message(),
        Some("Something went wrong while loading products.")
    );
    assert!(matches!(engine.last_error(), Some(SourceError::Transport(_))));
    assert!(!engine.is_loading());

    // Next load more retries the reset instead of appending to the old list
    assert_eq!(engine.load_more(&source).await, LoadOutcome::Applied);
    let last = source.requests().pop().unwrap();
    assert_eq!(last.page_number, 1);
    assert_eq!(last.sort, SortOption::PriceLowToHigh);
    assert_eq!(engine.items().len(), 24);
    assert_eq!(engine.items()[0].id, PagedListingSource::item_id(2, 0));
}

#[tokio::test]
async fn test_facet_catalog_accumulates_across_responses() {
    let source = MockListingSource::new()
        .with_page(single_item_page("a", 10).with_facets(vec![brand_group(&[("acme", 3), ("beta", 1)])]))
        .with_page(single_item_page("b", 10).with_facets(vec![brand_group(&[("beta", 2), ("gamma", 5)])]))
        .with_page(single_item_page("c", 10));
    let mut engine = engine(1);

    engine.refresh(&source).await;
    engine.load_more(&source).await;

    let counts: Vec<(String, u32)> = engine
        .facet_catalog()
        .get("brand")
        .unwrap()
        .options
        .iter()
        .map(|o| (o.identifier.clone(), o.product_count))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("acme".to_string(), 0),
            ("beta".to_string(), 2),
            ("gamma".to_string(), 5)
        ]
    );

    // A response without facets leaves the catalog as it was
    let snapshot = engine.facet_catalog().get("brand").cloned();
    engine.load_more(&source).await;
    assert_eq!(engine.facet_catalog().get("brand").cloned(), snapshot);
    assert_eq!(engine.items().len(), 3);
}

#[tokio::test]
async fn test_catalog_survives_filter_reset() {
    let source = MockListingSource::new()
        .with_page(single_item_page("a", 1).with_facets(vec![brand_group(&[("acme", 3), ("beta", 1)])]))
        .with_page(single_item_page("b", 1).with_facets(vec![brand_group(&[("acme", 3)])]));
    let mut engine = engine(24);
    engine.refresh(&source).await;

    engine
        .toggle_facet_option(&source, "brand", "acme", FacetValue::Text("acme".into()))
        .await;

    let group = engine.facet_catalog().get("brand").unwrap();
    assert_eq!(group.options.len(), 2);
    assert_eq!(group.option("beta").unwrap().product_count, 0);
}

#[tokio::test]
async fn test_exhausted_mock_reports_transport_error() {
    let source = MockListingSource::new();
    let mut engine = engine(24);

    assert_eq!(engine.refresh(&source).await, LoadOutcome::Failed);
    assert!(engine.items().is_empty());
    assert!(!engine.has_more());
}

#[tokio::test]
async fn test_snapshot_exposes_ui_state() {
    let source = PagedListingSource::new(30).with_facets(vec![brand_group(&[("acme", 3)])]);
    let mut engine = engine(24);
    engine.refresh(&source).await;

    let view = engine.snapshot();
    assert_eq!(view.items.len(), 24);
    assert!(view.has_more);
    assert!(!view.is_loading);
    assert!(view.error_message.is_none());
    assert_eq!(view.facet_catalog.len(), 1);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["total_results"], 30);
    assert_eq!(json["sort"], 1);
    assert!(json["error_message"].is_null());
}

#[tokio::test]
async fn test_comparison_holds_items_across_resets() {
    let source = PagedListingSource::new(100);
    let mut engine = engine(24);
    let mut compare = ComparisonSet::new();

    engine.refresh(&source).await;
    for item in engine.items().iter().take(6) {
        compare.toggle(item.clone());
    }
    assert_eq!(compare.len(), 5);
    assert!(!compare.can_add_more());

    engine.change_sort(&source, SortOption::LargestDiscount).await;
    assert_eq!(compare.items()[0].id, PagedListingSource::item_id(1, 0));

    let first = compare.items()[0].clone();
    assert_eq!(compare.toggle(first), ToggleOutcome::Removed);
    assert!(compare.can_add_more());
}

#[tokio::test]
async fn test_repeated_facet_ids_sent_once() {
    let source = MockListingSource::new()
        .with_page(single_item_page("a", 1))
        .with_page(single_item_page("b", 1));
    let mut engine = engine(24);
    engine.refresh(&source).await;

    let acme = SelectedFacet::new("acme", FacetValue::Text("Acme".into()));
    let outcome = engine
        .change_facet_selection(&source, "brand", vec![acme.clone(), acme])
        .await;

    assert_eq!(outcome, LoadOutcome::Applied);
    assert_eq!(engine.selected_facets().get("brand").len(), 1);

    let sent = source.last_request().unwrap();
    let wire = sent.to_wire().facets.unwrap();
    assert_eq!(wire["brand"].len(), 1);
    assert_eq!(wire["brand"][0].identifier, "acme");
}

#[tokio::test]
async fn test_initial_sort_used_for_first_load() {
    let source = PagedListingSource::new(10);
    let config = BrowseConfig::new("toilets").with_initial_sort(SortOption::LargestDiscount);
    let mut engine = ListingsEngine::new(config).unwrap();

    engine.refresh(&source).await;

    assert_eq!(engine.sort(), SortOption::LargestDiscount);
    assert_eq!(source.requests()[0].sort, SortOption::LargestDiscount);
    assert_eq!(
        engine.items()[0].id,
        PagedListingSource::item_id(SortOption::LargestDiscount.code(), 0)
    );
}

#[tokio::test]
async fn test_scripted_parse_error_surfaces_generic_message() {
    let source = MockListingSource::new()
        .with_error(SourceError::Parse("missing field `products`".into()));
    let mut engine = engine(24);

    assert_eq!(engine.refresh(&source).await, LoadOutcome::Failed);
    assert_eq!(engine.error_message(), Some(catalog::LOAD_FAILED_MESSAGE));
    assert!(matches!(engine.last_error(), Some(SourceError::Parse(_))));
    assert_eq!(source.last_request().unwrap().page_number, 1);
}
