// tests/search_sync_tests.rs

use campsite_backend::{
    client::{
        price_range::order_price_range,
        search_sync::{MemoryNavigator, NavigateOptions, Navigator, SearchParamsSync, parse_search_params},
    },
    models::{
        enums::{CampsiteType, SortOption},
        search::SearchFilters,
    },
};

fn sync_at(search: &str) -> SearchParamsSync<MemoryNavigator> {
    SearchParamsSync::new(MemoryNavigator::new("/search", search))
}

fn last_href(sync: &SearchParamsSync<MemoryNavigator>) -> &str {
    sync.navigator().last_href().expect("no navigation happened")
}

#[test]
fn reads_filters_from_url() {
    let sync = sync_at("?q=mountain&types=glamping,cabin&page=2");
    let filters = sync.filters();

    assert_eq!(filters.q.as_deref(), Some("mountain"));
    assert_eq!(filters.types, Some(vec![CampsiteType::Glamping, CampsiteType::Cabin]));
    assert_eq!(filters.page, 2);
    assert!(sync.has_active_filters());
}

#[test]
fn invalid_params_are_dropped_not_fatal() {
    let filters = parse_search_params("q=beach&page=0&sort=cheapest&minPrice=5000&maxPrice=100");

    assert_eq!(filters.q.as_deref(), Some("beach"));
    assert_eq!(filters.page, 1);
    assert_eq!(filters.sort, SortOption::Rating);
    // The reversed pair loses its minimum; the maximum still applies.
    assert_eq!(filters.min_price, None);
    assert_eq!(filters.max_price, Some(100.0));
}

#[test]
fn set_query_writes_canonical_url() {
    let mut sync = sync_at("");

    sync.set_query("mountain camping");

    assert_eq!(last_href(&sync), "/search?q=mountain+camping");
}

#[test]
fn set_types_and_price_write_canonical_url() {
    let mut sync = sync_at("");

    sync.set_types(vec![CampsiteType::Glamping, CampsiteType::Cabin]);
    sync.set_price_range(800.0, 10_000.0);

    assert_eq!(last_href(&sync), "/search?types=glamping%2Ccabin&minPrice=800");
}

#[test]
fn navigation_never_scrolls() {
    let mut sync = sync_at("");

    sync.set_query("river");
    sync.set_sort(SortOption::Newest);
    sync.set_page(3);
    sync.clear_filters();

    let history = sync.navigator().history();
    assert_eq!(history.len(), 4);
    assert!(history.iter().all(|(_, options)| *options == NavigateOptions { scroll: false }));
}

#[test]
fn filter_changes_reset_the_page() {
    let mut sync = sync_at("page=5&q=lake");

    sync.toggle_amenity("wifi");

    let filters = sync.filters();
    assert_eq!(filters.page, 1);
    assert_eq!(filters.amenities, Some(vec!["wifi".to_string()]));
    assert_eq!(last_href(&sync), "/search?q=lake&amenities=wifi");
}

#[test]
fn sort_change_resets_the_page() {
    let mut sync = sync_at("page=4");

    sync.set_sort(SortOption::PriceAsc);

    assert_eq!(last_href(&sync), "/search?sort=price_asc");
}

#[test]
fn page_change_keeps_other_filters() {
    let mut sync = sync_at("q=lake&sort=newest");

    sync.set_page(3);

    let filters = sync.filters();
    assert_eq!(filters.page, 3);
    assert_eq!(filters.q.as_deref(), Some("lake"));
    assert_eq!(filters.sort, SortOption::Newest);
}

#[test]
fn toggling_a_type_twice_restores_the_url() {
    let mut sync = sync_at("types=camping&minRating=4");
    let before = sync.filters();

    sync.toggle_type(CampsiteType::Bungalow);
    assert_eq!(
        sync.filters().types,
        Some(vec![CampsiteType::Camping, CampsiteType::Bungalow])
    );

    sync.toggle_type(CampsiteType::Bungalow);
    assert_eq!(sync.filters(), before);
}

#[test]
fn toggling_the_last_type_removes_the_key() {
    let mut sync = sync_at("types=cabin");

    sync.toggle_type(CampsiteType::Cabin);

    assert_eq!(last_href(&sync), "/search");
    assert_eq!(sync.filters().types, None);
}

#[test]
fn reversed_slider_positions_are_reordered() {
    let mut sync = sync_at("");

    sync.set_price_range(5000.0, 1200.0);

    let filters = sync.filters();
    assert_eq!(filters.min_price, Some(1200.0));
    assert_eq!(filters.max_price, Some(5000.0));
}

#[test]
fn order_price_range_clamps_and_swaps() {
    assert_eq!(order_price_range(300.0, 100.0), (100.0, 300.0));
    assert_eq!(order_price_range(-50.0, 250_000.0), (0.0, 100_000.0));
    assert_eq!(order_price_range(f64::NAN, 500.0), (0.0, 500.0));
}

#[test]
fn set_province_keeps_id_and_slug_together() {
    let mut sync = sync_at("");

    sync.set_province(Some(38), Some("chiang-mai".to_string()));
    assert_eq!(last_href(&sync), "/search?provinceId=38&provinceSlug=chiang-mai");

    sync.set_province(None, None);
    assert_eq!(last_href(&sync), "/search");
}

#[test]
fn min_rating_and_featured_are_filters() {
    let mut sync = sync_at("");

    sync.set_min_rating(Some(4.5));
    sync.set_featured(Some(true));

    assert_eq!(last_href(&sync), "/search?minRating=4.5&featured=true");
    assert!(sync.has_active_filters());
}

#[test]
fn clear_filters_returns_to_bare_path() {
    let mut sync = sync_at("q=lake&types=cabin&sort=newest&page=2&amenities=wifi");

    sync.clear_filters();

    assert_eq!(last_href(&sync), "/search");
    assert_eq!(sync.filters(), SearchFilters::default());
    assert!(!sync.has_active_filters());
}

#[test]
fn url_round_trips_for_canonical_filters() {
    let filters = SearchFilters {
        q: Some("hot spring".to_string()),
        types: Some(vec![CampsiteType::RvCaravan, CampsiteType::Camping]),
        amenities: Some(vec!["wifi".to_string(), "pets".to_string()]),
        max_price: Some(3500.0),
        min_rating: Some(3.0),
        sort: SortOption::PriceDesc,
        page: 2,
        ..SearchFilters::default()
    };

    let navigator = MemoryNavigator::new("/search", &filters.to_query_string());
    let sync = SearchParamsSync::new(navigator);

    assert_eq!(sync.filters(), filters);
    assert_eq!(sync.navigator().pathname(), "/search");
}

#[test]
fn toggling_off_a_repeated_type_removes_every_copy() {
    let mut sync = sync_at("types=camping,cabin,camping");

    sync.toggle_type(CampsiteType::Camping);
    assert_eq!(last_href(&sync), "/search?types=cabin");

    sync.toggle_type(CampsiteType::Camping);
    assert_eq!(sync.filters().types, Some(vec![CampsiteType::Cabin, CampsiteType::Camping]));
}

#[test]
fn sort_and_limit_count_as_active() {
    assert!(parse_search_params("sort=price_asc").has_active_filters());
    assert!(parse_search_params("limit=24").has_active_filters());
    assert!(!parse_search_params("page=3").has_active_filters());
}
