// src/client/search_sync.rs

use std::collections::HashSet;

use crate::{
    client::price_range::order_price_range,
    models::{
        enums::{CampsiteType, SortOption},
        search::{DEFAULT_PAGE, SearchFilters},
    },
    validation::{ParseOptions, RawInput, Schema},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Scroll to the top after navigating.
    pub scroll: bool,
}

/// The host's router: where the page is, and how to move it.
pub trait Navigator {
    fn pathname(&self) -> &str;

    /// Current query string, with or without the leading `?`.
    fn search(&self) -> &str;

    /// Adds a history entry for `href` (a pathname with an optional query).
    fn push(&mut self, href: &str, options: NavigateOptions);
}

/// Navigator that keeps its location in memory and records every push.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    pathname: String,
    search: String,
    history: Vec<(String, NavigateOptions)>,
}

impl MemoryNavigator {
    pub fn new(pathname: &str, search: &str) -> Self {
        Self {
            pathname: pathname.to_string(),
            search: search.strip_prefix('?').unwrap_or(search).to_string(),
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[(String, NavigateOptions)] {
        &self.history
    }

    pub fn last_href(&self) -> Option<&str> {
        self.history.last().map(|(href, _)| href.as_str())
    }
}

impl Navigator for MemoryNavigator {
    fn pathname(&self) -> &str {
        &self.pathname
    }

    fn search(&self) -> &str {
        &self.search
    }

    fn push(&mut self, href: &str, options: NavigateOptions) {
        let (pathname, search) = href.split_once('?').unwrap_or((href, ""));
        self.pathname = pathname.to_string();
        self.search = search.to_string();
        self.history.push((href.to_string(), options));
    }
}

/// Reads filters out of a page URL. Unlike the API, a bad parameter never
/// fails the page: it is dropped and the rest of the URL still applies.
pub fn parse_search_params(search: &str) -> SearchFilters {
    let options = ParseOptions::default();
    let mut dropped: HashSet<String> = HashSet::new();

    loop {
        let mut input = RawInput::from_query(search);
        for key in &dropped {
            input.discard(key);
        }

        let errors = match SearchFilters::parse(input, &options) {
            Ok(filters) => return filters.normalized(),
            Err(errors) => errors,
        };

        let before = dropped.len();
        dropped.extend(errors.iter().map(|error| error.path.clone()));
        if dropped.len() == before {
            tracing::warn!(%search, "Search params could not be recovered, using defaults");
            return SearchFilters::default();
        }
        tracing::debug!(%search, %errors, "Dropping invalid search params");
    }
}

/// Keeps the search page's filters in its URL.
///
/// The URL is the single source of truth: every read re-parses it and every
/// write pushes a new canonical URL without scrolling. Any change other than
/// a page change sends the user back to page 1.
#[derive(Debug, Clone)]
pub struct SearchParamsSync<N> {
    navigator: N,
}

impl<N: Navigator> SearchParamsSync<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_inner(self) -> N {
        self.navigator
    }

    pub fn filters(&self) -> SearchFilters {
        parse_search_params(self.navigator.search())
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters().has_active_filters()
    }

    fn update(&mut self, reset_page: bool, change: impl FnOnce(&mut SearchFilters)) {
        let mut next = self.filters();
        change(&mut next);
        if reset_page {
            next.page = DEFAULT_PAGE;
        }

        let query = next.normalized().to_query_string();
        let href = if query.is_empty() {
            self.navigator.pathname().to_string()
        } else {
            format!("{}?{}", self.navigator.pathname(), query)
        };

        tracing::debug!(%href, "Updating search params");
        self.navigator.push(&href, NavigateOptions { scroll: false });
    }

    pub fn set_province(&mut self, id: Option<i64>, slug: Option<String>) {
        self.update(true, |f| {
            f.province_id = id;
            f.province_slug = slug;
        });
    }

    pub fn set_types(&mut self, types: Vec<CampsiteType>) {
        self.update(true, |f| f.types = Some(types));
    }

    /// Stores a slider position, reordered and clamped first.
    pub fn set_price_range(&mut self, min: f64, max: f64) {
        let (min, max) = order_price_range(min, max);
        self.update(true, |f| {
            f.min_price = Some(min);
            f.max_price = Some(max);
        });
    }

    pub fn set_amenities(&mut self, amenities: Vec<String>) {
        self.update(true, |f| f.amenities = Some(amenities));
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.update(true, |f| f.sort = sort);
    }

    pub fn set_page(&mut self, page: i64) {
        self.update(false, |f| f.page = page.max(DEFAULT_PAGE));
    }

    pub fn set_min_rating(&mut self, rating: Option<f64>) {
        self.update(true, |f| f.min_rating = rating.map(|r| r.clamp(0.0, 5.0)));
    }

    pub fn set_query(&mut self, q: &str) {
        self.update(true, |f| f.q = Some(q.to_string()));
    }

    pub fn set_featured(&mut self, featured: Option<bool>) {
        self.update(true, |f| f.featured = featured);
    }

    /// Adds the type if absent, removes every occurrence if present.
    pub fn toggle_type(&mut self, campsite_type: CampsiteType) {
        self.update(true, |f| {
            let mut types = f.types.take().unwrap_or_default();
            if types.contains(&campsite_type) {
                types.retain(|t| *t != campsite_type);
            } else {
                types.push(campsite_type);
            }
            f.types = Some(types);
        });
    }

    pub fn toggle_amenity(&mut self, amenity: &str) {
        self.update(true, |f| {
            let mut amenities = f.amenities.take().unwrap_or_default();
            if amenities.iter().any(|a| a == amenity) {
                amenities.retain(|a| a != amenity);
            } else {
                amenities.push(amenity.to_string());
            }
            f.amenities = Some(amenities);
        });
    }

    /// Back to the bare pathname: every filter, the sort order and paging.
    pub fn clear_filters(&mut self) {
        self.update(true, |f| *f = SearchFilters::default());
    }
}
