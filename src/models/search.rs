// src/models/search.rs

use serde::Serialize;
use url::form_urlencoded;
use validator::Validate;

use crate::{
    models::enums::{CampsiteType, SortOption},
    validation::{
        FieldErrors, ParseOptions, RawInput, Schema, camel_case,
        primitives::{Choice, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE},
    },
};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 12;

/// snake_case spellings accepted by the API next to the URL keys.
pub const SEARCH_ALIASES: &[(&str, &str)] = &[
    ("provinceId", "province_id"),
    ("provinceSlug", "province_slug"),
    ("minPrice", "min_price"),
    ("maxPrice", "max_price"),
    ("minRating", "min_rating"),
];

pub const PRICE_ORDER_MESSAGE: &str = "Minimum price must be less than or equal to maximum price";

/// Attaches a min/max violation to the minimum side.
pub(crate) fn check_price_order(
    min: Option<f64>,
    max: Option<f64>,
    path: &str,
    errors: &mut FieldErrors,
) {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            errors.push(path, PRICE_ORDER_MESSAGE);
        }
    }
}

/// A validated price window. Both bounds default to the search UI window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    #[serde(rename = "minPrice")]
    pub min_price: f64,
    #[serde(rename = "maxPrice")]
    pub max_price: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl Schema for PriceRange {
    /// Rejects reversed bounds; it never swaps them.
    fn parse(mut input: RawInput, _options: &ParseOptions) -> Result<Self, FieldErrors> {
        input.alias("minPrice", "min_price");
        input.alias("maxPrice", "max_price");

        let min_price = input.price("minPrice");
        let max_price = input.price("maxPrice");
        let mut errors = input.finish();
        if !errors.is_empty() {
            return Err(errors);
        }

        let range = PriceRange {
            min_price: min_price.unwrap_or(DEFAULT_MIN_PRICE),
            max_price: max_price.unwrap_or(DEFAULT_MAX_PRICE),
        };
        check_price_order(
            Some(range.min_price),
            Some(range.max_price),
            "minPrice",
            &mut errors,
        );
        errors.into_result(range)
    }
}

/// Campsite search filters, as carried by the search page URL.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200, message = "Search query must be at most 200 characters"))]
    pub q: Option<String>,

    #[serde(rename = "provinceId", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Province ID must be a positive integer"))]
    pub province_id: Option<i64>,

    #[serde(rename = "provinceSlug", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "Province slug must be at most 100 characters"))]
    pub province_slug: Option<String>,

    /// Order is preserved; repeats are not collapsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<CampsiteType>>,

    #[serde(rename = "minPrice", skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,

    #[serde(rename = "maxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,

    #[serde(rename = "minRating", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 5.0, message = "Minimum rating must be between 0 and 5"))]
    pub min_rating: Option<f64>,

    pub sort: SortOption,

    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: i64,

    #[validate(range(min = 1, max = 50, message = "Limit must be between 1 and 50"))]
    pub limit: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            q: None,
            province_id: None,
            province_slug: None,
            types: None,
            min_price: None,
            max_price: None,
            amenities: None,
            min_rating: None,
            sort: SortOption::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            featured: None,
        }
    }
}

impl Schema for SearchFilters {
    fn parse(mut input: RawInput, _options: &ParseOptions) -> Result<Self, FieldErrors> {
        for (canonical, alias) in SEARCH_ALIASES {
            input.alias(canonical, alias);
        }

        let filters = SearchFilters {
            q: input.string("q"),
            province_id: input.integer("provinceId"),
            province_slug: input.string("provinceSlug"),
            types: input.choice_list("types"),
            min_price: input.price("minPrice"),
            max_price: input.price("maxPrice"),
            amenities: input.string_list("amenities"),
            min_rating: input.number("minRating"),
            sort: input.choice("sort").unwrap_or_default(),
            page: input.integer("page").unwrap_or(DEFAULT_PAGE),
            limit: input.integer("limit").unwrap_or(DEFAULT_LIMIT),
            featured: input.boolean("featured"),
        };

        let mut errors = input.finish();
        errors.absorb_with(filters.validate(), camel_case);
        if errors.is_empty() {
            check_price_order(filters.min_price, filters.max_price, "minPrice", &mut errors);
        }
        errors.into_result(filters)
    }
}

impl SearchFilters {
    /// Canonical form: blank text, empty lists and prices sitting on the
    /// default window collapse to "not specified".
    pub fn normalized(mut self) -> Self {
        self.q = self
            .q
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());
        self.province_slug = self.province_slug.filter(|s| !s.is_empty());
        self.types = self.types.filter(|t| !t.is_empty());
        self.amenities = self.amenities.filter(|a| !a.is_empty());
        self.min_price = self.min_price.filter(|p| *p != DEFAULT_MIN_PRICE);
        self.max_price = self.max_price.filter(|p| *p != DEFAULT_MAX_PRICE);
        self
    }

    /// True when any field differs from its default. The page number is
    /// left out; every filter change resets it anyway.
    pub fn has_active_filters(&self) -> bool {
        self.q.as_deref().is_some_and(|q| !q.trim().is_empty())
            || self.province_id.is_some()
            || self.province_slug.as_deref().is_some_and(|s| !s.is_empty())
            || self.types.as_ref().is_some_and(|t| !t.is_empty())
            || self.min_price.is_some_and(|p| p != DEFAULT_MIN_PRICE)
            || self.max_price.is_some_and(|p| p != DEFAULT_MAX_PRICE)
            || self.amenities.as_ref().is_some_and(|a| !a.is_empty())
            || self.min_rating.is_some()
            || self.featured.is_some()
            || self.sort != SortOption::default()
            || self.limit != DEFAULT_LIMIT
    }

    /// Canonical-minimal query string without the leading `?`. Keys holding
    /// their default are left out, so the default filters encode to `""`.
    pub fn to_query_string(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());

        if let Some(q) = self.q.as_deref().filter(|q| !q.trim().is_empty()) {
            out.append_pair("q", q);
        }
        if let Some(id) = self.province_id {
            out.append_pair("provinceId", &id.to_string());
        }
        if let Some(slug) = self.province_slug.as_deref().filter(|s| !s.is_empty()) {
            out.append_pair("provinceSlug", slug);
        }
        if let Some(types) = self.types.as_ref().filter(|t| !t.is_empty()) {
            let joined: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
            out.append_pair("types", &joined.join(","));
        }
        if let Some(min) = self.min_price.filter(|p| *p != DEFAULT_MIN_PRICE) {
            out.append_pair("minPrice", &min.to_string());
        }
        if let Some(max) = self.max_price.filter(|p| *p != DEFAULT_MAX_PRICE) {
            out.append_pair("maxPrice", &max.to_string());
        }
        if let Some(amenities) = self.amenities.as_ref().filter(|a| !a.is_empty()) {
            out.append_pair("amenities", &amenities.join(","));
        }
        if let Some(rating) = self.min_rating {
            out.append_pair("minRating", &rating.to_string());
        }
        if let Some(featured) = self.featured {
            out.append_pair("featured", if featured { "true" } else { "false" });
        }
        if self.sort != SortOption::default() {
            out.append_pair("sort", self.sort.as_str());
        }
        if self.page != DEFAULT_PAGE {
            out.append_pair("page", &self.page.to_string());
        }
        if self.limit != DEFAULT_LIMIT {
            out.append_pair("limit", &self.limit.to_string());
        }

        out.finish()
    }
}

/// One page of search results.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: i64,
    pub limit: i64,
    pub total_pages: usize,
}
