// src/models/campsite.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    models::{
        enums::{ApprovalStatus, CampsiteType},
        search::check_price_order,
    },
    validation::{
        FieldErrors, ParseOptions, RawInput, Schema,
        primitives::{self, validate_website},
    },
};

/// A campsite listing.
#[derive(Debug, Clone, Serialize)]
pub struct Campsite {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub province_id: i64,
    pub province_slug: Option<String>,
    pub campsite_type: CampsiteType,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Starting nightly price; search price filters apply to this.
    pub min_price: f64,
    pub max_price: f64,

    /// Amenity slugs, e.g. "wifi", "hot-shower".
    pub amenities: Vec<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,

    pub average_rating: f64,
    pub review_count: u32,
    pub is_featured: bool,

    pub status: ApprovalStatus,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// DTO for an owner listing a new campsite.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct CreateCampsite {
    #[validate(length(min = 3, max = 200, message = "Name must be between 3 and 200 characters"))]
    pub name: String,

    #[validate(length(
        min = 20,
        max = 5000,
        message = "Description must be between 20 and 5000 characters"
    ))]
    pub description: String,

    #[validate(range(min = 1, message = "Province ID must be a positive integer"))]
    pub province_id: i64,

    pub campsite_type: CampsiteType,

    #[validate(length(max = 500, message = "Address must be at most 500 characters"))]
    pub address: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,

    pub min_price: f64,
    pub max_price: f64,

    pub amenities: Option<Vec<String>>,

    pub phone: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(custom(function = validate_website))]
    pub website: Option<String>,
}

impl Schema for CreateCampsite {
    fn parse(mut input: RawInput, _options: &ParseOptions) -> Result<Self, FieldErrors> {
        let campsite = CreateCampsite {
            name: input.required_string("name"),
            description: input.required_string("description"),
            province_id: input.required_integer("province_id"),
            campsite_type: input.required_choice("campsite_type"),
            address: input.string("address"),
            latitude: input.number("latitude"),
            longitude: input.number("longitude"),
            min_price: input.required_price("min_price"),
            max_price: input.required_price("max_price"),
            amenities: input.string_list("amenities"),
            phone: input.parse_with("phone", primitives::thai_phone),
            email: input.string("email"),
            website: input.string("website"),
        };

        let mut errors = input.finish();
        errors.absorb(campsite.validate());
        if errors.is_empty() {
            check_price_order(
                Some(campsite.min_price),
                Some(campsite.max_price),
                "min_price",
                &mut errors,
            );
        }
        errors.into_result(campsite)
    }
}
