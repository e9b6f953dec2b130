// src/models/review.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    models::enums::{ReportReason, ReviewerType},
    validation::{FieldErrors, ParseOptions, RawInput, Schema, primitives::validate_photo_urls},
};

/// A stored campsite review.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(flatten)]
    pub details: CreateReview,
    pub helpful_count: u32,
    pub report_count: u32,
    pub is_hidden: bool,
    pub hide_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Result of toggling a helpful vote: the new count and whether the caller
/// now has a vote on the review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HelpfulVoteState {
    pub count: u32,
    pub voted: bool,
}

/// DTO for submitting a review.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct CreateReview {
    pub campsite_id: Uuid,

    #[validate(range(min = 1, max = 5, message = "Overall rating must be between 1 and 5"))]
    pub rating_overall: i64,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating_cleanliness: Option<i64>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating_staff: Option<i64>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating_facilities: Option<i64>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating_value: Option<i64>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating_location: Option<i64>,

    pub reviewer_type: ReviewerType,

    #[validate(length(max = 100, message = "Title must be at most 100 characters"))]
    pub title: Option<String>,

    #[validate(length(
        min = 20,
        max = 2000,
        message = "Review must be between 20 and 2000 characters"
    ))]
    pub content: String,

    #[validate(length(max = 500, message = "Pros must be at most 500 characters"))]
    pub pros: Option<String>,
    #[validate(length(max = 500, message = "Cons must be at most 500 characters"))]
    pub cons: Option<String>,

    pub visited_at: Option<String>,

    #[validate(
        length(max = 5, message = "At most 5 photos are allowed"),
        custom(function = validate_photo_urls)
    )]
    pub photo_urls: Option<Vec<String>>,
}

impl Schema for CreateReview {
    fn parse(mut input: RawInput, _options: &ParseOptions) -> Result<Self, FieldErrors> {
        let review = CreateReview {
            campsite_id: input.required_uuid("campsite_id"),
            rating_overall: input.required_integer("rating_overall"),
            rating_cleanliness: input.integer("rating_cleanliness"),
            rating_staff: input.integer("rating_staff"),
            rating_facilities: input.integer("rating_facilities"),
            rating_value: input.integer("rating_value"),
            rating_location: input.integer("rating_location"),
            reviewer_type: input.required_choice("reviewer_type"),
            title: input.string("title"),
            content: input.required_string("content"),
            pros: input.string("pros"),
            cons: input.string("cons"),
            visited_at: input.string("visited_at"),
            photo_urls: input.string_list("photo_urls"),
        };

        let mut errors = input.finish();
        errors.absorb(review.validate());
        errors.into_result(review)
    }
}

/// DTO for reporting a review to moderators.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct ReportReview {
    pub reason: ReportReason,

    #[validate(length(max = 1000, message = "Details must be at most 1000 characters"))]
    pub details: Option<String>,
}

impl Schema for ReportReview {
    fn parse(mut input: RawInput, _options: &ParseOptions) -> Result<Self, FieldErrors> {
        let report = ReportReview {
            reason: input.required_choice("reason"),
            details: input.string("details"),
        };

        let mut errors = input.finish();
        errors.absorb(report.validate());
        errors.into_result(report)
    }
}
