// src/models/owner_request.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    models::enums::ApprovalStatus,
    validation::{FieldErrors, ParseOptions, RawInput, Schema, primitives},
};

/// A user's request to be allowed to list campsites.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(flatten)]
    pub details: CreateOwnerRequest,
    pub status: ApprovalStatus,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// DTO for requesting owner access.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct CreateOwnerRequest {
    #[validate(length(
        min = 2,
        max = 200,
        message = "Business name must be between 2 and 200 characters"
    ))]
    pub business_name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub business_description: Option<String>,

    /// Normalized to bare digits.
    pub contact_phone: String,

    #[validate(email(message = "Invalid email address"))]
    pub contact_email: Option<String>,
}

impl Schema for CreateOwnerRequest {
    fn parse(mut input: RawInput, _options: &ParseOptions) -> Result<Self, FieldErrors> {
        let request = CreateOwnerRequest {
            business_name: input.required_string("business_name"),
            business_description: input.string("business_description"),
            contact_phone: input.required_with("contact_phone", primitives::thai_phone),
            contact_email: input.string("contact_email"),
        };

        let mut errors = input.finish();
        errors.absorb(request.validate());
        errors.into_result(request)
    }
}
