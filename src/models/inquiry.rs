// src/models/inquiry.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    models::enums::{InquiryStatus, InquiryType},
    validation::{FieldErrors, ParseOptions, RawInput, Schema, primitives},
};

/// A stored inquiry sent to a campsite owner.
#[derive(Debug, Clone, Serialize)]
pub struct Inquiry {
    pub id: Uuid,
    /// Signed-in sender, if any. Guests may inquire too.
    pub user_id: Option<Uuid>,
    #[serde(flatten)]
    pub details: CreateInquiry,
    pub status: InquiryStatus,
    pub owner_reply: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for sending an inquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct CreateInquiry {
    pub campsite_id: Uuid,

    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub guest_name: String,

    #[validate(
        email(message = "Invalid email address"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub guest_email: String,

    /// Normalized to bare digits.
    pub guest_phone: Option<String>,

    pub inquiry_type: InquiryType,

    #[validate(length(max = 200, message = "Subject must be at most 200 characters"))]
    pub subject: Option<String>,

    #[validate(length(
        min = 20,
        max = 2000,
        message = "Message must be between 20 and 2000 characters"
    ))]
    pub message: String,

    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,

    #[validate(range(min = 1, max = 100, message = "Guest count must be between 1 and 100"))]
    pub guest_count: Option<i64>,

    pub accommodation_type_id: Option<Uuid>,
}

impl Schema for CreateInquiry {
    fn parse(mut input: RawInput, options: &ParseOptions) -> Result<Self, FieldErrors> {
        let strict = options.strict_calendar_dates;

        let inquiry = CreateInquiry {
            campsite_id: input.required_uuid("campsite_id"),
            guest_name: input.required_string("guest_name"),
            guest_email: input.required_string("guest_email"),
            guest_phone: input.parse_with("guest_phone", primitives::thai_phone),
            inquiry_type: input.choice("inquiry_type").unwrap_or_default(),
            subject: input.string("subject"),
            message: input.required_string("message"),
            check_in_date: input.parse_with("check_in_date", |raw| primitives::date_string(raw, strict)),
            check_out_date: input.parse_with("check_out_date", |raw| primitives::date_string(raw, strict)),
            guest_count: input.integer("guest_count"),
            accommodation_type_id: input.uuid("accommodation_type_id"),
        };

        let mut errors = input.finish();
        errors.absorb(inquiry.validate());
        if errors.is_empty() {
            inquiry.refine(&mut errors);
        }
        errors.into_result(inquiry)
    }
}

impl CreateInquiry {
    /// Check-out must fall strictly after check-in when both are given.
    fn refine(&self, errors: &mut FieldErrors) {
        if let (Some(check_in), Some(check_out)) = (&self.check_in_date, &self.check_out_date) {
            // Same-width YYYY-MM-DD strings order chronologically.
            if check_out <= check_in {
                errors.push("check_out_date", "Check-out date must be after check-in date");
            }
        }
    }
}

/// DTO for an owner updating the status of an inquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct UpdateInquiryStatus {
    pub status: InquiryStatus,

    #[validate(length(max = 2000, message = "Reply must be at most 2000 characters"))]
    pub owner_reply: Option<String>,
}

impl Schema for UpdateInquiryStatus {
    fn parse(mut input: RawInput, _options: &ParseOptions) -> Result<Self, FieldErrors> {
        let update = UpdateInquiryStatus {
            status: input.required_choice("status"),
            owner_reply: input.string("owner_reply"),
        };

        let mut errors = input.finish();
        errors.absorb(update.validate());
        errors.into_result(update)
    }
}
