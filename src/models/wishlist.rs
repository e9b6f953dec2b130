// src/models/wishlist.rs

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::validation::{FieldErrors, ParseOptions, RawInput, Schema, primitives};

pub const MIN_COMPARE: usize = 2;
pub const MAX_COMPARE: usize = 3;

/// A campsite saved to a user's wishlist.
#[derive(Debug, Clone, Serialize)]
pub struct WishlistItem {
    pub user_id: Uuid,
    pub campsite_id: Uuid,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// DTO for saving a campsite to the wishlist.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct AddToWishlist {
    pub campsite_id: Uuid,

    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    pub notes: Option<String>,
}

impl Schema for AddToWishlist {
    fn parse(mut input: RawInput, _options: &ParseOptions) -> Result<Self, FieldErrors> {
        let item = AddToWishlist {
            campsite_id: input.required_uuid("campsite_id"),
            notes: input.string("notes"),
        };

        let mut errors = input.finish();
        errors.absorb(item.validate());
        errors.into_result(item)
    }
}

/// Why a compare list was refused. Only the first problem is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    TooFew(usize),
    TooMany(usize),
    InvalidId(String),
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareError::TooFew(_) => {
                write!(f, "At least {MIN_COMPARE} campsites are required for comparison")
            }
            CompareError::TooMany(_) => {
                write!(f, "Maximum {MAX_COMPARE} campsites can be compared")
            }
            CompareError::InvalidId(id) => write!(f, "Invalid campsite ID: {id}"),
        }
    }
}

impl std::error::Error for CompareError {}

/// Two or three campsite ids to show side by side, in the order given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompareCampsites {
    pub ids: Vec<Uuid>,
}

impl CompareCampsites {
    /// Splits a comma-joined id list.
    ///
    /// Empty segments are dropped, duplicates are kept, segments are not
    /// trimmed. The count is checked before any id is looked at, and parsing
    /// stops at the first failure.
    pub fn parse(raw: &str) -> Result<Self, CompareError> {
        let segments: Vec<&str> = raw
            .split(',')
            .filter(|s| !s.is_empty())
            .collect();

        if segments.len() < MIN_COMPARE {
            return Err(CompareError::TooFew(segments.len()));
        }
        if segments.len() > MAX_COMPARE {
            return Err(CompareError::TooMany(segments.len()));
        }

        let ids = segments
            .into_iter()
            .map(|s| primitives::uuid(s).map_err(|_| CompareError::InvalidId(s.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { ids })
    }
}

impl From<CompareError> for FieldErrors {
    fn from(err: CompareError) -> Self {
        FieldErrors::single("ids", err.to_string())
    }
}
