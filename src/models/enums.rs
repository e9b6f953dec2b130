// src/models/enums.rs

use serde::{Deserialize, Serialize};

use crate::validation::primitives::Choice;

/// Kind of accommodation a campsite offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampsiteType {
    Camping,
    Glamping,
    TentedResort,
    Bungalow,
    Cabin,
    RvCaravan,
}

impl Choice for CampsiteType {
    const ALL: &'static [Self] = &[
        Self::Camping,
        Self::Glamping,
        Self::TentedResort,
        Self::Bungalow,
        Self::Cabin,
        Self::RvCaravan,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Camping => "camping",
            Self::Glamping => "glamping",
            Self::TentedResort => "tented_resort",
            Self::Bungalow => "bungalow",
            Self::Cabin => "cabin",
            Self::RvCaravan => "rv_caravan",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryType {
    Booking,
    #[default]
    General,
    Complaint,
    Other,
}

impl Choice for InquiryType {
    const ALL: &'static [Self] = &[Self::Booking, Self::General, Self::Complaint, Self::Other];

    fn as_str(self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::General => "general",
            Self::Complaint => "complaint",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    #[default]
    New,
    InProgress,
    Resolved,
    Closed,
}

impl Choice for InquiryStatus {
    const ALL: &'static [Self] = &[Self::New, Self::InProgress, Self::Resolved, Self::Closed];

    fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewerType {
    Family,
    Couple,
    Solo,
    Group,
}

impl Choice for ReviewerType {
    const ALL: &'static [Self] = &[Self::Family, Self::Couple, Self::Solo, Self::Group];

    fn as_str(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Couple => "couple",
            Self::Solo => "solo",
            Self::Group => "group",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportReason {
    Spam,
    Inappropriate,
    Fake,
    Offensive,
    Other,
}

impl Choice for ReportReason {
    const ALL: &'static [Self] = &[
        Self::Spam,
        Self::Inappropriate,
        Self::Fake,
        Self::Offensive,
        Self::Other,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Spam => "spam",
            Self::Inappropriate => "inappropriate",
            Self::Fake => "fake",
            Self::Offensive => "offensive",
            Self::Other => "other",
        }
    }
}

/// Result ordering for campsite search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    #[default]
    Rating,
    PriceAsc,
    PriceDesc,
    Newest,
}

impl Choice for SortOption {
    const ALL: &'static [Self] = &[Self::Rating, Self::PriceAsc, Self::PriceDesc, Self::Newest];

    fn as_str(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Newest => "newest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalDecision {
    Approve,
    Reject,
}

impl Choice for ApprovalDecision {
    const ALL: &'static [Self] = &[Self::Approve, Self::Reject];

    fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationAction {
    Hide,
    Unhide,
    Delete,
    Dismiss,
}

impl Choice for ModerationAction {
    const ALL: &'static [Self] = &[Self::Hide, Self::Unhide, Self::Delete, Self::Dismiss];

    fn as_str(self) -> &'static str {
        match self {
            Self::Hide => "hide",
            Self::Unhide => "unhide",
            Self::Delete => "delete",
            Self::Dismiss => "dismiss",
        }
    }
}

/// Review state of a campsite listing or an owner request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}
