// src/store/mod.rs

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        admin::{CampsiteApprovalAction, OwnerRequestAction, ReviewModerationAction},
        campsite::{Campsite, CreateCampsite},
        inquiry::{CreateInquiry, Inquiry, UpdateInquiryStatus},
        owner_request::{CreateOwnerRequest, OwnerRequest},
        review::{CreateReview, HelpfulVoteState, ReportReview, Review},
        search::{SearchFilters, SearchPage},
        wishlist::{AddToWishlist, WishlistItem},
    },
};

pub use memory::MemoryStore;

/// Who is acting on a protected resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub is_admin: bool,
}

/// Persistence collaborator. Handlers only ever hand it validated values.
#[async_trait]
pub trait Store: Send + Sync {
    /// Approved campsites matching `filters`, sorted and paged.
    async fn search_campsites(&self, filters: &SearchFilters) -> Result<SearchPage<Campsite>, AppError>;

    async fn get_campsite(&self, id: Uuid) -> Result<Campsite, AppError>;

    /// Campsites in the requested order; any unknown id is a 404.
    async fn compare_campsites(&self, ids: &[Uuid]) -> Result<Vec<Campsite>, AppError>;

    /// New listings start out pending.
    async fn create_campsite(&self, owner_id: Uuid, input: CreateCampsite) -> Result<Campsite, AppError>;

    async fn review_campsite(
        &self,
        id: Uuid,
        action: CampsiteApprovalAction,
    ) -> Result<Campsite, AppError>;

    async fn create_inquiry(
        &self,
        user_id: Option<Uuid>,
        input: CreateInquiry,
    ) -> Result<Inquiry, AppError>;

    /// Only the campsite owner or an admin may update an inquiry.
    async fn update_inquiry_status(
        &self,
        actor: Actor,
        id: Uuid,
        update: UpdateInquiryStatus,
    ) -> Result<Inquiry, AppError>;

    async fn create_review(&self, user_id: Uuid, input: CreateReview) -> Result<Review, AppError>;

    async fn toggle_helpful(&self, user_id: Uuid, review_id: Uuid) -> Result<HelpfulVoteState, AppError>;

    async fn report_review(
        &self,
        user_id: Uuid,
        review_id: Uuid,
        report: ReportReview,
    ) -> Result<(), AppError>;

    /// Returns the review after the action, or `None` once deleted.
    async fn moderate_review(
        &self,
        review_id: Uuid,
        action: ReviewModerationAction,
    ) -> Result<Option<Review>, AppError>;

    async fn add_to_wishlist(&self, user_id: Uuid, input: AddToWishlist) -> Result<WishlistItem, AppError>;

    async fn remove_from_wishlist(&self, user_id: Uuid, campsite_id: Uuid) -> Result<(), AppError>;

    async fn list_wishlist(&self, user_id: Uuid) -> Result<Vec<WishlistItem>, AppError>;

    async fn create_owner_request(
        &self,
        user_id: Uuid,
        input: CreateOwnerRequest,
    ) -> Result<OwnerRequest, AppError>;

    async fn review_owner_request(
        &self,
        id: Uuid,
        action: OwnerRequestAction,
    ) -> Result<OwnerRequest, AppError>;
}
