// src/store/memory.rs

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        admin::{CampsiteApprovalAction, OwnerRequestAction, ReviewModerationAction},
        campsite::{Campsite, CreateCampsite},
        enums::{ApprovalDecision, ApprovalStatus, ModerationAction, SortOption},
        inquiry::{CreateInquiry, Inquiry, UpdateInquiryStatus},
        owner_request::{CreateOwnerRequest, OwnerRequest},
        review::{CreateReview, HelpfulVoteState, ReportReview, Review},
        search::{SearchFilters, SearchPage},
        wishlist::{AddToWishlist, WishlistItem},
    },
    store::{Actor, Store},
};

#[derive(Default)]
struct Inner {
    campsites: HashMap<Uuid, Campsite>,
    inquiries: HashMap<Uuid, Inquiry>,
    reviews: HashMap<Uuid, Review>,
    /// (user_id, review_id)
    helpful_votes: HashSet<(Uuid, Uuid)>,
    /// (user_id, review_id)
    reports: HashSet<(Uuid, Uuid)>,
    /// (user_id, campsite_id)
    wishlist: HashMap<(Uuid, Uuid), WishlistItem>,
    owner_requests: HashMap<Uuid, OwnerRequest>,
}

/// Process-local store. Everything lives behind one lock and is lost on
/// restart.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a complete record as-is, bypassing validation and approval.
    pub async fn insert_campsite(&self, campsite: Campsite) {
        let mut inner = self.inner.write().await;
        inner.campsites.insert(campsite.id, campsite);
    }
}

impl Inner {
    fn approved_campsite(&self, id: Uuid) -> Result<&Campsite, AppError> {
        self.campsites
            .get(&id)
            .filter(|c| c.status == ApprovalStatus::Approved)
            .ok_or_else(|| AppError::NotFound("Campsite not found".to_string()))
    }

    /// Recomputes the rating summary from the campsite's visible reviews.
    fn refresh_rating(&mut self, campsite_id: Uuid) {
        let ratings: Vec<i64> = self
            .reviews
            .values()
            .filter(|r| r.details.campsite_id == campsite_id && !r.is_hidden)
            .map(|r| r.details.rating_overall)
            .collect();

        if let Some(campsite) = self.campsites.get_mut(&campsite_id) {
            campsite.review_count = ratings.len() as u32;
            campsite.average_rating = if ratings.is_empty() {
                0.0
            } else {
                ratings.iter().sum::<i64>() as f64 / ratings.len() as f64
            };
        }
    }
}

fn matches(campsite: &Campsite, filters: &SearchFilters) -> bool {
    if campsite.status != ApprovalStatus::Approved {
        return false;
    }
    if let Some(q) = filters.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        let q = q.to_lowercase();
        if !campsite.name.to_lowercase().contains(&q)
            && !campsite.description.to_lowercase().contains(&q)
        {
            return false;
        }
    }
    if filters.province_id.is_some_and(|id| id != campsite.province_id) {
        return false;
    }
    if let Some(slug) = filters.province_slug.as_deref() {
        if campsite.province_slug.as_deref() != Some(slug) {
            return false;
        }
    }
    if let Some(types) = &filters.types {
        if !types.contains(&campsite.campsite_type) {
            return false;
        }
    }
    if filters.min_price.is_some_and(|min| campsite.min_price < min) {
        return false;
    }
    if filters.max_price.is_some_and(|max| campsite.min_price > max) {
        return false;
    }
    if let Some(amenities) = &filters.amenities {
        if !amenities.iter().all(|a| campsite.amenities.contains(a)) {
            return false;
        }
    }
    if filters.min_rating.is_some_and(|r| campsite.average_rating < r) {
        return false;
    }
    if filters.featured.is_some_and(|f| f != campsite.is_featured) {
        return false;
    }
    true
}

fn sort_campsites(campsites: &mut [Campsite], sort: SortOption) {
    match sort {
        SortOption::Rating => campsites.sort_by(|a, b| {
            b.average_rating
                .total_cmp(&a.average_rating)
                .then(b.review_count.cmp(&a.review_count))
        }),
        SortOption::PriceAsc => campsites.sort_by(|a, b| a.min_price.total_cmp(&b.min_price)),
        SortOption::PriceDesc => campsites.sort_by(|a, b| b.min_price.total_cmp(&a.min_price)),
        SortOption::Newest => campsites.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn search_campsites(&self, filters: &SearchFilters) -> Result<SearchPage<Campsite>, AppError> {
        let inner = self.inner.read().await;

        let mut found: Vec<Campsite> = inner
            .campsites
            .values()
            .filter(|c| matches(c, filters))
            .cloned()
            .collect();
        sort_campsites(&mut found, filters.sort);

        let limit = usize::try_from(filters.limit).unwrap_or(1).max(1);
        let page = usize::try_from(filters.page).unwrap_or(1).max(1);
        let total = found.len();

        let items = found
            .into_iter()
            .skip((page - 1).saturating_mul(limit))
            .take(limit)
            .collect();

        Ok(SearchPage {
            items,
            total,
            page: filters.page,
            limit: filters.limit,
            total_pages: total.div_ceil(limit),
        })
    }

    async fn get_campsite(&self, id: Uuid) -> Result<Campsite, AppError> {
        let inner = self.inner.read().await;
        inner.approved_campsite(id).cloned()
    }

    async fn compare_campsites(&self, ids: &[Uuid]) -> Result<Vec<Campsite>, AppError> {
        let inner = self.inner.read().await;
        ids.iter()
            .map(|id| inner.approved_campsite(*id).cloned())
            .collect()
    }

    async fn create_campsite(&self, owner_id: Uuid, input: CreateCampsite) -> Result<Campsite, AppError> {
        let campsite = Campsite {
            id: Uuid::new_v4(),
            owner_id,
            name: input.name,
            description: input.description,
            province_id: input.province_id,
            province_slug: None,
            campsite_type: input.campsite_type,
            address: input.address,
            latitude: input.latitude,
            longitude: input.longitude,
            min_price: input.min_price,
            max_price: input.max_price,
            amenities: input.amenities.unwrap_or_default(),
            phone: input.phone,
            email: input.email,
            website: input.website,
            average_rating: 0.0,
            review_count: 0,
            is_featured: false,
            status: ApprovalStatus::Pending,
            rejection_reason: None,
            created_at: Utc::now(),
        };

        let mut inner = self.inner.write().await;
        inner.campsites.insert(campsite.id, campsite.clone());
        tracing::info!(campsite_id = %campsite.id, %owner_id, "Campsite submitted for approval");

        Ok(campsite)
    }

    async fn review_campsite(
        &self,
        id: Uuid,
        action: CampsiteApprovalAction,
    ) -> Result<Campsite, AppError> {
        let mut inner = self.inner.write().await;
        let campsite = inner
            .campsites
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Campsite not found".to_string()))?;

        if campsite.status != ApprovalStatus::Pending {
            return Err(AppError::Conflict("Campsite has already been reviewed".to_string()));
        }

        match action.action {
            ApprovalDecision::Approve => {
                campsite.status = ApprovalStatus::Approved;
                campsite.rejection_reason = None;
            }
            ApprovalDecision::Reject => {
                campsite.status = ApprovalStatus::Rejected;
                campsite.rejection_reason = action.rejection_reason;
            }
        }
        tracing::info!(campsite_id = %id, status = ?campsite.status, "Campsite reviewed");

        Ok(campsite.clone())
    }

    async fn create_inquiry(
        &self,
        user_id: Option<Uuid>,
        input: CreateInquiry,
    ) -> Result<Inquiry, AppError> {
        let mut inner = self.inner.write().await;
        inner.approved_campsite(input.campsite_id)?;

        let now = Utc::now();
        let inquiry = Inquiry {
            id: Uuid::new_v4(),
            user_id,
            details: input,
            status: Default::default(),
            owner_reply: None,
            created_at: now,
            updated_at: now,
        };
        inner.inquiries.insert(inquiry.id, inquiry.clone());
        tracing::info!(inquiry_id = %inquiry.id, campsite_id = %inquiry.details.campsite_id, "Inquiry received");

        Ok(inquiry)
    }

    async fn update_inquiry_status(
        &self,
        actor: Actor,
        id: Uuid,
        update: UpdateInquiryStatus,
    ) -> Result<Inquiry, AppError> {
        let mut inner = self.inner.write().await;

        let campsite_id = inner
            .inquiries
            .get(&id)
            .map(|i| i.details.campsite_id)
            .ok_or_else(|| AppError::NotFound("Inquiry not found".to_string()))?;
        let owner_id = inner.campsites.get(&campsite_id).map(|c| c.owner_id);
        if !actor.is_admin && owner_id != Some(actor.id) {
            return Err(AppError::Forbidden(
                "Only the campsite owner can update this inquiry".to_string(),
            ));
        }

        let inquiry = inner
            .inquiries
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Inquiry not found".to_string()))?;
        inquiry.status = update.status;
        if update.owner_reply.is_some() {
            inquiry.owner_reply = update.owner_reply;
        }
        inquiry.updated_at = Utc::now();

        Ok(inquiry.clone())
    }

    async fn create_review(&self, user_id: Uuid, input: CreateReview) -> Result<Review, AppError> {
        let mut inner = self.inner.write().await;
        inner.approved_campsite(input.campsite_id)?;

        let already = inner
            .reviews
            .values()
            .any(|r| r.user_id == user_id && r.details.campsite_id == input.campsite_id);
        if already {
            return Err(AppError::Conflict(
                "You have already reviewed this campsite".to_string(),
            ));
        }

        let review = Review {
            id: Uuid::new_v4(),
            user_id,
            details: input,
            helpful_count: 0,
            report_count: 0,
            is_hidden: false,
            hide_reason: None,
            created_at: Utc::now(),
        };
        let campsite_id = review.details.campsite_id;
        inner.reviews.insert(review.id, review.clone());
        inner.refresh_rating(campsite_id);
        tracing::info!(review_id = %review.id, %campsite_id, "Review created");

        Ok(review)
    }

    async fn toggle_helpful(&self, user_id: Uuid, review_id: Uuid) -> Result<HelpfulVoteState, AppError> {
        let mut inner = self.inner.write().await;
        if !inner.reviews.contains_key(&review_id) {
            return Err(AppError::NotFound("Review not found".to_string()));
        }

        let key = (user_id, review_id);
        let voted = if inner.helpful_votes.remove(&key) {
            false
        } else {
            inner.helpful_votes.insert(key);
            true
        };

        let review = inner
            .reviews
            .get_mut(&review_id)
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;
        review.helpful_count = if voted {
            review.helpful_count.saturating_add(1)
        } else {
            review.helpful_count.saturating_sub(1)
        };

        Ok(HelpfulVoteState {
            count: review.helpful_count,
            voted,
        })
    }

    async fn report_review(
        &self,
        user_id: Uuid,
        review_id: Uuid,
        report: ReportReview,
    ) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        if !inner.reviews.contains_key(&review_id) {
            return Err(AppError::NotFound("Review not found".to_string()));
        }
        if !inner.reports.insert((user_id, review_id)) {
            return Err(AppError::Conflict(
                "You have already reported this review".to_string(),
            ));
        }
        if let Some(review) = inner.reviews.get_mut(&review_id) {
            review.report_count += 1;
        }
        tracing::info!(%review_id, reason = ?report.reason, "Review reported");

        Ok(())
    }

    async fn moderate_review(
        &self,
        review_id: Uuid,
        action: ReviewModerationAction,
    ) -> Result<Option<Review>, AppError> {
        let mut inner = self.inner.write().await;
        let review = inner
            .reviews
            .get_mut(&review_id)
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;
        let campsite_id = review.details.campsite_id;

        let outcome = match action.action {
            ModerationAction::Hide => {
                review.is_hidden = true;
                review.hide_reason = action.hide_reason;
                Some(review.clone())
            }
            ModerationAction::Unhide => {
                review.is_hidden = false;
                review.hide_reason = None;
                Some(review.clone())
            }
            ModerationAction::Dismiss => {
                review.report_count = 0;
                let review = review.clone();
                inner.reports.retain(|(_, id)| *id != review_id);
                Some(review)
            }
            ModerationAction::Delete => {
                inner.reviews.remove(&review_id);
                inner.helpful_votes.retain(|(_, id)| *id != review_id);
                inner.reports.retain(|(_, id)| *id != review_id);
                None
            }
        };
        inner.refresh_rating(campsite_id);
        tracing::info!(%review_id, action = ?action.action, "Review moderated");

        Ok(outcome)
    }

    async fn add_to_wishlist(&self, user_id: Uuid, input: AddToWishlist) -> Result<WishlistItem, AppError> {
        let mut inner = self.inner.write().await;
        inner.approved_campsite(input.campsite_id)?;

        let key = (user_id, input.campsite_id);
        if inner.wishlist.contains_key(&key) {
            return Err(AppError::Conflict("Campsite is already in your wishlist".to_string()));
        }

        let item = WishlistItem {
            user_id,
            campsite_id: input.campsite_id,
            notes: input.notes,
            created_at: Utc::now(),
        };
        inner.wishlist.insert(key, item.clone());

        Ok(item)
    }

    async fn remove_from_wishlist(&self, user_id: Uuid, campsite_id: Uuid) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        inner
            .wishlist
            .remove(&(user_id, campsite_id))
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Campsite is not in your wishlist".to_string()))
    }

    async fn list_wishlist(&self, user_id: Uuid) -> Result<Vec<WishlistItem>, AppError> {
        let inner = self.inner.read().await;
        let mut items: Vec<WishlistItem> = inner
            .wishlist
            .values()
            .filter(|item| item.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn create_owner_request(
        &self,
        user_id: Uuid,
        input: CreateOwnerRequest,
    ) -> Result<OwnerRequest, AppError> {
        let mut inner = self.inner.write().await;
        let pending = inner
            .owner_requests
            .values()
            .any(|r| r.user_id == user_id && r.status == ApprovalStatus::Pending);
        if pending {
            return Err(AppError::Conflict(
                "You already have a pending owner request".to_string(),
            ));
        }

        let request = OwnerRequest {
            id: Uuid::new_v4(),
            user_id,
            details: input,
            status: ApprovalStatus::Pending,
            rejection_reason: None,
            created_at: Utc::now(),
        };
        inner.owner_requests.insert(request.id, request.clone());
        tracing::info!(request_id = %request.id, %user_id, "Owner request submitted");

        Ok(request)
    }

    async fn review_owner_request(
        &self,
        id: Uuid,
        action: OwnerRequestAction,
    ) -> Result<OwnerRequest, AppError> {
        let mut inner = self.inner.write().await;
        let request = inner
            .owner_requests
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Owner request not found".to_string()))?;

        if request.status != ApprovalStatus::Pending {
            return Err(AppError::Conflict(
                "Owner request has already been reviewed".to_string(),
            ));
        }

        match action.action {
            ApprovalDecision::Approve => request.status = ApprovalStatus::Approved,
            ApprovalDecision::Reject => {
                request.status = ApprovalStatus::Rejected;
                request.rejection_reason = action.rejection_reason;
            }
        }
        tracing::info!(request_id = %id, status = ?request.status, "Owner request reviewed");

        Ok(request.clone())
    }
}
