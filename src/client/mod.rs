// src/client/mod.rs

//! Client-side state that sits in front of the API: the search page's
//! URL-backed filters, the optimistic vote and wishlist buttons, and the
//! inquiry form. Nothing here renders; hosts drive these types from their
//! own event loop.

pub mod auth;
pub mod inquiry_form;
pub mod price_range;
pub mod search_sync;
pub mod toggle;
