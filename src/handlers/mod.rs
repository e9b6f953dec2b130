// src/handlers/mod.rs

pub mod admin;
pub mod campsites;
pub mod inquiries;
pub mod owner_requests;
pub mod reviews;
pub mod wishlist;
