// src/models/mod.rs

pub mod admin;
pub mod campsite;
pub mod enums;
pub mod inquiry;
pub mod owner_request;
pub mod review;
pub mod search;
pub mod wishlist;
