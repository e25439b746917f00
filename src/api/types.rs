// API type definitions
// Request/response shapes for the content and admin endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{ArHintRecord, GifRecord};

// ============== Admin request bodies ==============

/// Body of `POST /admin/gifs`
///
/// Every field is optional: fields left out of the request stay absent in
/// the stored record. `premium` and `tags` fall back to their documented
/// defaults when omitted.
#[derive(Debug, Deserialize)]
pub struct AddGifRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub url: Option<String>,
    pub thumbnail: Option<String>,
    pub premium: Option<bool>,
    pub tags: Option<Vec<String>>,
}

/// Body of `POST /admin/ar-hints`
#[derive(Debug, Deserialize)]
pub struct AddArHintRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub model_url: Option<String>,
    pub thumbnail: Option<String>,
    pub premium: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub animation_type: Option<String>,
}

// ============== Response shapes ==============

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct GifListResponse {
    pub gifs: Vec<GifRecord>,
    pub total: usize,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ArHintListResponse {
    pub ar_hints: Vec<ArHintRecord>,
    pub total: usize,
    pub last_updated: DateTime<Utc>,
}

/// Fixed promotional offer returned by the premium-updates endpoint
#[derive(Debug, Serialize)]
pub struct SpecialOffer {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub valid_until: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PremiumUpdatesResponse {
    pub new_gifs: usize,
    pub new_ar_hints: usize,
    pub special_offers: Vec<SpecialOffer>,
    pub last_checked: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct AddGifResponse {
    pub success: bool,
    pub gif: GifRecord,
}

#[derive(Debug, Serialize)]
pub struct AddArHintResponse {
    pub success: bool,
    pub hint: ArHintRecord,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_gifs: usize,
    pub premium_gifs: usize,
    pub free_gifs: usize,
    pub total_ar_hints: usize,
    pub premium_ar_hints: usize,
    pub free_ar_hints: usize,
    pub last_gif_update: DateTime<Utc>,
    pub last_hint_update: DateTime<Utc>,
}
