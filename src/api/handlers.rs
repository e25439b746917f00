// Endpoint handlers
// Business logic for the content and admin endpoints. Each handler converts
// its own faults into the endpoint's fixed 500 message; what it cannot catch
// falls through to the generic response in `response::json_response`.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use uuid::Uuid;

use crate::catalog::{ArHintRecord, GifRecord, DEFAULT_ANIMATION_TYPE};
use crate::config::AppState;
use crate::logger;

use super::query::{category_filter, premium_filter, ListParams};
use super::response::{error_response, json_ok_or, json_response};
use super::types::{
    AddArHintRequest, AddArHintResponse, AddGifRequest, AddGifResponse, ArHintListResponse,
    GifListResponse, HealthResponse, PremiumUpdatesResponse, SpecialOffer, StatsResponse,
};

/// GET /health
pub fn handle_health(now: DateTime<Utc>) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &HealthResponse {
            status: "OK",
            timestamp: now,
        },
    )
}

/// GET /content/gifs
pub async fn handle_list_gifs(state: &Arc<AppState>, params: &ListParams) -> Response<Full<Bytes>> {
    let catalog = state.gifs.read().await;
    let gifs = catalog.filtered(
        category_filter(params.category.as_deref()),
        premium_filter(params.premium.as_deref()),
    );

    json_ok_or(
        &GifListResponse {
            total: gifs.len(),
            gifs,
            last_updated: catalog.last_updated(),
        },
        "Failed to fetch GIFs",
    )
}

/// GET /content/ar-hints
pub async fn handle_list_ar_hints(
    state: &Arc<AppState>,
    params: &ListParams,
) -> Response<Full<Bytes>> {
    let catalog = state.ar_hints.read().await;
    let ar_hints = catalog.filtered(
        category_filter(params.category.as_deref()),
        premium_filter(params.premium.as_deref()),
    );

    json_ok_or(
        &ArHintListResponse {
            total: ar_hints.len(),
            ar_hints,
            last_updated: catalog.last_updated(),
        },
        "Failed to fetch AR hints",
    )
}

/// GET /content/premium-updates
///
/// Counts records created strictly within the trailing 24 hours. The offer
/// list is fixed and independent of catalog state.
pub async fn handle_premium_updates(
    state: &Arc<AppState>,
    now: DateTime<Utc>,
) -> Response<Full<Bytes>> {
    let cutoff = now - TimeDelta::hours(24);
    let new_gifs = state.gifs.read().await.added_since(cutoff);
    let new_ar_hints = state.ar_hints.read().await.added_since(cutoff);

    json_ok_or(
        &PremiumUpdatesResponse {
            new_gifs,
            new_ar_hints,
            special_offers: special_offers(),
            last_checked: now,
        },
        "Failed to check updates",
    )
}

/// POST /admin/gifs
pub async fn handle_add_gif(
    state: &Arc<AppState>,
    body: &[u8],
    now: DateTime<Utc>,
) -> Response<Full<Bytes>> {
    let request: AddGifRequest = match serde_json::from_slice(body) {
        Ok(r) => r,
        Err(e) => {
            logger::log_error(&format!("Rejected GIF payload: {e}"));
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to add GIF");
        }
    };

    let gif = GifRecord {
        id: Uuid::new_v4().to_string(),
        name: request.name,
        category: request.category,
        url: request.url,
        thumbnail: request.thumbnail,
        premium: request.premium.unwrap_or(false),
        tags: request.tags.unwrap_or_default(),
        created_at: now,
    };

    state.gifs.write().await.append(gif.clone(), now);

    json_ok_or(&AddGifResponse { success: true, gif }, "Failed to add GIF")
}

/// POST /admin/ar-hints
pub async fn handle_add_ar_hint(
    state: &Arc<AppState>,
    body: &[u8],
    now: DateTime<Utc>,
) -> Response<Full<Bytes>> {
    let request: AddArHintRequest = match serde_json::from_slice(body) {
        Ok(r) => r,
        Err(e) => {
            logger::log_error(&format!("Rejected AR hint payload: {e}"));
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to add AR hint");
        }
    };

    let hint = ArHintRecord {
        id: Uuid::new_v4().to_string(),
        title: request.title,
        description: request.description,
        category: request.category,
        model_url: request.model_url,
        thumbnail: request.thumbnail,
        premium: request.premium.unwrap_or(false),
        tags: request.tags.unwrap_or_default(),
        animation_type: request
            .animation_type
            .unwrap_or_else(|| DEFAULT_ANIMATION_TYPE.to_string()),
        created_at: now,
    };

    state.ar_hints.write().await.append(hint.clone(), now);

    json_ok_or(
        &AddArHintResponse {
            success: true,
            hint,
        },
        "Failed to add AR hint",
    )
}

/// GET /admin/stats
pub async fn handle_stats(state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let (gif_stats, last_gif_update) = {
        let catalog = state.gifs.read().await;
        (catalog.stats(), catalog.last_updated())
    };
    let (hint_stats, last_hint_update) = {
        let catalog = state.ar_hints.read().await;
        (catalog.stats(), catalog.last_updated())
    };

    json_ok_or(
        &StatsResponse {
            total_gifs: gif_stats.total,
            premium_gifs: gif_stats.premium,
            free_gifs: gif_stats.free,
            total_ar_hints: hint_stats.total,
            premium_ar_hints: hint_stats.premium,
            free_ar_hints: hint_stats.free,
            last_gif_update,
            last_hint_update,
        },
        "Failed to get stats",
    )
}

/// The promotional offers advertised to premium-update polls
fn special_offers() -> Vec<SpecialOffer> {
    vec![SpecialOffer {
        id: "valentine_special",
        title: "Valentine Special - 50% Off Premium",
        description: "Get premium GIFs and AR hints at 50% discount",
        valid_until: "2024-02-14T23:59:59Z",
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::query::parse_list_params;
    use crate::config::types::test_config;
    use http_body_util::BodyExt;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(test_config()))
    }

    async fn body_json(response: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_health() {
        let response = handle_health(Utc::now());
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_gifs_unfiltered() {
        let state = test_state();
        let response = handle_list_gifs(&state, &ListParams::default()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["total"], 4);
        assert_eq!(body["gifs"].as_array().unwrap().len(), 4);
        assert!(body["last_updated"].is_string());
    }

    #[tokio::test]
    async fn test_list_gifs_category_filter() {
        let state = test_state();
        let params = parse_list_params(Some("category=romantic"));
        let body = body_json(handle_list_gifs(&state, &params).await).await;

        assert_eq!(body["total"], 2);
        let ids: Vec<&str> = body["gifs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["romantic_heart_premium", "romantic_roses"]);
    }

    #[tokio::test]
    async fn test_list_gifs_empty_category_returns_all() {
        let state = test_state();
        let params = parse_list_params(Some("category="));
        let body = body_json(handle_list_gifs(&state, &params).await).await;
        assert_eq!(body["total"], 4);
    }

    #[tokio::test]
    async fn test_list_gifs_premium_tri_state() {
        let state = test_state();

        let premium = parse_list_params(Some("premium=true"));
        let body = body_json(handle_list_gifs(&state, &premium).await).await;
        assert_eq!(body["total"], 2);
        assert!(body["gifs"]
            .as_array()
            .unwrap()
            .iter()
            .all(|g| g["premium"] == true));

        // Any non-"true" value falls into the false branch
        let odd = parse_list_params(Some("premium=maybe"));
        let body = body_json(handle_list_gifs(&state, &odd).await).await;
        assert_eq!(body["total"], 2);
        assert!(body["gifs"]
            .as_array()
            .unwrap()
            .iter()
            .all(|g| g["premium"] == false));
    }

    #[tokio::test]
    async fn test_list_ar_hints_category_filter() {
        let state = test_state();
        let params = parse_list_params(Some("category=premium"));
        let body = body_json(handle_list_ar_hints(&state, &params).await).await;

        assert_eq!(body["total"], 2);
        assert_eq!(body["ar_hints"][0]["id"], "premium_hologram");
        assert_eq!(body["ar_hints"][1]["id"], "galaxy_love_premium");
    }

    #[tokio::test]
    async fn test_premium_updates_with_frozen_clock() {
        let state = test_state();

        // Well after the seed data: nothing is new
        let now = Utc::now();
        let body = body_json(handle_premium_updates(&state, now).await).await;
        assert_eq!(body["new_gifs"], 0);
        assert_eq!(body["new_ar_hints"], 0);
        assert_eq!(body["special_offers"][0]["id"], "valentine_special");

        // Freeze the clock inside the seed window. Cutoff lands between the
        // 2024-01-15 and 2024-01-20 gifs, so only the later gif and the two
        // late-January hints count.
        let frozen = state.gifs.read().await.records()[3].created_at + TimeDelta::hours(20);
        let body = body_json(handle_premium_updates(&state, frozen).await).await;
        assert_eq!(body["new_gifs"], 1);
        assert_eq!(body["new_ar_hints"], 2);
    }

    #[tokio::test]
    async fn test_premium_updates_counts_fresh_appends() {
        let state = test_state();
        let now = Utc::now();

        let gif_body = br#"{"name":"Fresh","category":"funny","url":"u","thumbnail":"t"}"#;
        handle_add_gif(&state, gif_body, now).await;

        let body = body_json(handle_premium_updates(&state, now).await).await;
        assert_eq!(body["new_gifs"], 1);
        assert_eq!(body["new_ar_hints"], 0);
    }

    #[tokio::test]
    async fn test_add_gif_minimal_body_defaults() {
        let state = test_state();
        let response =
            handle_add_gif(&state, br#"{"name":"Test","category":"funny","url":"u","thumbnail":"t"}"#, Utc::now())
                .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["gif"]["premium"], false);
        assert_eq!(body["gif"]["tags"], serde_json::json!([]));
        assert!(!body["gif"]["id"].as_str().unwrap().is_empty());
        assert!(body["gif"]["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_add_gif_appears_in_listing_with_unique_id() {
        let state = test_state();
        let before = state.gifs.read().await.last_updated();

        let now = before + TimeDelta::seconds(3);
        let response = handle_add_gif(&state, br#"{"name":"New"}"#, now).await;
        let id = body_json(response).await["gif"]["id"].as_str().unwrap().to_string();

        let listing = body_json(handle_list_gifs(&state, &ListParams::default()).await).await;
        assert_eq!(listing["total"], 5);
        let ids: Vec<&str> = listing["gifs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids.last().copied(), Some(id.as_str()));
        assert_eq!(ids.iter().filter(|i| **i == id).count(), 1);

        assert_eq!(state.gifs.read().await.last_updated(), now);
    }

    #[tokio::test]
    async fn test_add_gif_absent_fields_stay_absent() {
        let state = test_state();
        let body = body_json(handle_add_gif(&state, b"{}", Utc::now()).await).await;
        assert_eq!(body["success"], true);
        assert!(body["gif"].get("name").is_none());
        assert!(body["gif"].get("category").is_none());
        assert!(body["gif"].get("url").is_none());
    }

    #[tokio::test]
    async fn test_add_gif_malformed_json() {
        let state = test_state();
        let response = handle_add_gif(&state, b"not json", Utc::now()).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Failed to add GIF");
        // The catalog is untouched
        assert_eq!(state.gifs.read().await.records().len(), 4);
    }

    #[tokio::test]
    async fn test_add_ar_hint_animation_type_default() {
        let state = test_state();
        let body = body_json(
            handle_add_ar_hint(&state, br#"{"title":"T"}"#, Utc::now()).await,
        )
        .await;
        assert_eq!(body["success"], true);
        assert_eq!(body["hint"]["animation_type"], "floating");

        let body = body_json(
            handle_add_ar_hint(
                &state,
                br#"{"title":"T","animation_type":"dancing"}"#,
                Utc::now(),
            )
            .await,
        )
        .await;
        assert_eq!(body["hint"]["animation_type"], "dancing");
    }

    #[tokio::test]
    async fn test_stats_counts_and_sums() {
        let state = test_state();
        let now = Utc::now();
        handle_add_gif(&state, br#"{"premium":true}"#, now).await;
        handle_add_ar_hint(&state, b"{}", now).await;

        let body = body_json(handle_stats(&state).await).await;
        assert_eq!(body["total_gifs"], 5);
        assert_eq!(body["premium_gifs"], 3);
        assert_eq!(body["free_gifs"], 2);
        assert_eq!(body["total_ar_hints"], 5);
        assert_eq!(body["premium_ar_hints"], 2);
        assert_eq!(body["free_ar_hints"], 3);
        assert!(body["last_gif_update"].is_string());
        assert!(body["last_hint_update"].is_string());
    }
}
