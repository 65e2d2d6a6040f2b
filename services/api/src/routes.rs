//! API service routes

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;
use tracing::warn;

use crate::{
    error::ApiError,
    models::{
        DownloadRequest, DownloadUrlResponse, FormatsResponse, KeywordsResponse,
        LegacyExtractResponse, ResolveRequest, SearchRequest, SearchResponse, Source,
        TrendingRequest, TrendingResponse, VideoInfoResponse,
        formats::{LegacyFormat, PresentedFormat},
    },
    selector,
    state::AppState,
};

/// Most results a trending response will carry
const TRENDING_RESPONSE_CAP: usize = 10;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/trending-keywords", get(trending_keywords))
        .route("/api/trending", post(trending))
        .route("/api/search", post(search))
        .route("/api/video-info", post(video_info))
        .route("/api/formats", post(formats))
        .route("/api/download-url", post(download_url))
        .route("/extract", post(extract))
        .with_state(state)
}

/// Liveness endpoint
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "status": "success",
        "message": "Video API backend is running",
        "timestamp": Utc::now(),
    }))
}

/// Keywords for the trending strip
pub async fn trending_keywords(State(state): State<AppState>) -> impl IntoResponse {
    Json(KeywordsResponse::new(state.fixtures.trending_keywords()))
}

/// Trending videos, filtered by platform and capped
pub async fn trending(
    State(state): State<AppState>,
    Json(payload): Json<TrendingRequest>,
) -> impl IntoResponse {
    let mut results = state.fixtures.trending_videos(&payload.platform);
    results.truncate(TRENDING_RESPONSE_CAP);

    Json(TrendingResponse::new(results, payload.platform))
}

/// Search the mock catalog
pub async fn search(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.query.is_empty() {
        return Err(ApiError::MissingParameter("Query"));
    }

    let results = state.fixtures.search_results(&payload.query);

    Ok(Json(SearchResponse::new(
        results,
        payload.query,
        payload.platform,
    )))
}

/// Video metadata for a URL
pub async fn video_info(
    State(state): State<AppState>,
    Json(payload): Json<ResolveRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.url.is_empty() {
        return Err(ApiError::MissingParameter("URL"));
    }

    match state.extractor.resolve(&payload.url).await {
        Ok(extraction) => Ok(Json(VideoInfoResponse::live(extraction, payload.url))),
        Err(e) => {
            warn!(
                "Extraction failed for {}, serving synthetic info: {}",
                payload.url, e
            );
            Ok(Json(state.fixtures.synthetic_video_info(&payload.url)))
        }
    }
}

/// Presentable formats for a URL
pub async fn formats(
    State(state): State<AppState>,
    Json(payload): Json<ResolveRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.url.is_empty() {
        return Err(ApiError::MissingParameter("URL"));
    }

    let response = match state.extractor.resolve(&payload.url).await {
        Ok(extraction) => {
            let formats: Vec<PresentedFormat> = selector::list_presentable(&extraction.formats)
                .iter()
                .map(PresentedFormat::from)
                .collect();

            FormatsResponse::new(formats, payload.url, Source::Live)
        }
        Err(e) => {
            warn!(
                "Extraction failed for {}, serving synthetic formats: {}",
                payload.url, e
            );
            FormatsResponse::new(
                state.fixtures.synthetic_formats(),
                payload.url,
                Source::Synthetic,
            )
        }
    };

    Ok(Json(response))
}

/// Direct download URL for a requested quality
pub async fn download_url(
    State(state): State<AppState>,
    Json(payload): Json<DownloadRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.url.is_empty() {
        return Err(ApiError::MissingParameter("URL"));
    }

    match state.extractor.resolve(&payload.url).await {
        Ok(extraction) => {
            let target = selector::select_download(&extraction.formats, &payload.format_id)
                .ok_or(ApiError::NoSuitableFormat)?;

            Ok(Json(DownloadUrlResponse::new(
                target.url.to_string(),
                &target.format.ext,
                payload.format_id,
                payload.url,
                Source::Live,
            )))
        }
        Err(e) => {
            warn!(
                "Extraction failed for {}, serving synthetic download URL: {}",
                payload.url, e
            );
            Ok(Json(
                state
                    .fixtures
                    .synthetic_download(&payload.url, &payload.format_id),
            ))
        }
    }
}

/// Legacy extraction endpoint
///
/// Shares the selection logic with `/api/formats` but keeps the old body
/// shape, and engine failures surface as HTTP errors instead of
/// synthetic data.
pub async fn extract(
    State(state): State<AppState>,
    Json(payload): Json<ResolveRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.url.is_empty() {
        return Err(ApiError::MissingParameter("URL"));
    }

    let extraction = state.extractor.resolve(&payload.url).await?;

    let formats: Vec<LegacyFormat> = selector::list_presentable(&extraction.formats)
        .iter()
        .map(LegacyFormat::from)
        .collect();

    Ok(Json(LegacyExtractResponse {
        title: extraction.title,
        thumbnail: extraction.thumbnail,
        duration_string: extraction.duration_string,
        formats,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::Response;
    use common::extractor::{ExtractorConfig, VideoExtractor};
    use serde_json::Value;

    use crate::fixtures::FixtureCatalog;

    /// State whose engine binary cannot exist, so every resolution
    /// fails fast
    fn offline_state() -> AppState {
        AppState {
            extractor: VideoExtractor::new(ExtractorConfig {
                binary: "/nonexistent/vidlink-engine".to_string(),
                timeout_secs: 1,
            }),
            fixtures: FixtureCatalog::new(),
        }
    }

    /// State backed by a stub engine script that prints `answer`
    fn stubbed_state(name: &str, answer: &str) -> AppState {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, format!("#!/bin/sh\necho '{answer}'\n"))
            .expect("Failed to write stub engine");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to mark stub engine executable");
        }

        AppState {
            extractor: VideoExtractor::new(ExtractorConfig {
                binary: path.to_string_lossy().into_owned(),
                timeout_secs: 10,
            }),
            fixtures: FixtureCatalog::new(),
        }
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&bytes).expect("Response body was not JSON")
    }

    fn request<T: serde::de::DeserializeOwned>(payload: Value) -> T {
        serde_json::from_value(payload).expect("Failed to decode request payload")
    }

    #[tokio::test]
    async fn test_root_is_alive() {
        let response = root().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_trending_keywords() {
        let response = trending_keywords(State(offline_state())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["keywords"].as_array().map(Vec::len), Some(16));
        assert_eq!(body["status"], "success");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_trending_caps_at_ten() {
        let payload = request(json!({}));
        let response = trending(State(offline_state()), Json(payload))
            .await
            .into_response();

        let body = body_json(response).await;
        assert_eq!(body["count"], 10);
        assert_eq!(body["results"].as_array().map(Vec::len), Some(10));
        assert_eq!(body["platform"], "all");
    }

    #[tokio::test]
    async fn test_trending_filters_by_platform() {
        let payload = request(json!({"platform": "TikTok"}));
        let response = trending(State(offline_state()), Json(payload))
            .await
            .into_response();

        let body = body_json(response).await;
        assert_eq!(body["count"], 4);
        for result in body["results"].as_array().expect("results missing") {
            assert_eq!(result["platform"], "TikTok");
        }
    }

    #[tokio::test]
    async fn test_search_requires_a_query() {
        let payload = request(json!({}));
        let response = search(State(offline_state()), Json(payload))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"], "Query is required");
    }

    #[tokio::test]
    async fn test_search_returns_results() {
        let payload = request(json!({"query": "rust tutorials"}));
        let response = search(State(offline_state()), Json(payload))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["count"], 10);
        assert_eq!(body["query"], "rust tutorials");
        assert_eq!(body["platform"], "all");

        let first = &body["results"][0];
        assert!(
            first["title"]
                .as_str()
                .is_some_and(|t| t.contains("rust tutorials"))
        );
        // wire format keeps camelCase keys
        assert!(first["thumbnailUrl"].is_string());
        assert!(first["channelName"].is_string());
    }

    #[tokio::test]
    async fn test_video_info_requires_a_url() {
        let payload = request(json!({}));
        let response = video_info(State(offline_state()), Json(payload))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "URL is required");
    }

    #[tokio::test]
    async fn test_video_info_degrades_to_synthetic() {
        let payload = request(json!({"url": "https://example.com/v1"}));
        let response = video_info(State(offline_state()), Json(payload))
            .await
            .into_response();

        // degraded mode still answers, but marked as synthetic
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["source"], "synthetic");
        assert!(
            body["title"]
                .as_str()
                .is_some_and(|t| t.contains("https://example.com/v1"))
        );
    }

    #[tokio::test]
    async fn test_video_info_live_path() {
        let state = stubbed_state(
            "vidlink-routes-stub-info.sh",
            r#"{"title":"Stub video","uploader":"Stub channel","duration":42,"formats":[]}"#,
        );

        let payload = request(json!({"url": "https://example.com/v1"}));
        let response = video_info(State(state), Json(payload)).await.into_response();

        let body = body_json(response).await;
        assert_eq!(body["source"], "live");
        assert_eq!(body["title"], "Stub video");
        assert_eq!(body["uploader"], "Stub channel");
        assert_eq!(body["url"], "https://example.com/v1");
    }

    #[tokio::test]
    async fn test_formats_degrade_to_synthetic() {
        let payload = request(json!({"url": "https://example.com/v1"}));
        let response = formats(State(offline_state()), Json(payload))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["source"], "synthetic");
        assert_eq!(body["count"], 3);
        assert_eq!(body["formats"][0]["format_id"], "720p");
        assert_eq!(body["formats"][0]["quality"], "high");
    }

    #[tokio::test]
    async fn test_formats_live_path_presents_combined_only() {
        let state = stubbed_state(
            "vidlink-routes-stub-formats.sh",
            r#"{"title":"Stub video","formats":[{"format_id":"22","ext":"mp4","resolution":"1280x720","vcodec":"avc1","acodec":"mp4a","url":"https://cdn.example/22"},{"format_id":"135","ext":"mp4","resolution":"854x480","vcodec":"avc1","acodec":"mp4a","url":"https://cdn.example/135"},{"format_id":"140","ext":"m4a","vcodec":"none","acodec":"mp4a","url":"https://cdn.example/140"}]}"#,
        );

        let payload = request(json!({"url": "https://example.com/v1"}));
        let response = formats(State(state), Json(payload)).await.into_response();

        let body = body_json(response).await;
        assert_eq!(body["source"], "live");
        assert_eq!(body["count"], 2);

        let listed = body["formats"].as_array().expect("formats missing");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0]["format_id"], "22");
        assert_eq!(listed[1]["format_id"], "135");
        for format in listed {
            assert_eq!(format["quality"], "high");
            assert!(format.get("type").is_none());
        }
    }

    #[tokio::test]
    async fn test_download_url_degrades_to_synthetic() {
        // format_id falls back to its default when omitted
        let payload: DownloadRequest = request(json!({"url": "https://example.com/v1"}));
        assert_eq!(payload.format_id, "720p");

        let response = download_url(State(offline_state()), Json(payload))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["source"], "synthetic");
        assert_eq!(body["format_id"], "720p");
        assert_eq!(body["filename"], "video_720p.mp4");
        assert!(
            body["download_url"]
                .as_str()
                .is_some_and(|u| u.contains("/download/720p/"))
        );
    }

    #[tokio::test]
    async fn test_download_url_live_exact_match() {
        let state = stubbed_state(
            "vidlink-routes-stub-download.sh",
            r#"{"title":"Stub video","formats":[{"format_id":"22","ext":"mp4","resolution":"1280x720","vcodec":"avc1","acodec":"mp4a","url":"https://cdn.example/22"},{"format_id":"18","ext":"mp4","resolution":"640x360","vcodec":"avc1","acodec":"mp4a","url":"https://cdn.example/18"}]}"#,
        );

        let payload = request(json!({"url": "https://example.com/v1", "format_id": "18"}));
        let response = download_url(State(state), Json(payload)).await.into_response();

        let body = body_json(response).await;
        assert_eq!(body["source"], "live");
        assert_eq!(body["download_url"], "https://cdn.example/18");
        assert_eq!(body["format_id"], "18");
        assert_eq!(body["filename"], "video_18.mp4");
    }

    #[tokio::test]
    async fn test_download_url_with_nothing_usable() {
        // the engine answers, but no format carries a URL: explicit
        // error, not a fabricated link
        let state = stubbed_state(
            "vidlink-routes-stub-unusable.sh",
            r#"{"title":"Stub video","formats":[{"format_id":"22","ext":"mp4","vcodec":"avc1","acodec":"mp4a"}]}"#,
        );

        let payload = request(json!({"url": "https://example.com/v1"}));
        let response = download_url(State(state), Json(payload)).await.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"], "No suitable format found");
    }

    #[tokio::test]
    async fn test_extract_rejects_engine_failure() {
        let payload = request(json!({"url": "https://example.com/v1"}));
        let response = extract(State(offline_state()), Json(payload))
            .await
            .into_response();

        // legacy endpoint keeps its strictness: no synthetic fallback
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
        assert!(body.get("formats").is_none());
    }

    #[tokio::test]
    async fn test_extract_legacy_shape() {
        let state = stubbed_state(
            "vidlink-routes-stub-extract.sh",
            r#"{"title":"Stub video","thumbnail":"https://cdn.example/thumb.jpg","duration_string":"0:42","formats":[{"format_id":"137","ext":"mp4","resolution":"1920x1080","vcodec":"avc1","acodec":"none","url":"https://cdn.example/137"},{"format_id":"140","ext":"m4a","vcodec":"none","acodec":"mp4a","url":"https://cdn.example/140"}]}"#,
        );

        let payload = request(json!({"url": "https://example.com/v1"}));
        let response = extract(State(state), Json(payload)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["title"], "Stub video");
        assert_eq!(body["duration_string"], "0:42");

        // no combined variants, so the split-stream pair comes back
        let listed = body["formats"].as_array().expect("formats missing");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0]["type"], "video_only");
        assert_eq!(listed[0]["url"], "https://cdn.example/137");
        assert_eq!(listed[1]["type"], "audio_only");
        assert_eq!(listed[1]["resolution"], "audio");
    }
}
