//! API models for request and response payloads

use chrono::{DateTime, Utc};
use common::extractor::Extraction;
use serde::{Deserialize, Serialize};

pub mod formats;

use formats::{LegacyFormat, PresentedFormat};

fn default_platform() -> String {
    "all".to_string()
}

fn default_format_id() -> String {
    "720p".to_string()
}

/// Request for trending videos
#[derive(Debug, Deserialize)]
pub struct TrendingRequest {
    #[serde(default = "default_platform")]
    pub platform: String,
}

/// Request for catalog search
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default = "default_platform")]
    pub platform: String,
}

/// Request for anything resolved through the extraction engine
///
/// A missing `url` decodes to an empty string and is rejected by the
/// handler before the engine is invoked.
#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    #[serde(default)]
    pub url: String,
}

/// Request for a direct download URL
#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_format_id")]
    pub format_id: String,
}

/// Whether a response was derived from real engine data or synthesized
/// while the engine was unavailable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Live,
    Synthetic,
}

/// One trending/search result entry
///
/// Field names stay camelCase on the wire for compatibility with the
/// existing frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub duration: String,
    pub channel_name: String,
    pub view_count: String,
    pub upload_time: String,
    pub platform: String,
    pub video_url: String,
}

/// Response for the trending keywords endpoint
#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: &'static [&'static str],
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl KeywordsResponse {
    pub fn new(keywords: &'static [&'static str]) -> Self {
        Self {
            keywords,
            status: "success",
            timestamp: Utc::now(),
        }
    }
}

/// Response for the trending videos endpoint
#[derive(Debug, Serialize)]
pub struct TrendingResponse {
    pub results: Vec<VideoResult>,
    pub status: &'static str,
    pub count: usize,
    pub platform: String,
    pub timestamp: DateTime<Utc>,
}

impl TrendingResponse {
    pub fn new(results: Vec<VideoResult>, platform: String) -> Self {
        Self {
            count: results.len(),
            results,
            status: "success",
            platform,
            timestamp: Utc::now(),
        }
    }
}

/// Response for the search endpoint
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<VideoResult>,
    pub status: &'static str,
    pub query: String,
    pub count: usize,
    pub platform: String,
    pub timestamp: DateTime<Utc>,
}

impl SearchResponse {
    pub fn new(results: Vec<VideoResult>, query: String, platform: String) -> Self {
        Self {
            count: results.len(),
            results,
            status: "success",
            query,
            platform,
            timestamp: Utc::now(),
        }
    }
}

/// Response for the video info endpoint
#[derive(Debug, Serialize)]
pub struct VideoInfoResponse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: Option<f64>,
    pub view_count: Option<u64>,
    pub uploader: Option<String>,
    pub upload_date: Option<String>,
    pub url: String,
    pub source: Source,
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl VideoInfoResponse {
    /// Project a live engine answer
    pub fn live(extraction: Extraction, url: String) -> Self {
        Self {
            title: extraction.title,
            description: extraction.description,
            thumbnail: extraction.thumbnail,
            duration: extraction.duration,
            view_count: extraction.view_count,
            uploader: extraction.uploader,
            upload_date: extraction.upload_date,
            url,
            source: Source::Live,
            status: "success",
            timestamp: Utc::now(),
        }
    }
}

/// Response for the formats endpoint
#[derive(Debug, Serialize)]
pub struct FormatsResponse {
    pub formats: Vec<PresentedFormat>,
    pub status: &'static str,
    pub url: String,
    pub count: usize,
    pub source: Source,
    pub timestamp: DateTime<Utc>,
}

impl FormatsResponse {
    pub fn new(formats: Vec<PresentedFormat>, url: String, source: Source) -> Self {
        Self {
            count: formats.len(),
            formats,
            status: "success",
            url,
            source,
            timestamp: Utc::now(),
        }
    }
}

/// Response for the download URL endpoint
///
/// `format_id` and the filename echo the requested id even when the
/// fallback combined format served the URL; the extension is the served
/// entry's own.
#[derive(Debug, Serialize)]
pub struct DownloadUrlResponse {
    pub download_url: String,
    pub filename: String,
    pub format_id: String,
    pub url: String,
    pub source: Source,
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl DownloadUrlResponse {
    pub fn new(
        download_url: String,
        ext: &str,
        format_id: String,
        url: String,
        source: Source,
    ) -> Self {
        let ext = if ext.is_empty() { "mp4" } else { ext };

        Self {
            filename: format!("video_{format_id}.{ext}"),
            download_url,
            format_id,
            url,
            source,
            status: "success",
            timestamp: Utc::now(),
        }
    }
}

/// Legacy `/extract` response shape, kept for existing clients
#[derive(Debug, Serialize)]
pub struct LegacyExtractResponse {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub duration_string: Option<String>,
    pub formats: Vec<LegacyFormat>,
}
