//! Mock catalog data and degraded-mode placeholders
//!
//! Trending and search content is generated, not scraped. The
//! `synthetic_*` methods produce the placeholder bodies served while the
//! extraction engine is unavailable; those are always marked
//! `source: synthetic` so callers can tell them from real data.
//!
//! Every generator is pure: output depends only on its inputs, with
//! filler values drawn from a seeded rng so repeated calls agree.

use std::hash::{DefaultHasher, Hash, Hasher};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::formats::{PresentedFormat, Quality};
use crate::models::{DownloadUrlResponse, Source, VideoInfoResponse, VideoResult};

/// Platforms the mock catalog cycles through
pub const PLATFORMS: [&str; 5] = ["YouTube", "Facebook", "Instagram", "TikTok", "Twitter"];

const TRENDING_KEYWORDS: [&str; 16] = [
    "music",
    "movies",
    "comedy",
    "sports",
    "news",
    "cooking",
    "education",
    "travel",
    "fashion",
    "technology",
    "gaming",
    "drama",
    "cartoons",
    "documentary",
    "nature",
    "animals",
];

const TRENDING_COUNT: usize = 20;
const SEARCH_COUNT: usize = 10;

fn seed_from(input: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    input.hash(&mut hasher);
    hasher.finish()
}

/// Provider of mock catalog content and synthetic placeholders
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog;

impl FixtureCatalog {
    /// Create a new fixture catalog
    pub fn new() -> Self {
        Self
    }

    /// Keywords for the trending strip
    pub fn trending_keywords(&self) -> &'static [&'static str] {
        &TRENDING_KEYWORDS
    }

    /// Trending videos, optionally narrowed to one platform
    pub fn trending_videos(&self, platform: &str) -> Vec<VideoResult> {
        let mut rng = StdRng::seed_from_u64(seed_from("trending"));

        (1..=TRENDING_COUNT)
            .map(|i| VideoResult {
                id: format!("trending_{i}"),
                title: format!("Trending video {i} - fresh picks for you"),
                thumbnail_url: format!("https://picsum.photos/seed/trending{i}/300/200.jpg"),
                duration: format!("{}:{}", rng.gen_range(3..=15), rng.gen_range(10..=59)),
                channel_name: format!("Trending channel {}", i % 5 + 1),
                view_count: rng.gen_range(100_000..=1_000_000).to_string(),
                upload_time: format!("{} hours ago", rng.gen_range(1..=7)),
                platform: PLATFORMS[(i - 1) % PLATFORMS.len()].to_string(),
                video_url: format!("https://example.com/trending_{i}.mp4"),
            })
            .filter(|video| platform == "all" || video.platform == platform)
            .collect()
    }

    /// Search results for a query
    pub fn search_results(&self, query: &str) -> Vec<VideoResult> {
        let mut rng = StdRng::seed_from_u64(seed_from(query));
        let thumb_seed = query.replace(' ', "_");

        (0..SEARCH_COUNT)
            .map(|i| VideoResult {
                id: format!("search_{i}"),
                title: format!("{query} - search result {}", i + 1),
                thumbnail_url: format!("https://picsum.photos/seed/{thumb_seed}{i}/300/200.jpg"),
                duration: format!("{}:{}", rng.gen_range(2..=10), rng.gen_range(10..=59)),
                channel_name: format!("Search channel {}", i % 3 + 1),
                view_count: rng.gen_range(10_000..=500_000).to_string(),
                upload_time: format!("{} days ago", rng.gen_range(1..=30)),
                platform: PLATFORMS[i % PLATFORMS.len()].to_string(),
                video_url: format!("https://example.com/search_{i}.mp4"),
            })
            .collect()
    }

    /// Placeholder video info for when the engine is unavailable
    pub fn synthetic_video_info(&self, url: &str) -> VideoInfoResponse {
        let seed = seed_from(url);
        let mut rng = StdRng::seed_from_u64(seed);

        VideoInfoResponse {
            title: Some(format!("Video from {url}")),
            description: Some("Video description is unavailable right now".to_string()),
            thumbnail: Some(format!(
                "https://picsum.photos/seed/{}/300/200.jpg",
                seed % 1000
            )),
            duration: Some(rng.gen_range(180..=600) as f64),
            view_count: Some(rng.gen_range(10_000..=1_000_000)),
            uploader: Some("Unknown uploader".to_string()),
            upload_date: Some("20231201".to_string()),
            url: url.to_string(),
            source: Source::Synthetic,
            status: "success",
            timestamp: Utc::now(),
        }
    }

    /// Placeholder quality table for when the engine is unavailable
    ///
    /// The values are presentation-only filler; clients get no contract
    /// beyond plausible-looking tiers.
    pub fn synthetic_formats(&self) -> Vec<PresentedFormat> {
        vec![
            PresentedFormat {
                format_id: "720p".to_string(),
                resolution: Some("1280x720".to_string()),
                ext: "mp4".to_string(),
                fps: Some(30),
                filesize: Some(50_000_000),
                tbr: Some(1200.0),
                quality: Quality::High,
                kind: None,
            },
            PresentedFormat {
                format_id: "480p".to_string(),
                resolution: Some("854x480".to_string()),
                ext: "mp4".to_string(),
                fps: Some(30),
                filesize: Some(25_000_000),
                tbr: Some(800.0),
                quality: Quality::Medium,
                kind: None,
            },
            PresentedFormat {
                format_id: "360p".to_string(),
                resolution: Some("640x360".to_string()),
                ext: "mp4".to_string(),
                fps: Some(25),
                filesize: Some(15_000_000),
                tbr: Some(500.0),
                quality: Quality::Low,
                kind: None,
            },
        ]
    }

    /// Placeholder download target for when the engine is unavailable
    pub fn synthetic_download(&self, url: &str, format_id: &str) -> DownloadUrlResponse {
        let token = seed_from(url) % 10_000;

        DownloadUrlResponse::new(
            format!("https://example.com/download/{format_id}/{token}.mp4"),
            "mp4",
            format_id.to_string(),
            url.to_string(),
            Source::Synthetic,
        )
    }
}
