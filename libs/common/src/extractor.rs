//! Extraction engine client
//!
//! This module drives the external media-resolution engine (a yt-dlp
//! compatible binary) and decodes its JSON answer into the raw format
//! model the services select from.

use std::process::Stdio;
use std::time::Duration;

use serde::Deserialize;
use tokio::process::Command;
use tokio::time;
use tracing::debug;

use crate::error::{ExtractError, ExtractResult};

/// Extraction engine configuration struct
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Engine binary name or path
    pub binary: String,
    /// Wall-clock budget for one extraction call, in seconds
    pub timeout_secs: u64,
}

impl ExtractorConfig {
    /// Create a new ExtractorConfig from environment variables
    ///
    /// # Environment Variables
    /// - `EXTRACTOR_BIN`: engine binary name or path (default: "yt-dlp")
    /// - `EXTRACTOR_TIMEOUT_SECS`: per-call budget in seconds (default: 30)
    pub fn from_env() -> ExtractResult<Self> {
        let binary = std::env::var("EXTRACTOR_BIN").unwrap_or_else(|_| "yt-dlp".to_string());

        let timeout_secs = std::env::var("EXTRACTOR_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            binary,
            timeout_secs,
        })
    }
}

/// One quality/stream variant as reported by the engine
///
/// Decoded leniently: the engine emits dozens of optional keys, and only
/// the ones below take part in selection. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFormat {
    #[serde(default)]
    pub format_id: String,
    #[serde(default)]
    pub ext: String,
    pub resolution: Option<String>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub url: Option<String>,
    pub filesize: Option<u64>,
    pub tbr: Option<f64>,
}

impl RawFormat {
    /// Direct URL, if the engine reported a retrievable one
    pub fn direct_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    /// Whether the variant carries a video stream
    pub fn has_video(&self) -> bool {
        codec_present(self.vcodec.as_deref())
    }

    /// Whether the variant carries an audio stream
    pub fn has_audio(&self) -> bool {
        codec_present(self.acodec.as_deref())
    }

    /// Video and audio in one stream, with a retrievable URL
    pub fn is_combined(&self) -> bool {
        self.has_video() && self.has_audio() && self.direct_url().is_some()
    }
}

// The engine reports an absent codec as the string "none".
fn codec_present(codec: Option<&str>) -> bool {
    codec.is_some_and(|c| !c.is_empty() && c != "none")
}

/// The engine's full answer for one URL
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Extraction {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: Option<f64>,
    pub duration_string: Option<String>,
    pub view_count: Option<u64>,
    pub uploader: Option<String>,
    pub upload_date: Option<String>,
    #[serde(default)]
    pub formats: Vec<RawFormat>,
}

/// Client for the external extraction engine
///
/// Each call runs one engine process; the tokio runtime stays free to
/// accept further requests while a resolution is in flight.
#[derive(Debug, Clone)]
pub struct VideoExtractor {
    config: ExtractorConfig,
}

impl VideoExtractor {
    /// Create a new extractor client
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Resolve a video URL into metadata and raw formats
    ///
    /// The engine process is killed if the configured budget elapses
    /// before it answers.
    pub async fn resolve(&self, url: &str) -> ExtractResult<Extraction> {
        debug!("Resolving {} via {}", url, self.config.binary);

        let mut command = Command::new(&self.config.binary);
        command
            .args(["--dump-json", "--no-warnings", "--no-playlist", url])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = time::timeout(
            Duration::from_secs(self.config.timeout_secs),
            command.output(),
        )
        .await
        .map_err(|_| ExtractError::Timeout(self.config.timeout_secs))?
        .map_err(ExtractError::Launch)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::Engine(stderr.trim().to_string()));
        }

        serde_json::from_slice(&output.stdout).map_err(ExtractError::Output)
    }

    /// Check that the engine binary is present and answers
    pub async fn health_check(&self) -> bool {
        Command::new(&self.config.binary)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }
}
