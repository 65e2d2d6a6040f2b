//! Format selection
//!
//! Turns the engine's raw format list into either a full presentable list
//! or one chosen download target. The current and legacy endpoints both
//! shape their bodies from the views produced here, so the rules live in
//! exactly one place.

use common::extractor::RawFormat;

use crate::models::formats::{Quality, StreamKind};

/// One selected variant, borrowed from the engine answer
#[derive(Debug, Clone)]
pub struct Presentable<'a> {
    pub format: &'a RawFormat,
    pub quality: Quality,
    pub kind: Option<StreamKind>,
}

impl Presentable<'_> {
    /// Resolution label shown to clients; split-off audio is labelled
    /// "audio"
    pub fn resolution(&self) -> Option<String> {
        if self.kind == Some(StreamKind::AudioOnly) {
            Some("audio".to_string())
        } else {
            self.format.resolution.clone()
        }
    }

    /// Direct URL of the selected variant
    ///
    /// Selection never picks a format without a retrievable URL, so the
    /// fallback is unreachable.
    pub fn url(&self) -> &str {
        self.format.direct_url().unwrap_or_default()
    }
}

/// List the variants worth presenting for one engine answer
///
/// Combined formats win outright. Otherwise fall back to the first
/// video-capable and the first audio-capable variants, in engine order —
/// no quality ranking beyond the binary filter. Formats without a direct
/// URL are unusable and never considered.
pub fn list_presentable(formats: &[RawFormat]) -> Vec<Presentable<'_>> {
    let combined: Vec<Presentable<'_>> = formats
        .iter()
        .filter(|f| f.is_combined())
        .map(|format| Presentable {
            format,
            quality: Quality::High,
            kind: None,
        })
        .collect();

    if !combined.is_empty() {
        return combined;
    }

    let mut fallback = Vec::new();

    if let Some(format) = formats
        .iter()
        .find(|f| f.has_video() && f.direct_url().is_some())
    {
        fallback.push(Presentable {
            format,
            quality: Quality::High,
            kind: Some(StreamKind::VideoOnly),
        });
    }

    if let Some(format) = formats
        .iter()
        .find(|f| f.has_audio() && f.direct_url().is_some())
    {
        fallback.push(Presentable {
            format,
            quality: Quality::Medium,
            kind: Some(StreamKind::AudioOnly),
        });
    }

    fallback
}

/// A single download target with its direct URL
#[derive(Debug, Clone)]
pub struct DownloadTarget<'a> {
    pub format: &'a RawFormat,
    pub url: &'a str,
}

/// Choose the download target for a requested format id
///
/// An exact id match with a retrievable URL wins; otherwise the first
/// combined variant. `None` means the answer held nothing usable — the
/// caller reports that rather than inventing a URL.
pub fn select_download<'a>(
    formats: &'a [RawFormat],
    requested_id: &str,
) -> Option<DownloadTarget<'a>> {
    formats
        .iter()
        .find(|f| f.format_id == requested_id && f.direct_url().is_some())
        .or_else(|| formats.iter().find(|f| f.is_combined()))
        .and_then(|format| format.direct_url().map(|url| DownloadTarget { format, url }))
}
