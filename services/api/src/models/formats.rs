//! Client-facing format projections
//!
//! The selector picks raw engine variants; this module shapes them into
//! the bodies the current and legacy endpoints expose.

use serde::{Deserialize, Serialize};

use crate::selector::Presentable;

/// Coarse quality tier shown to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    High,
    Medium,
    Low,
}

/// Tag for the split-stream fallback, present only when no combined
/// format exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamKind {
    VideoOnly,
    AudioOnly,
}

/// Client-facing projection of one raw engine variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentedFormat {
    pub format_id: String,
    pub resolution: Option<String>,
    pub ext: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,
    pub filesize: Option<u64>,
    pub tbr: Option<f64>,
    pub quality: Quality,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<StreamKind>,
}

impl From<&Presentable<'_>> for PresentedFormat {
    fn from(selected: &Presentable<'_>) -> Self {
        Self {
            format_id: selected.format.format_id.clone(),
            resolution: selected.resolution(),
            ext: selected.format.ext.clone(),
            fps: None,
            filesize: selected.format.filesize,
            tbr: selected.format.tbr,
            quality: selected.quality,
            kind: selected.kind,
        }
    }
}

/// Legacy `/extract` format shape: the direct URL instead of identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyFormat {
    pub resolution: Option<String>,
    pub ext: String,
    pub url: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<StreamKind>,
}

impl From<&Presentable<'_>> for LegacyFormat {
    fn from(selected: &Presentable<'_>) -> Self {
        Self {
            resolution: selected.resolution(),
            ext: selected.format.ext.clone(),
            url: selected.url().to_string(),
            kind: selected.kind,
        }
    }
}
