//! Application state shared across handlers

use common::extractor::VideoExtractor;

use crate::fixtures::FixtureCatalog;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub extractor: VideoExtractor,
    pub fixtures: FixtureCatalog,
}
