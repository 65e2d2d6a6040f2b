//! Common library for the Vidlink application
//!
//! This crate provides shared functionality used across the Vidlink
//! services, including the extraction engine client and error handling.

pub mod error;
pub mod extractor;

/// Example usage of the extractor module
///
/// ```rust,no_run
/// use common::extractor::{ExtractorConfig, VideoExtractor};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ExtractorConfig::from_env()?;
///     let extractor = VideoExtractor::new(config);
///     let extraction = extractor.resolve("https://example.com/v1").await?;
///     println!("Resolved {} formats", extraction.formats.len());
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
