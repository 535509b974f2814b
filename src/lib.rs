pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod aws;
pub mod config;
pub mod core;
pub mod domain;
pub mod snippets;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{PhotoAssetConfig, Settings};
pub use core::{photo_assets::PhotoAssets, pipeline_callback::PipelineCallbacks};
pub use utils::error::{Result, SnippetError};
