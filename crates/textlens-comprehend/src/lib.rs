//! AWS layer: default-chain configuration loading and the Comprehend client
//! that implements `textlens_core::TextAnalyzer`.

pub mod client;
pub mod config;
mod convert;

pub use client::ComprehendAnalyzer;
pub use config::{ClientSettings, ConfigError, load_sdk_config};
