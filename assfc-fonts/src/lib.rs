//! Font discovery and matching for the assfc subtitle font collector.
//!
//! This crate provides:
//! - Font face discovery in directories and the system registry via fontdb
//! - A persistent font-scan cache that can be discarded on demand
//! - Matching of script font descriptors to installed font files
//!
//! # Architecture
//!
//! `FontCollector::open` gathers [`FaceRecord`]s from each source in priority
//! order, reusing [`FontCache`] entries where they are still fresh.
//! `FontCollector::resolve` then maps a batch of descriptors to a
//! [`Resolution`] of found and missing fonts plus the files to report.

pub mod font_collector;

// Re-export main types for convenience
pub use font_collector::{FaceRecord, FontCache, FontCollector, Resolution};
