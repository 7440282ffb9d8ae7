//! formgen-core — question inference, scoring, and analytics.
//!
//! This crate defines the fundamental data model and the pure computation
//! core that the rest of the formgen system builds on: turning pasted
//! free text into structured questions, tracking respondent progress,
//! grading quiz submissions, and aggregating response analytics.

pub mod analytics;
pub mod classify;
pub mod export;
pub mod model;
pub mod parser;
pub mod progress;
pub mod scoring;
pub mod validate;
