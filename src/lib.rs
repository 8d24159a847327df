#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(warnings)]
// Allow some overly strict pedantic lints for orchestration code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]

//! Video Catalog Service
//!
//! The administrative core of a video catalog built with Rust: the video
//! aggregate and its media pipeline, from upload through encoding status
//! reconciliation, behind narrow persistence and storage gateways.

pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use application::dto::*;
pub use domain::entities::*;
