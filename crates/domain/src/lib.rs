//! # Slotwatch Domain
//!
//! Business domain types and models for Slotwatch.
//!
//! This crate contains:
//! - Domain data types (preferences, credentials, activity entries, stats)
//! - The static country/office catalog
//! - Domain error types and Result definitions
//! - Domain constants (weights, bounds, storage keys)
//!
//! ## Architecture
//! - No dependencies on other slotwatch crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod catalog;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use catalog::{catalog, Country, CountryId};
pub use errors::*;
pub use types::*;
