//! Utility modules for the WishMaker application.
//!
//! - [`date`] - Date label parsing and human-readable formatting

pub mod date;
