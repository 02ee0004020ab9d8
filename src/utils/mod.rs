//! Utility functions for URL and text handling.
//!
//! - [`target_url`] - Absolute HTTP(S) URL parsing for gate targets
//! - [`title`] - Item title sanitizing

pub mod target_url;
pub mod title;
