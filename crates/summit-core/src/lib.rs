//! Core content model for summit.
//!
//! This crate defines the documents, links and slices returned by the
//! content repository, the per-type document tally, and the site's
//! styling theme.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod tally;
pub mod theme;

pub use error::{Error, Result};
pub use model::{Document, NavigationData, NavigationLink, SliceZone};
pub use tally::TypeTally;
pub use theme::Theme;
