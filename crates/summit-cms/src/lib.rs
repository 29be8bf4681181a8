//! Content repository access for summit.
//!
//! Talks to the hosted content repository's REST API and runs the two
//! operator diagnostics: `check` (what documents exist) and `setup`
//! (how to publish the landing page).

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod check;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod setup;

pub use check::{run_check, CheckReport};
pub use client::{DocumentSource, PrismicClient};
pub use config::Config;
pub use error::{CmsError, CmsResult};
pub use setup::{run_setup, SetupReport};
