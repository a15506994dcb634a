//! Scraper for the public MPL Indonesia site, id-mpl.com.
//!
//! [`MplClient`] fetches a page and turns it into plain serializable records.
//! The [`parse`] module exposes the same extraction for HTML fetched elsewhere.

mod client;
pub mod error;
pub mod model;
pub mod parse;

pub(crate) mod mpl_scraper;

pub use client::{MplClient, BASE_URL_ENV};
pub use error::{MplError, Result};
pub use model::*;
