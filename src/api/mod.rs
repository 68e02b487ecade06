//! Remote data source for the item list.
//!
//! A single GET against the configured endpoint, decoded as a JSON array of
//! [`Item`](crate::model::Item) records.

mod client;
mod error;

pub use client::{decode_items, HttpItemSource, ItemSource};
pub use error::FetchError;
