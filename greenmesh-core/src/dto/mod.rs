//! Data Transfer Objects for the dashboard API
//!
//! Request bodies and query-string filters. The server deserializes them,
//! the client serializes them; both sides share the same camelCase names.

pub mod auth;
pub mod dispatch;
pub mod forecast;
pub mod master_data;
pub mod timeseries;

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Response body of every batch-insert endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertedCount {
    pub inserted: u64,
}

/// Deserialize an optional query-string value, treating blank text as absent
///
/// Dashboards send `?assetType=` for an unset select box; such filters must
/// behave exactly like a missing parameter.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}
