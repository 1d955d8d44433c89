//! Core domain types
//!
//! This module contains the records persisted by the server and returned by
//! the dashboard API. They are flat rows with scalar fields and foreign-key
//! references; the server owns persistence, clients only deserialize them.

pub mod asset;
pub mod carbon;
pub mod dispatch;
pub mod forecast;
pub mod park;
pub mod timeseries;
pub mod user;
