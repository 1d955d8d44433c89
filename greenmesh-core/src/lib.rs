//! GreenMesh Core
//!
//! Core types for the GreenMesh energy-park dashboard.
//!
//! This crate contains:
//! - Domain types: records returned by the API (parks, assets, measurements, plans, ...)
//! - DTOs: request bodies and query filters shared by the server and its clients

pub mod domain;
pub mod dto;
