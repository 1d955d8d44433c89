//! GreenMesh dashboard backend
//!
//! REST API over the energy-park master data, time series, forecasts and
//! dispatch plans. Layers: `api` (axum handlers) → `service` (validation)
//! → `repository` (sqlx queries).

pub mod api;
pub mod config;
pub mod db;
pub mod repository;
pub mod seed;
pub mod service;
