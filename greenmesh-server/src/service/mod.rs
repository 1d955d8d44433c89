//! Service Module
//!
//! Business logic layer for the dashboard backend.
//! Services validate requests and orchestrate between repositories.

pub mod auth;
pub mod dispatch;
pub mod forecast;
pub mod master_data;
pub mod timeseries;

// Re-export for convenience
pub use auth as auth_service;
pub use dispatch as dispatch_service;
pub use forecast as forecast_service;
pub use master_data as master_data_service;
pub use timeseries as timeseries_service;
