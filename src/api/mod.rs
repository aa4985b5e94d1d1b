//! HTTP API module for the Payroll Liquidation Engine.
//!
//! This module provides the REST API endpoint for calculating
//! liquidations under the loaded jurisdiction rules.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
pub use state::AppState;
