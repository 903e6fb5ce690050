//! Route handlers for the server.
//!
//! # Modules
//!
//! - [`health`]: Liveness, health and fallback endpoints
//! - [`data`]: Dataset endpoints (cities, sales, stock prices, population, catalogue)

pub mod data;
pub mod health;
