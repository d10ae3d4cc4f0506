//! FitSync backend library
//!
//! Exposes the backend modules for the binary and the integration tests.

pub mod config;
pub mod error;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
