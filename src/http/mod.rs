//! HTTP server module for the planet query service.
//!
//! This module provides an axum-based HTTP server exposing the planet
//! attribute endpoints. Handlers validate the request, make a single
//! bounded call to the upstream provider, apply a conversion, and respond.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Provider Layer (provider/)                               │
//! │  - Upstream planetary-data HTTP client                    │
//! │  - 5-second timeout, single attempt                       │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;

pub mod router;

pub mod state;

pub mod error;

pub mod dto;

pub use router::create_router;

pub use state::AppState;
