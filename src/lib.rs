//! # Planet Query Service
//!
//! A small, stateless HTTP API that derives physical attributes of planets
//! (radius, average distance, axial tilt) from a single upstream
//! planetary-data provider. Each endpoint validates one input, makes one
//! bounded upstream call, applies one closed-form conversion, and returns
//! JSON.
//!
//! ## Architecture
//!
//! The crate is organized into a few small modules:
//!
//! - [`config`]: Environment-driven server and upstream configuration
//! - [`provider`]: Upstream planetary-data client (trait + reqwest impl)
//! - [`services`]: Pure conversion arithmetic (surface-area inversion,
//!   degrees-to-radians)
//! - [`http`]: Axum-based HTTP server, router, and request handlers

pub mod config;
pub mod provider;
pub mod services;

pub mod http;
