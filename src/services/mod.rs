//! Service layer for the conversion arithmetic applied to upstream data.

pub mod conversions;

pub use conversions::{degrees_to_radians, radius_from_surface_area, round4};
