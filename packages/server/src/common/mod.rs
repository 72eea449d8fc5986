// Common types and utilities shared across the application

pub mod geometry;

pub use geometry::{DrawFeature, DrawOutput, DrawnGeometry, DrawnPolygon, GeometryError};
