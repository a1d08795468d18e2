//! Core data models for the region lookup service.

pub mod region;

pub use region::{is_union_territory, membership_contains, Axis, GeoPoint, UNION_TERRITORIES};
