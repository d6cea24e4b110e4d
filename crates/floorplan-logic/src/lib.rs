//! Pure floor plan logic.
//!
//! This crate contains everything about a floor plan that is independent of
//! how it is drawn. Functions take plain data and return results, making
//! them unit-testable and usable from the SVG renderer, the CLI and any
//! future front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`allocation`] | Split a total area across room categories (ratios, floors, reconciliation) |
//! | [`constants`] | Room categories, labels, ratios, floors, canvas units |
//! | [`geometry`] | Placed-room validation (dimensions, bounds, overlaps) |
//! | [`layout`] | Single-facade and corner room placement |
//! | [`offline_cache`] | Caching worker policy: strategies, fallbacks, messages |
//! | [`pipeline`] | Request → template → areas → rooms, plus summaries |
//! | [`request`] | Input boundary: defaults, area field/slider sync, plan config |
//! | [`template`] | Apartment-type label → room-count template |

pub mod allocation;
pub mod constants;
pub mod geometry;
pub mod layout;
pub mod offline_cache;
pub mod pipeline;
pub mod request;
pub mod template;

pub use allocation::{allocate, AreaSet};
pub use constants::RoomCategory;
pub use layout::{place, Orientation, PlacedRoom};
pub use pipeline::{generate_plan, FloorPlan, PlanSummary};
pub use request::GenerationRequest;
pub use template::{resolve, ApartmentTemplate};
