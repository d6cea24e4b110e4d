//! floorplan-render: turns a generated [`FloorPlan`] into things people look at.
//!
//! | Module    | Purpose                                                    |
//! |-----------|------------------------------------------------------------|
//! | `svg`     | Interactive scene: rooms, labels, north arrow, scale bar   |
//! | `details` | Room list with icons and sizes in metres                   |
//! | `export`  | File names, header text, print page, 800×600 composition   |
//! | `png`     | Rasterizes the composition (feature `png_render`)          |
//!
//! [`FloorPlan`]: floorplan_logic::FloorPlan

pub mod details;
pub mod export;
#[cfg(feature = "png_render")]
pub mod png;
pub mod svg;

pub use details::{room_details, RoomDetail};
pub use export::{export_stem, print_document, specs_line, PlanHeader, RasterComposition};
pub use svg::{render_svg, SceneStyle};
