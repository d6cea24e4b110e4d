//! Floor plan constants: room categories, ratios, floors and canvas units.
//!
//! Plain constants with no rendering dependency. Both the SVG renderer and
//! the CLI harness read these.

use serde::{Deserialize, Serialize};

/// The four kinds of room a plan can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomCategory {
    Salon,
    Kitchen,
    Bedroom,
    Bathroom,
}

impl RoomCategory {
    /// Base display label (unnumbered).
    pub fn label(self) -> &'static str {
        match self {
            RoomCategory::Salon => labels::SALON,
            RoomCategory::Kitchen => labels::KITCHEN,
            RoomCategory::Bedroom => labels::BEDROOM,
            RoomCategory::Bathroom => labels::BATHROOM,
        }
    }

    /// CSS class used on the room group and the room-list card.
    pub fn css_class(self) -> &'static str {
        match self {
            RoomCategory::Salon => "salon",
            RoomCategory::Kitchen => "kitchen",
            RoomCategory::Bedroom => "bedroom",
            RoomCategory::Bathroom => "bathroom",
        }
    }

    /// Fill color for the room rectangle.
    pub fn fill_color(self) -> &'static str {
        match self {
            RoomCategory::Salon => "#e3f2fd",
            RoomCategory::Kitchen => "#e8f5e8",
            RoomCategory::Bedroom => "#f3e5f5",
            RoomCategory::Bathroom => "#fff3e0",
        }
    }

    /// Bathrooms are wet areas and don't count toward livable area.
    pub fn is_livable(self) -> bool {
        !matches!(self, RoomCategory::Bathroom)
    }
}

pub mod labels {
    pub const SALON: &str = "Salon";
    pub const KITCHEN: &str = "Mutfak";
    pub const BEDROOM: &str = "Yatak Odası";
    pub const BATHROOM: &str = "Banyo";
}

/// Target share of the total area per room (bathroom is per instance).
pub mod ratios {
    pub const LIVING_ROOM: f64 = 0.35;
    pub const KITCHEN: f64 = 0.12;
    pub const BATHROOM: f64 = 0.07;
}

/// Minimum area per room instance, in square metres.
pub mod floors {
    pub const LIVING_ROOM: u32 = 12;
    pub const KITCHEN: u32 = 6;
    pub const BATHROOM: u32 = 3;
    pub const BEDROOM: u32 = 8;
}

/// Request defaults applied at the input boundary.
pub mod defaults {
    pub const TOTAL_AREA: u32 = 75;
    pub const STREET_FACING: u32 = 1;
    pub const APARTMENT_TYPE: &str = "2+1";
    /// Slider range for the total area control.
    pub const AREA_MIN: u32 = 30;
    pub const AREA_MAX: u32 = 500;
    /// Largest total accepted from free-text input; larger values are capped.
    pub const AREA_CAP: u32 = 10_000;
}

/// Canvas units. One metre is drawn as 15 units.
pub mod canvas {
    pub const PIXELS_PER_METER: f64 = 15.0;
    pub const BASE_SIZE: f64 = 400.0;
    pub const ASPECT: f64 = 0.75;
    pub const MAX_SCALE: f64 = 1.5;
    /// Rooms smaller than this in either direction omit the dimension text.
    pub const DIMENSION_MIN_WIDTH: f64 = 60.0;
    pub const DIMENSION_MIN_HEIGHT: f64 = 40.0;
}
