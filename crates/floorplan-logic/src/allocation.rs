//! Area allocation: splits a total floor area across room categories.
//!
//! Each category gets a fixed share of the total, rounded to whole square
//! metres and clamped to a per-category floor. The salon then absorbs the
//! rounding residue so the parts add back up to the requested total. When
//! the floors alone exceed the total the sum overshoots; that is accepted.

use serde::{Deserialize, Serialize};

use crate::constants::{floors, ratios, RoomCategory};
use crate::template::ApartmentTemplate;

/// Per-instance area for each room category, in square metres.
///
/// All bedrooms share `bedroom`; all bathrooms share `bathroom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaSet {
    pub living_room: u32,
    pub bedroom: u32,
    pub kitchen: u32,
    pub bathroom: u32,
}

impl AreaSet {
    /// Area of one room of `category`.
    pub fn area_of(&self, category: RoomCategory) -> u32 {
        match category {
            RoomCategory::Salon => self.living_room,
            RoomCategory::Kitchen => self.kitchen,
            RoomCategory::Bedroom => self.bedroom,
            RoomCategory::Bathroom => self.bathroom,
        }
    }

    /// Sum over every room instance the template contains, saturating at
    /// `u32::MAX`.
    pub fn total_for(&self, template: &ApartmentTemplate) -> u32 {
        u32::try_from(self.wide_total(template)).unwrap_or(u32::MAX)
    }

    fn wide_total(&self, template: &ApartmentTemplate) -> u64 {
        u64::from(self.living_room)
            + u64::from(self.kitchen)
            + u64::from(template.bathroom_count) * u64::from(self.bathroom)
            + u64::from(template.bedroom_count) * u64::from(self.bedroom)
    }
}

fn round_area(total: f64, ratio: f64) -> u32 {
    (total * ratio).round().max(0.0) as u32
}

/// Share of the total given to each bedroom: whatever the salon, kitchen and
/// bathrooms leave, split evenly.
fn bedroom_ratio(template: &ApartmentTemplate) -> f64 {
    if template.bedroom_count == 0 {
        return 0.0;
    }
    let remaining = 1.0
        - ratios::LIVING_ROOM
        - ratios::KITCHEN
        - ratios::BATHROOM * template.bathroom_count as f64;
    remaining.max(0.0) / template.bedroom_count as f64
}

/// Allocate `total_area` square metres across the rooms of `template`.
pub fn allocate(total_area: u32, template: &ApartmentTemplate) -> AreaSet {
    let total = total_area as f64;

    let living_room = round_area(total, ratios::LIVING_ROOM).max(floors::LIVING_ROOM);
    let kitchen = if template.has_kitchen {
        round_area(total, ratios::KITCHEN).max(floors::KITCHEN)
    } else {
        0
    };
    let bathroom = if template.bathroom_count > 0 {
        round_area(total, ratios::BATHROOM).max(floors::BATHROOM)
    } else {
        0
    };
    let bedroom = if template.bedroom_count > 0 {
        round_area(total, bedroom_ratio(template)).max(floors::BEDROOM)
    } else {
        0
    };

    let mut areas = AreaSet {
        living_room,
        bedroom,
        kitchen,
        bathroom,
    };

    // Reconcile: the salon takes the whole difference, but never drops
    // below its floor.
    let achieved = areas.wide_total(template) as i64;
    let difference = total_area as i64 - achieved;
    let reconciled = (areas.living_room as i64 + difference).max(floors::LIVING_ROOM as i64);
    areas.living_room = u32::try_from(reconciled).unwrap_or(u32::MAX);

    if difference != 0 {
        log::debug!(
            "allocate: total={} achieved={} salon adjusted by {} to {}",
            total_area,
            achieved,
            difference,
            areas.living_room
        );
    }

    areas
}
