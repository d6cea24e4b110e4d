//! Apartment templates keyed by type label ("2+1" = two bedrooms plus a salon).
//!
//! Resolution never fails: unknown labels fall back to the "2+1" template.

use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// Room counts for one apartment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApartmentTemplate {
    pub bedroom_count: u32,
    pub has_living_room: bool,
    pub bathroom_count: u32,
    pub has_kitchen: bool,
}

impl ApartmentTemplate {
    const fn new(bedroom_count: u32, bathroom_count: u32) -> Self {
        Self {
            bedroom_count,
            has_living_room: true,
            bathroom_count,
            has_kitchen: true,
        }
    }

    /// Number of rectangles the layout placer emits for this template.
    pub fn room_count(&self) -> usize {
        self.has_living_room as usize
            + self.has_kitchen as usize
            + self.bedroom_count as usize
            + self.bathroom_count as usize
    }
}

// "1+0" is a studio: the salon doubles as the sleeping area.
const TEMPLATES: [(&str, ApartmentTemplate); 6] = [
    ("1+0", ApartmentTemplate::new(0, 1)),
    ("1+1", ApartmentTemplate::new(1, 1)),
    ("2+1", ApartmentTemplate::new(2, 1)),
    ("3+1", ApartmentTemplate::new(3, 2)),
    ("4+1", ApartmentTemplate::new(4, 2)),
    ("5+1", ApartmentTemplate::new(5, 3)),
];

fn lookup(apartment_type: &str) -> Option<ApartmentTemplate> {
    let key = apartment_type.trim();
    TEMPLATES
        .iter()
        .find(|(label, _)| *label == key)
        .map(|(_, t)| *t)
}

/// Resolve an apartment-type label to its template.
pub fn resolve(apartment_type: &str) -> ApartmentTemplate {
    lookup(apartment_type).unwrap_or_else(default_template)
}

/// The fallback template ("2+1").
pub fn default_template() -> ApartmentTemplate {
    lookup(defaults::APARTMENT_TYPE).unwrap_or(ApartmentTemplate::new(2, 1))
}

/// Whether `apartment_type` has its own entry in the table.
pub fn is_known_type(apartment_type: &str) -> bool {
    lookup(apartment_type).is_some()
}

/// All supported labels in display order.
pub fn apartment_types() -> Vec<&'static str> {
    TEMPLATES.iter().map(|(label, _)| *label).collect()
}
