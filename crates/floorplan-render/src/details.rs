//! Textual room list shown beside the plan.

use serde::Serialize;

use floorplan_logic::{FloorPlan, PlacedRoom, RoomCategory};

/// One row of the room list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomDetail {
    pub label: String,
    pub area: u32,
    pub width_m: u32,
    pub height_m: u32,
    pub icon: &'static str,
    pub css_class: &'static str,
}

/// Font Awesome icon for a room category.
pub fn room_icon(category: RoomCategory) -> &'static str {
    match category {
        RoomCategory::Salon => "fa-couch",
        RoomCategory::Bedroom => "fa-bed",
        RoomCategory::Kitchen => "fa-utensils",
        RoomCategory::Bathroom => "fa-shower",
    }
}

impl RoomDetail {
    pub fn from_room(room: &PlacedRoom) -> Self {
        let (width_m, height_m) = room.dimensions_m();
        Self {
            label: room.label.clone(),
            area: room.area,
            width_m,
            height_m,
            icon: room_icon(room.category),
            css_class: room.category.css_class(),
        }
    }

    /// "Boyutlar: 7m × 11m"
    pub fn dimensions_text(&self) -> String {
        format!("Boyutlar: {}m × {}m", self.width_m, self.height_m)
    }
}

/// Rows in placement order.
pub fn room_details(plan: &FloorPlan) -> Vec<RoomDetail> {
    plan.rooms.iter().map(RoomDetail::from_room).collect()
}

/// Plain-text rendering of the room list, one room per line.
pub fn format_room_list(details: &[RoomDetail]) -> String {
    let label_width = details
        .iter()
        .map(|d| d.label.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for d in details {
        let pad = label_width - d.label.chars().count();
        out.push_str(&format!(
            "{}{}  {:>3} m²  {}\n",
            d.label,
            " ".repeat(pad),
            d.area,
            d.dimensions_text()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_logic::{generate_plan, GenerationRequest};

    #[test]
    fn test_one_detail_per_room() {
        let plan = generate_plan(&GenerationRequest::new("3+1", 120, 1));
        let details = room_details(&plan);
        assert_eq!(details.len(), plan.rooms.len());
        assert_eq!(details[0].label, "Salon");
        assert_eq!(details[0].icon, "fa-couch");
        assert!(details.iter().any(|d| d.label == "Banyo 2" && d.icon == "fa-shower"));
    }

    #[test]
    fn test_dimensions_in_metres() {
        // 400×300 canvas: the salon is 200×165 units, 13m × 11m.
        let plan = generate_plan(&GenerationRequest::new("2+1", 100, 1));
        let salon = &room_details(&plan)[0];
        assert_eq!((salon.width_m, salon.height_m), (13, 11));
        assert_eq!(salon.dimensions_text(), "Boyutlar: 13m × 11m");
    }

    #[test]
    fn test_room_list_text() {
        let plan = generate_plan(&GenerationRequest::new("1+1", 60, 1));
        let text = format_room_list(&room_details(&plan));
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("Salon"));
        assert!(text.contains("m²"));
    }
}
