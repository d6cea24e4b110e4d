//! The full generation pipeline: request → template → areas → rooms.
//!
//! Every call starts from scratch; nothing is cached between runs and two
//! calls with the same request produce identical plans.

use serde::{Deserialize, Serialize};

use crate::allocation::{allocate, AreaSet};
use crate::layout::{canvas_size, place, Orientation, PlacedRoom};
use crate::request::GenerationRequest;
use crate::template::{resolve, ApartmentTemplate};

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub request: GenerationRequest,
    pub template: ApartmentTemplate,
    pub areas: AreaSet,
    pub orientation: Orientation,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub rooms: Vec<PlacedRoom>,
}

/// Totals shown under the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Requested total, not the sum of room areas.
    pub total_area: u32,
    pub room_count: usize,
    /// Sum of room areas excluding bathrooms.
    pub livable_area: u32,
}

/// Run the pipeline on a canvas sized from the requested area.
pub fn generate_plan(request: &GenerationRequest) -> FloorPlan {
    let (width, height) = canvas_size(request.total_area);
    generate_plan_on_canvas(request, width, height)
}

/// Run the pipeline on an explicit canvas.
pub fn generate_plan_on_canvas(
    request: &GenerationRequest,
    canvas_width: f64,
    canvas_height: f64,
) -> FloorPlan {
    let template = resolve(&request.apartment_type);
    let areas = allocate(request.total_area, &template);
    let orientation = request.orientation();
    let rooms = place(canvas_width, canvas_height, &template, &areas, orientation);

    log::debug!(
        "generated {} plan: {} m², {:?}, {} rooms on {:.0}×{:.0}",
        request.apartment_type,
        request.total_area,
        orientation,
        rooms.len(),
        canvas_width,
        canvas_height
    );

    FloorPlan {
        request: request.clone(),
        template,
        areas,
        orientation,
        canvas_width,
        canvas_height,
        rooms,
    }
}

/// Summary totals for a room list.
pub fn summarize_rooms(total_area: u32, rooms: &[PlacedRoom]) -> PlanSummary {
    let livable: u64 = rooms
        .iter()
        .filter(|r| r.category.is_livable())
        .map(|r| u64::from(r.area))
        .sum();
    PlanSummary {
        total_area,
        room_count: rooms.len(),
        livable_area: u32::try_from(livable).unwrap_or(u32::MAX),
    }
}

impl FloorPlan {
    pub fn summary(&self) -> PlanSummary {
        summarize_rooms(self.request.total_area, &self.rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RoomCategory;

    #[test]
    fn test_summary_excludes_bathrooms() {
        let plan = generate_plan(&GenerationRequest::new("2+1", 100, 1));
        let s = plan.summary();
        assert_eq!(s.total_area, 100);
        assert_eq!(s.room_count, 5);
        // 35 + 12 + 2×23, bathroom's 7 left out.
        assert_eq!(s.livable_area, 93);
    }

    #[test]
    fn test_summary_saturates() {
        let room = PlacedRoom {
            label: "Salon".into(),
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            area: u32::MAX,
            category: RoomCategory::Salon,
        };
        let s = summarize_rooms(u32::MAX, &[room.clone(), room]);
        assert_eq!(s.livable_area, u32::MAX);
        assert_eq!(s.room_count, 2);
    }

    #[test]
    fn test_summary_of_empty_list() {
        let s = summarize_rooms(80, &[]);
        assert_eq!((s.total_area, s.room_count, s.livable_area), (80, 0, 0));
    }

    #[test]
    fn test_plan_carries_request_and_canvas() {
        let req = GenerationRequest::new("3+1", 225, 2);
        let plan = generate_plan(&req);
        assert_eq!(plan.request, req);
        assert_eq!(plan.orientation, Orientation::Corner);
        assert_eq!((plan.canvas_width, plan.canvas_height), (600.0, 450.0));
        assert_eq!(plan.rooms[0].category, RoomCategory::Salon);
    }

    #[test]
    fn test_explicit_canvas() {
        let plan = generate_plan_on_canvas(&GenerationRequest::default(), 800.0, 600.0);
        assert_eq!(plan.canvas_width, 800.0);
        assert!(plan.rooms.iter().all(|r| r.right() <= 800.0 + 1e-9));
    }
}
