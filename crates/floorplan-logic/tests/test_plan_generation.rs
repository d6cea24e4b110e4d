//! Integration tests for the full plan generation pipeline.
//!
//! Exercises: GenerationRequest → ApartmentTemplate → AreaSet → PlacedRoom
//! list → geometry validation and summary.
//!
//! All tests are pure logic with no rendering or I/O.

use floorplan_logic::allocation::allocate;
use floorplan_logic::constants::{defaults, floors, RoomCategory};
use floorplan_logic::geometry::hard_errors;
use floorplan_logic::layout::{place, Orientation};
use floorplan_logic::pipeline::{generate_plan, generate_plan_on_canvas};
use floorplan_logic::request::{GenerationRequest, RawInputs};
use floorplan_logic::template::{apartment_types, resolve, ApartmentTemplate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ── Helpers ────────────────────────────────────────────────────────────

fn all_templates() -> Vec<(&'static str, ApartmentTemplate)> {
    apartment_types()
        .into_iter()
        .map(|label| (label, resolve(label)))
        .collect()
}

fn count(rooms: &[floorplan_logic::PlacedRoom], category: RoomCategory) -> usize {
    rooms.iter().filter(|r| r.category == category).count()
}

// ── Scenarios ──────────────────────────────────────────────────────────

#[test]
fn two_plus_one_single_facade() {
    let plan = generate_plan(&GenerationRequest::new("2+1", 100, 1));

    assert_eq!(plan.orientation, Orientation::SingleFacade);
    assert_eq!(plan.rooms.len(), 5);
    assert_eq!(count(&plan.rooms, RoomCategory::Salon), 1);
    assert_eq!(count(&plan.rooms, RoomCategory::Kitchen), 1);
    assert_eq!(count(&plan.rooms, RoomCategory::Bedroom), 2);
    assert_eq!(count(&plan.rooms, RoomCategory::Bathroom), 1);

    let a = plan.areas;
    assert_eq!(a.living_room + a.kitchen + a.bathroom + 2 * a.bedroom, 100);
}

#[test]
fn five_plus_one_corner() {
    let plan = generate_plan(&GenerationRequest::new("5+1", 250, 3));

    assert_eq!(plan.orientation, Orientation::Corner);
    assert_eq!(plan.rooms.len(), 1 + 1 + 5 + 3);
}

#[test]
fn unknown_label_falls_back() {
    let plan = generate_plan(&GenerationRequest::new("unknown-label", 75, 1));
    assert_eq!(plan.template, resolve("2+1"));
    assert_eq!(plan.rooms.len(), 5);
    assert_eq!(plan.areas.total_for(&plan.template), 75);
}

#[test]
fn blank_form_generates_default_plan() {
    let request = RawInputs::default().into_request();
    assert_eq!(request.total_area, 75);
    assert_eq!(request.street_facing, 1);
    let plan = generate_plan(&request);
    assert_eq!(plan.rooms.len(), 5);
}

#[test]
fn oversized_area_text_is_capped() {
    let request = RawInputs {
        apartment_type: "5+1".into(),
        total_area: "4294967295".into(),
        street_facing: "1".into(),
    }
    .into_request();
    assert_eq!(request.total_area, defaults::AREA_CAP);

    let plan = generate_plan(&request);
    assert_eq!(plan.rooms.len(), 10);
    assert_eq!(plan.areas.total_for(&plan.template), defaults::AREA_CAP);
    assert!(plan.summary().livable_area < defaults::AREA_CAP);
}

#[test]
fn max_area_request_does_not_panic() {
    for facing in [1, 2] {
        let plan = generate_plan(&GenerationRequest::new("5+1", u32::MAX, facing));
        assert_eq!(plan.rooms.len(), 10);
        let summary = plan.summary();
        assert_eq!(summary.total_area, u32::MAX);
        assert!(hard_errors(&plan.rooms, plan.canvas_width, plan.canvas_height).is_empty());
    }
}

// ── Properties ─────────────────────────────────────────────────────────

#[test]
fn every_template_has_a_bathroom() {
    for (label, t) in all_templates() {
        assert!(t.bathroom_count >= 1, "{} has no bathroom", label);
    }
}

#[test]
fn allocation_respects_floors_and_sum() {
    let mut rng = StdRng::seed_from_u64(7);
    let templates = all_templates();

    for _ in 0..2000 {
        let total: u32 = rng.gen_range(30..=500);
        let (label, t) = templates[rng.gen_range(0..templates.len())];
        let a = allocate(total, &t);

        assert!(a.living_room >= floors::LIVING_ROOM, "{} @ {}", label, total);
        assert!(a.kitchen >= floors::KITCHEN, "{} @ {}", label, total);
        assert!(a.bathroom >= floors::BATHROOM, "{} @ {}", label, total);
        if t.bedroom_count > 0 {
            assert!(a.bedroom >= floors::BEDROOM, "{} @ {}", label, total);
        } else {
            assert_eq!(a.bedroom, 0);
        }

        let sum = a.total_for(&t);
        if a.living_room > floors::LIVING_ROOM {
            // The salon absorbed the residue without hitting its floor.
            assert_eq!(sum, total, "{} @ {}: {:?}", label, total, a);
        } else {
            assert!(sum >= total, "{} @ {}: sum {} < total", label, total, sum);
        }
    }
}

#[test]
fn exact_sum_across_common_range() {
    // From 80 m² up no floor binds, even for the 5+1 template.
    for (label, t) in all_templates() {
        for total in 80..=500 {
            let a = allocate(total, &t);
            assert_eq!(a.total_for(&t), total, "{} @ {}", label, total);
        }
    }
}

#[test]
fn placement_counts_and_bounds() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let width: f64 = rng.gen_range(50.0..1200.0);
        let height: f64 = rng.gen_range(50.0..900.0);
        let facing: u32 = rng.gen_range(1..=4);
        let total: u32 = rng.gen_range(30..=500);

        for (label, t) in all_templates() {
            let areas = allocate(total, &t);
            let orientation = Orientation::from_street_facing(facing);
            let rooms = place(width, height, &t, &areas, orientation);

            assert_eq!(
                rooms.len(),
                2 + t.bedroom_count as usize + t.bathroom_count as usize,
                "{} {:?}",
                label,
                orientation
            );
            for r in &rooms {
                assert!(r.width > 0.0 && r.height > 0.0, "{}: {:?}", label, r);
                assert!(r.x >= 0.0 && r.y >= 0.0, "{}: {:?}", label, r);
                assert!(r.right() <= width + 1e-9, "{}: {:?}", label, r);
                assert!(r.bottom() <= height + 1e-9, "{}: {:?}", label, r);
            }

            let errors = hard_errors(&rooms, width, height);
            assert!(errors.is_empty(), "{} {:?}: {:?}", label, orientation, errors);
        }
    }
}

#[test]
fn deterministic_output() {
    for (label, _) in all_templates() {
        for facing in [1, 2] {
            let req = GenerationRequest::new(label, 135, facing);
            let a = generate_plan(&req);
            let b = generate_plan(&req);
            assert_eq!(a, b);
            for (ra, rb) in a.rooms.iter().zip(&b.rooms) {
                assert_eq!(ra.x.to_bits(), rb.x.to_bits());
                assert_eq!(ra.width.to_bits(), rb.width.to_bits());
            }
        }
    }
}

#[test]
fn room_area_matches_category() {
    let plan = generate_plan_on_canvas(&GenerationRequest::new("4+1", 160, 2), 640.0, 480.0);
    for r in &plan.rooms {
        assert_eq!(r.area, plan.areas.area_of(r.category), "{}", r.label);
    }
}

#[test]
fn livable_area_excludes_bathrooms() {
    let plan = generate_plan(&GenerationRequest::new("3+1", 120, 1));
    let summary = plan.summary();
    let bathrooms: u32 = plan
        .rooms
        .iter()
        .filter(|r| r.category == RoomCategory::Bathroom)
        .map(|r| r.area)
        .sum();
    assert_eq!(summary.livable_area + bathrooms, plan.areas.total_for(&plan.template));
    assert_eq!(summary.room_count, plan.rooms.len());
}

#[test]
fn plan_serializes_to_json() {
    let plan = generate_plan(&GenerationRequest::new("1+1", 65, 2));
    let json = serde_json::to_string(&plan).unwrap();
    assert!(json.contains("\"orientation\":\"corner\""));
    assert!(json.contains("\"category\":\"bathroom\""));
}
