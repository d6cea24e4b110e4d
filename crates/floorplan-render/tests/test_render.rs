//! Rendering tests across every apartment type and both orientations.

use floorplan_logic::template::apartment_types;
use floorplan_logic::{generate_plan, GenerationRequest, RoomCategory};
use floorplan_render::details::format_room_list;
use floorplan_render::export::svg_file_name;
use floorplan_render::svg::shows_dimensions;
use floorplan_render::{
    print_document, render_svg, room_details, PlanHeader, RasterComposition, SceneStyle,
};

fn all_plans() -> Vec<floorplan_logic::FloorPlan> {
    let mut plans = Vec::new();
    for label in apartment_types() {
        for (area, facing) in [(45, 1), (100, 2), (240, 1), (500, 3)] {
            plans.push(generate_plan(&GenerationRequest::new(label, area, facing)));
        }
    }
    plans
}

#[test]
fn one_group_and_one_detail_per_room() {
    for plan in all_plans() {
        let svg = render_svg(&plan, &SceneStyle::default());
        assert_eq!(
            svg.matches(r#"<g class="room-group"#).count(),
            plan.rooms.len(),
            "{:?}",
            plan.request
        );
        assert_eq!(room_details(&plan).len(), plan.rooms.len());
    }
}

#[test]
fn dimension_text_follows_room_size() {
    for plan in all_plans() {
        let svg = render_svg(&plan, &SceneStyle::default());
        let expected = plan.rooms.iter().filter(|r| shows_dimensions(r)).count();
        assert_eq!(svg.matches("room-dimension-text").count(), expected);
    }
}

#[test]
fn hover_touches_exactly_one_room() {
    let plan = generate_plan(&GenerationRequest::new("4+1", 180, 2));
    for i in 0..plan.rooms.len() {
        let svg = render_svg(&plan, &SceneStyle::hovering(i));
        assert_eq!(svg.matches("brightness(0.9)").count(), 1);
        assert!(svg.contains(&format!(r#"data-room-index="{}" filter"#, i)));
    }
    // Out-of-range hover highlights nothing.
    let svg = render_svg(&plan, &SceneStyle::hovering(99));
    assert!(!svg.contains("brightness"));
}

#[test]
fn css_class_per_category() {
    let plan = generate_plan(&GenerationRequest::new("2+1", 90, 1));
    let svg = render_svg(&plan, &SceneStyle::default());
    for category in [
        RoomCategory::Salon,
        RoomCategory::Kitchen,
        RoomCategory::Bedroom,
        RoomCategory::Bathroom,
    ] {
        assert!(svg.contains(&format!("room-group {}", category.css_class())));
        assert!(svg.contains(category.fill_color()));
    }
}

#[test]
fn exports_share_project_stem() {
    let plan = generate_plan(&GenerationRequest::default());
    let header = PlanHeader::new("Yeni  Proje", &plan.request, "17.10.2026");
    assert_eq!(svg_file_name("Yeni  Proje"), "Yeni-Proje.svg");

    let html = print_document(&plan, &header);
    assert!(html.contains("<title>Yeni  Proje</title>"));

    let comp = RasterComposition::compose(&plan, &header);
    assert_eq!(comp.overlays[0].text, "Yeni  Proje");
}

#[test]
fn composition_and_details_serialize() {
    let plan = generate_plan(&GenerationRequest::new("1+0", 35, 1));
    let header = PlanHeader::new("", &plan.request, "now");
    let comp = RasterComposition::compose(&plan, &header);

    let json = serde_json::to_string(&comp).unwrap();
    let back: RasterComposition = serde_json::from_str(&json).unwrap();
    assert_eq!((back.width, back.height), (800, 600));
    assert_eq!(back.overlays, comp.overlays);
    assert!((back.plan.scale - comp.plan.scale).abs() < 1e-12);

    let details = serde_json::to_value(room_details(&plan)).unwrap();
    assert_eq!(details[0]["icon"], "fa-couch");
    assert!(format_room_list(&room_details(&plan)).contains("Banyo"));
}
