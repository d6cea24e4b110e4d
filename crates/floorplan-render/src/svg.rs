//! SVG scene for a generated floor plan.
//!
//! The scene is rebuilt from the plan on every call. Hover highlighting is
//! part of the input ([`SceneStyle`]), so a front end re-renders with a new
//! hovered index instead of mutating nodes in place.

use std::fmt::Write;

use floorplan_logic::constants::canvas;
use floorplan_logic::{FloorPlan, PlacedRoom};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const INK: &str = "#2c3e50";
const BACKGROUND_FILL: &str = "#f8f9fa";
const BACKGROUND_STROKE: &str = "#dee2e6";
const NORTH_ARROW_FILL: &str = "#e74c3c";

/// Scale bar length in canvas units and the distance it stands for.
const SCALE_BAR_UNITS: f64 = 75.0;
const SCALE_BAR_LABEL: &str = "5m";

/// Letter under the north arrow ("Kuzey").
const NORTH_LABEL: &str = "K";

/// Declarative per-render state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneStyle {
    /// Index into `FloorPlan::rooms` of the room under the pointer.
    pub hovered: Option<usize>,
}

/// Resolved stroke/filter for one room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomStyle {
    pub stroke_width: f64,
    pub filter: Option<&'static str>,
}

impl SceneStyle {
    pub fn hovering(index: usize) -> Self {
        Self {
            hovered: Some(index),
        }
    }

    pub fn room_style(&self, index: usize) -> RoomStyle {
        if self.hovered == Some(index) {
            RoomStyle {
                stroke_width: 3.0,
                filter: Some("brightness(0.9)"),
            }
        } else {
            RoomStyle {
                stroke_width: 2.0,
                filter: None,
            }
        }
    }
}

/// Format a coordinate: at most two decimals, no trailing zeros.
pub(crate) fn num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Whether a room is large enough to carry its dimension text.
pub fn shows_dimensions(room: &PlacedRoom) -> bool {
    room.width > canvas::DIMENSION_MIN_WIDTH && room.height > canvas::DIMENSION_MIN_HEIGHT
}

/// Render the plan as a standalone SVG document.
pub fn render_svg(plan: &FloorPlan, style: &SceneStyle) -> String {
    let w = plan.canvas_width;
    let h = plan.canvas_height;
    let mut out = String::with_capacity(1024 + plan.rooms.len() * 512);

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="{}" id="floorPlan" viewBox="0 0 {} {}" width="{}" height="{}">"#,
        SVG_NS,
        num(w),
        num(h),
        num(w),
        num(h)
    );
    write_scene(&mut out, plan, style);
    out.push_str("</svg>\n");

    log::debug!("rendered {} rooms into {} bytes of SVG", plan.rooms.len(), out.len());
    out
}

/// Scene contents in plan coordinates, without the enclosing `<svg>`.
pub(crate) fn write_scene(out: &mut String, plan: &FloorPlan, style: &SceneStyle) {
    let w = plan.canvas_width;
    let h = plan.canvas_height;
    let _ = writeln!(
        out,
        r#"<rect width="{}" height="{}" fill="{}" stroke="{}" stroke-width="2"/>"#,
        num(w),
        num(h),
        BACKGROUND_FILL,
        BACKGROUND_STROKE
    );

    for (index, room) in plan.rooms.iter().enumerate() {
        write_room(out, room, index, style.room_style(index));
    }

    write_north_arrow(out, w);
    write_scale_bar(out, h);
}

fn write_room(out: &mut String, room: &PlacedRoom, index: usize, style: RoomStyle) {
    let (cx, cy) = room.center();
    let _ = writeln!(
        out,
        r#"<g class="room-group {}">"#,
        room.category.css_class()
    );

    let _ = write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}" class="room-rect" data-room-index="{}""#,
        num(room.x),
        num(room.y),
        num(room.width),
        num(room.height),
        room.category.fill_color(),
        INK,
        num(style.stroke_width),
        index
    );
    if let Some(filter) = style.filter {
        let _ = write!(out, r#" filter="{}""#, filter);
    }
    out.push_str("/>\n");

    let _ = writeln!(
        out,
        r#"<text x="{}" y="{}" text-anchor="middle" class="room-text" font-size="{}" fill="{}" font-weight="bold">{}</text>"#,
        num(cx),
        num(cy - 8.0),
        num((room.width / 8.0).min(14.0)),
        INK,
        escape_xml(&room.label)
    );
    let _ = writeln!(
        out,
        r##"<text x="{}" y="{}" text-anchor="middle" class="room-area-text" font-size="{}" fill="#666">{} m²</text>"##,
        num(cx),
        num(cy + 10.0),
        num((room.width / 10.0).min(12.0)),
        room.area
    );

    if shows_dimensions(room) {
        let (wm, hm) = room.dimensions_m();
        let _ = writeln!(
            out,
            r##"<text x="{}" y="{}" text-anchor="middle" class="room-dimension-text" font-size="10" fill="#999">{}m × {}m</text>"##,
            num(cx),
            num(cy + 25.0),
            wm,
            hm
        );
    }

    out.push_str("</g>\n");
}

fn write_north_arrow(out: &mut String, width: f64) {
    let _ = writeln!(
        out,
        r#"<g class="north-arrow" transform="translate({}, 40)">"#,
        num(width - 50.0)
    );
    let _ = writeln!(
        out,
        r##"<circle cx="0" cy="0" r="20" fill="#fff" stroke="{}" stroke-width="2"/>"##,
        INK
    );
    let _ = writeln!(
        out,
        r#"<path d="M 0,-15 L 6,5 L 0,2 L -6,5 Z" fill="{}"/>"#,
        NORTH_ARROW_FILL
    );
    let _ = writeln!(
        out,
        r#"<text x="0" y="35" text-anchor="middle" font-size="12" font-weight="bold" fill="{}">{}</text>"#,
        INK, NORTH_LABEL
    );
    out.push_str("</g>\n");
}

fn write_scale_bar(out: &mut String, height: f64) {
    let end = num(SCALE_BAR_UNITS);
    let _ = writeln!(
        out,
        r#"<g class="scale-bar" transform="translate(20, {})">"#,
        num(height - 30.0)
    );
    let _ = writeln!(
        out,
        r#"<line x1="0" y1="0" x2="{}" y2="0" stroke="{}" stroke-width="2"/>"#,
        end, INK
    );
    let _ = writeln!(
        out,
        r#"<line x1="0" y1="-5" x2="0" y2="5" stroke="{}" stroke-width="2"/>"#,
        INK
    );
    let _ = writeln!(
        out,
        r#"<line x1="{}" y1="-5" x2="{}" y2="5" stroke="{}" stroke-width="2"/>"#,
        end, end, INK
    );
    let _ = writeln!(
        out,
        r#"<text x="{}" y="-10" text-anchor="middle" font-size="10" fill="{}">{}</text>"#,
        num(SCALE_BAR_UNITS / 2.0),
        INK,
        SCALE_BAR_LABEL
    );
    out.push_str("</g>\n");
}
