//! Download and print artefacts.
//!
//! Three outputs share one naming scheme:
//!
//! | Output            | File              | Builder                     |
//! |-------------------|-------------------|-----------------------------|
//! | Raster image      | `{stem}.png`      | [`RasterComposition`]       |
//! | Vector drawing    | `{stem}.svg`      | [`crate::svg::render_svg`]  |
//! | Print document    | `{stem}.html`     | [`print_document`]          |

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use floorplan_logic::{FloorPlan, GenerationRequest};

use crate::svg::{escape_xml, num, write_scene, SceneStyle};

/// File stem used when the project has no name.
pub const DEFAULT_STEM: &str = "kat-plani";

/// Header title used when the project has no name.
pub const DEFAULT_TITLE: &str = "Kat Planı";

/// Delay before the print dialog opens, so the scene has laid out.
pub const PRINT_DELAY_MS: u32 = 500;

// ── File names ─────────────────────────────────────────────────────────

/// Characters that cannot appear in a file name on common platforms.
const RESERVED_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Trim, collapse whitespace runs to `-`, replace path separators and other
/// reserved characters with `-`, fall back to [`DEFAULT_STEM`].
///
/// The result is always a single path component.
pub fn export_stem(project_name: &str) -> String {
    let stem: String = project_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .map(|c| {
            if RESERVED_CHARS.contains(&c) || c.is_control() {
                '-'
            } else {
                c
            }
        })
        .collect();
    if stem.is_empty() {
        DEFAULT_STEM.to_string()
    } else {
        stem
    }
}

pub fn png_file_name(project_name: &str) -> String {
    format!("{}.png", export_stem(project_name))
}

pub fn svg_file_name(project_name: &str) -> String {
    format!("{}.svg", export_stem(project_name))
}

pub fn print_file_name(project_name: &str) -> String {
    format!("{}.html", export_stem(project_name))
}

// ── Header text ────────────────────────────────────────────────────────

/// "Daire Tipi: 2+1 | Toplam Alan: 100 m² | Cephe: 1 yön"
pub fn specs_line(request: &GenerationRequest) -> String {
    format!(
        "Daire Tipi: {} | Toplam Alan: {} m² | Cephe: {} yön",
        request.apartment_type, request.total_area, request.street_facing
    )
}

/// Title block printed above the plan on every export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanHeader {
    pub title: String,
    pub specs: String,
    /// Pre-formatted generation time; formatting belongs to the caller.
    pub timestamp: String,
}

impl PlanHeader {
    pub fn new(project_name: &str, request: &GenerationRequest, timestamp: impl Into<String>) -> Self {
        let title = project_name.trim();
        Self {
            title: if title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title.to_string()
            },
            specs: specs_line(request),
            timestamp: timestamp.into(),
        }
    }
}

// ── Print document ─────────────────────────────────────────────────────

const PRINT_STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; color: #2c3e50; }
.header { text-align: center; margin-bottom: 20px; border-bottom: 2px solid #2c3e50; padding-bottom: 10px; }
.header h1 { margin: 0 0 8px 0; }
.header p { margin: 4px 0; }
.plan-container { text-align: center; }
.plan-container svg { max-width: 100%; height: auto; }
@media print { body { margin: 0; } }";

/// Standalone HTML page that prints itself after [`PRINT_DELAY_MS`].
pub fn print_document(plan: &FloorPlan, header: &PlanHeader) -> String {
    let svg = crate::svg::render_svg(plan, &SceneStyle::default());
    let title = escape_xml(&header.title);

    let mut out = String::with_capacity(svg.len() + 1024);
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, r#"<html lang="tr">"#);
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, r#"<meta charset="utf-8">"#);
    let _ = writeln!(out, "<title>{}</title>", title);
    let _ = writeln!(out, "<style>\n{}\n</style>", PRINT_STYLE);
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, r#"<div class="header">"#);
    let _ = writeln!(out, "<h1>{}</h1>", title);
    let _ = writeln!(out, "<p>{}</p>", escape_xml(&header.specs));
    let _ = writeln!(
        out,
        "<p>Oluşturulma Tarihi: {}</p>",
        escape_xml(&header.timestamp)
    );
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, r#"<div class="plan-container">"#);
    out.push_str(&svg);
    let _ = writeln!(out, "</div>");
    let _ = writeln!(
        out,
        "<script>window.onload = function () {{ setTimeout(function () {{ window.print(); }}, {}); }};</script>",
        PRINT_DELAY_MS
    );
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

// ── Raster composition ─────────────────────────────────────────────────

/// Placed text on the raster canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOverlay {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub bold: bool,
}

/// Where the plan lands on the raster canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanRegion {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

/// Fixed-size image: white background, scaled plan, header text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterComposition {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub plan: PlanRegion,
    pub overlays: Vec<TextOverlay>,
}

mod raster {
    pub const WIDTH: u32 = 800;
    pub const HEIGHT: u32 = 600;
    pub const MARGIN_X: f64 = 50.0;
    pub const PLAN_TOP: f64 = 100.0;
    pub const PLAN_BOTTOM: f64 = 540.0;
    pub const TITLE_Y: f64 = 40.0;
    pub const SPECS_Y: f64 = 70.0;
    pub const TIMESTAMP_Y: f64 = 575.0;
}

impl RasterComposition {
    /// Lay out the plan and header on the 800×600 canvas.
    pub fn compose(plan: &FloorPlan, header: &PlanHeader) -> Self {
        let width = raster::WIDTH as f64;
        let region_w = width - 2.0 * raster::MARGIN_X;
        let region_h = raster::PLAN_BOTTOM - raster::PLAN_TOP;

        let scale = if plan.canvas_width > 0.0 && plan.canvas_height > 0.0 {
            (region_w / plan.canvas_width).min(region_h / plan.canvas_height)
        } else {
            1.0
        };
        let x = raster::MARGIN_X + (region_w - plan.canvas_width * scale) / 2.0;
        let y = raster::PLAN_TOP + (region_h - plan.canvas_height * scale) / 2.0;

        let centre = width / 2.0;
        let overlays = vec![
            TextOverlay {
                text: header.title.clone(),
                x: centre,
                y: raster::TITLE_Y,
                font_size: 24.0,
                bold: true,
            },
            TextOverlay {
                text: header.specs.clone(),
                x: centre,
                y: raster::SPECS_Y,
                font_size: 14.0,
                bold: false,
            },
            TextOverlay {
                text: format!("Oluşturulma Tarihi: {}", header.timestamp),
                x: centre,
                y: raster::TIMESTAMP_Y,
                font_size: 12.0,
                bold: false,
            },
        ];

        Self {
            width: raster::WIDTH,
            height: raster::HEIGHT,
            background: "#ffffff".to_string(),
            plan: PlanRegion { x, y, scale },
            overlays,
        }
    }

    /// The composition as one SVG document, ready to rasterize.
    pub fn to_svg(&self, plan: &FloorPlan) -> String {
        let mut out = String::with_capacity(4096);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(
            out,
            r#"<rect width="{}" height="{}" fill="{}"/>"#,
            self.width, self.height, self.background
        );
        let _ = writeln!(
            out,
            r#"<g transform="translate({}, {}) scale({})">"#,
            num(self.plan.x),
            num(self.plan.y),
            self.plan.scale
        );
        write_scene(&mut out, plan, &SceneStyle::default());
        out.push_str("</g>\n");
        for t in &self.overlays {
            let _ = writeln!(
                out,
                r##"<text x="{}" y="{}" text-anchor="middle" font-family="Arial, sans-serif" font-size="{}"{} fill="#2c3e50">{}</text>"##,
                num(t.x),
                num(t.y),
                num(t.font_size),
                if t.bold { r#" font-weight="bold""# } else { "" },
                escape_xml(&t.text)
            );
        }
        out.push_str("</svg>\n");
        out
    }
}
