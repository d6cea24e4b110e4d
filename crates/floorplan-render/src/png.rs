//! PNG output for the raster composition, rasterized with resvg.

use resvg::tiny_skia;
use resvg::usvg;

use floorplan_logic::FloorPlan;

use crate::export::{PlanHeader, RasterComposition};

/// Compose the plan onto the 800×600 canvas and encode it as PNG.
pub fn render_png(plan: &FloorPlan, header: &PlanHeader) -> Result<Vec<u8>, String> {
    let composition = RasterComposition::compose(plan, header);
    svg_to_png(&composition.to_svg(plan))
}

/// Rasterize an SVG document at its intrinsic size on a white background.
pub fn svg_to_png(svg: &str) -> Result<Vec<u8>, String> {
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();

    let opts = usvg::Options {
        fontdb: std::sync::Arc::new(fontdb),
        ..usvg::Options::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).map_err(|e| format!("failed to parse SVG: {e}"))?;

    let size = tree.size();
    let (px_w, px_h) = (size.width().ceil() as u32, size.height().ceil() as u32);
    if px_w == 0 || px_h == 0 {
        return Err("image dimensions are zero".to_string());
    }

    let mut pixmap =
        tiny_skia::Pixmap::new(px_w, px_h).ok_or_else(|| "failed to allocate pixmap".to_string())?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    log::debug!("rasterized {}×{} PNG", px_w, px_h);
    pixmap
        .encode_png()
        .map_err(|e| format!("failed to encode PNG: {e}"))
}
