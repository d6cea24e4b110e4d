//! Template-driven room placement.
//!
//! Two fixed arrangements, chosen by how many sides of the flat face the
//! street. Rectangle sizes come from canvas fractions only; a room's
//! allocated area rides along as metadata and never sizes its rectangle.
//!
//! ```text
//! single facade            corner
//! ┌────┬──────────┬────┐   ┌──────┬──────┬──────┐
//! │ Ba │          │ Y1 │   │  Y1  │  Y2  │  Y3  │
//! │    │  Salon   ├────┤   ├──────┴────┬─┴──────┤
//! ├────┤          │ Y2 │   │           │  Banyo │
//! │ Mu │          │    │   │   Salon   ├────────┤
//! └────┴──────────┴────┘   │           │ Mutfak │
//!                          └───────────┴────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::allocation::AreaSet;
use crate::constants::{canvas, RoomCategory};
use crate::template::ApartmentTemplate;

/// Which arrangement to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// One street-facing side.
    SingleFacade,
    /// Two or more street-facing sides.
    Corner,
}

impl Orientation {
    pub fn from_street_facing(count: u32) -> Self {
        if count >= 2 {
            Orientation::Corner
        } else {
            Orientation::SingleFacade
        }
    }
}

/// One placed room rectangle in canvas units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedRoom {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub area: u32,
    pub category: RoomCategory,
}

impl PlacedRoom {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Drawn size converted back to metres, rounded.
    pub fn dimensions_m(&self) -> (u32, u32) {
        (
            (self.width / canvas::PIXELS_PER_METER).round() as u32,
            (self.height / canvas::PIXELS_PER_METER).round() as u32,
        )
    }
}

// ── Fractions ──────────────────────────────────────────────────────────

mod single {
    pub const SALON_X: f64 = 0.25;
    pub const SALON_Y: f64 = 0.25;
    pub const SALON_W: f64 = 0.50;
    pub const SALON_H: f64 = 0.55;
    pub const SIDE_COLUMN_W: f64 = 0.25;
    pub const KITCHEN_H: f64 = 0.30;
    pub const BEDROOM_X: f64 = 0.75;
}

mod corner {
    pub const SALON_W: f64 = 0.55;
    pub const SALON_H: f64 = 0.50;
    pub const KITCHEN_H: f64 = 0.35;
    pub const BEDROOM_ROW_H: f64 = 0.40;
}

/// Canvas size for a plan: grows with the square root of the area up to 1.5×.
pub fn canvas_size(total_area: u32) -> (f64, f64) {
    let scale = (total_area as f64 / 100.0).sqrt().min(canvas::MAX_SCALE);
    let width = canvas::BASE_SIZE * scale;
    let height = canvas::BASE_SIZE * canvas::ASPECT * scale;
    (width, height)
}

/// "Yatak Odası" for a single bedroom, "Yatak Odası 2" when there are several.
pub fn room_label(category: RoomCategory, index: u32, count: u32) -> String {
    if count > 1 {
        format!("{} {}", category.label(), index + 1)
    } else {
        category.label().to_string()
    }
}

struct Builder<'a> {
    areas: &'a AreaSet,
    rooms: Vec<PlacedRoom>,
}

impl Builder<'_> {
    fn push(
        &mut self,
        category: RoomCategory,
        label: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) {
        self.rooms.push(PlacedRoom {
            label,
            x,
            y,
            width,
            height,
            area: self.areas.area_of(category),
            category,
        });
    }
}

/// Place every room of `template` on a `width × height` canvas.
///
/// Order: salon, kitchen, bedrooms by index, bathrooms by index.
pub fn place(
    width: f64,
    height: f64,
    template: &ApartmentTemplate,
    areas: &AreaSet,
    orientation: Orientation,
) -> Vec<PlacedRoom> {
    let mut b = Builder {
        areas,
        rooms: Vec::with_capacity(template.room_count()),
    };
    match orientation {
        Orientation::SingleFacade => place_single_facade(&mut b, width, height, template),
        Orientation::Corner => place_corner(&mut b, width, height, template),
    }
    b.rooms
}

fn place_single_facade(b: &mut Builder, w: f64, h: f64, t: &ApartmentTemplate) {
    let side_w = w * single::SIDE_COLUMN_W;
    let kitchen_h = h * single::KITCHEN_H;

    if t.has_living_room {
        b.push(
            RoomCategory::Salon,
            room_label(RoomCategory::Salon, 0, 1),
            w * single::SALON_X,
            h * single::SALON_Y,
            w * single::SALON_W,
            h * single::SALON_H,
        );
    }

    if t.has_kitchen {
        b.push(
            RoomCategory::Kitchen,
            room_label(RoomCategory::Kitchen, 0, 1),
            0.0,
            h - kitchen_h,
            side_w,
            kitchen_h,
        );
    }

    if t.bedroom_count > 0 {
        let bedroom_h = h / t.bedroom_count as f64;
        for i in 0..t.bedroom_count {
            b.push(
                RoomCategory::Bedroom,
                room_label(RoomCategory::Bedroom, i, t.bedroom_count),
                w * single::BEDROOM_X,
                i as f64 * bedroom_h,
                side_w,
                bedroom_h,
            );
        }
    }

    if t.bathroom_count > 0 {
        // Without a kitchen the bathrooms take the whole left column.
        let column_h = if t.has_kitchen { h - kitchen_h } else { h };
        let bathroom_h = column_h / t.bathroom_count as f64;
        for i in 0..t.bathroom_count {
            b.push(
                RoomCategory::Bathroom,
                room_label(RoomCategory::Bathroom, i, t.bathroom_count),
                0.0,
                i as f64 * bathroom_h,
                side_w,
                bathroom_h,
            );
        }
    }
}

fn place_corner(b: &mut Builder, w: f64, h: f64, t: &ApartmentTemplate) {
    let salon_w = w * corner::SALON_W;
    let salon_h = h * corner::SALON_H;
    let right_w = w - salon_w;
    let kitchen_h = h * corner::KITCHEN_H;
    let row_h = h * corner::BEDROOM_ROW_H;

    if t.has_living_room {
        b.push(
            RoomCategory::Salon,
            room_label(RoomCategory::Salon, 0, 1),
            0.0,
            h - salon_h,
            salon_w,
            salon_h,
        );
    }

    if t.has_kitchen {
        b.push(
            RoomCategory::Kitchen,
            room_label(RoomCategory::Kitchen, 0, 1),
            salon_w,
            h - kitchen_h,
            right_w,
            kitchen_h,
        );
    }

    if t.bedroom_count > 0 {
        let bedroom_w = w / t.bedroom_count as f64;
        for i in 0..t.bedroom_count {
            b.push(
                RoomCategory::Bedroom,
                room_label(RoomCategory::Bedroom, i, t.bedroom_count),
                i as f64 * bedroom_w,
                0.0,
                bedroom_w,
                row_h,
            );
        }
    }

    if t.bathroom_count > 0 {
        // Right column between the bedroom row and the kitchen.
        let band_bottom = if t.has_kitchen { h - kitchen_h } else { h };
        let bathroom_h = (band_bottom - row_h) / t.bathroom_count as f64;
        for i in 0..t.bathroom_count {
            b.push(
                RoomCategory::Bathroom,
                room_label(RoomCategory::Bathroom, i, t.bathroom_count),
                salon_w,
                row_h + i as f64 * bathroom_h,
                right_w,
                bathroom_h,
            );
        }
    }
}
