//! Geometry validation for generated floor plans.
//!
//! Pure functions that take placed rooms and return validation errors.
//! Used by the test suite and by the CLI harness as a sanity sweep.

use crate::layout::PlacedRoom;

/// A geometry validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub category: &'static str,
    pub severity: Severity,
    pub message: String,
}

/// Error severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

/// Edges within this many canvas units count as touching, not overlapping.
const TOLERANCE: f64 = 1e-6;

// ── A. Room geometry (per-room) ─────────────────────────────────────────

/// Check that no room has zero or negative dimensions.
pub fn check_room_dimensions(rooms: &[PlacedRoom]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (i, r) in rooms.iter().enumerate() {
        if !(r.width > 0.0 && r.height > 0.0) {
            errors.push(ValidationError {
                category: "room_geometry",
                severity: Severity::Error,
                message: format!(
                    "Room #{} ({}) has non-positive dimensions: {}×{}",
                    i, r.label, r.width, r.height
                ),
            });
        }
    }
    errors
}

/// Flag slivers: aspect ratios beyond 10:1 still draw but are unreadable.
pub fn check_room_aspect_ratios(rooms: &[PlacedRoom]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (i, r) in rooms.iter().enumerate() {
        if r.width <= 0.0 || r.height <= 0.0 {
            continue; // caught by dimension check
        }
        let ratio = r.width.max(r.height) / r.width.min(r.height);
        if ratio > 10.0 {
            errors.push(ValidationError {
                category: "room_geometry",
                severity: Severity::Warning,
                message: format!(
                    "Room #{} ({}) has extreme aspect ratio {:.1}:1",
                    i, r.label, ratio
                ),
            });
        }
    }
    errors
}

/// Check rooms stay inside the canvas.
pub fn check_rooms_within_canvas(
    rooms: &[PlacedRoom],
    canvas_width: f64,
    canvas_height: f64,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (i, r) in rooms.iter().enumerate() {
        if r.x < -TOLERANCE
            || r.y < -TOLERANCE
            || r.right() > canvas_width + TOLERANCE
            || r.bottom() > canvas_height + TOLERANCE
        {
            errors.push(ValidationError {
                category: "room_bounds",
                severity: Severity::Error,
                message: format!(
                    "Room #{} ({}) extends outside canvas: ({:.1},{:.1})→({:.1},{:.1}) vs {:.0}×{:.0}",
                    i,
                    r.label,
                    r.x,
                    r.y,
                    r.right(),
                    r.bottom(),
                    canvas_width,
                    canvas_height
                ),
            });
        }
    }
    errors
}

// ── B. Room-to-room (pairwise) ──────────────────────────────────────────

/// AABB overlap test. Shared edges are allowed.
pub fn check_room_overlaps(rooms: &[PlacedRoom]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for i in 0..rooms.len() {
        for j in (i + 1)..rooms.len() {
            let a = &rooms[i];
            let b = &rooms[j];
            let overlap_x = (a.right() - TOLERANCE) > b.x && (b.right() - TOLERANCE) > a.x;
            let overlap_y = (a.bottom() - TOLERANCE) > b.y && (b.bottom() - TOLERANCE) > a.y;
            if overlap_x && overlap_y {
                errors.push(ValidationError {
                    category: "room_overlap",
                    severity: Severity::Error,
                    message: format!("Rooms #{} ({}) and #{} ({}) overlap", i, a.label, j, b.label),
                });
            }
        }
    }
    errors
}

// ── Master validation ───────────────────────────────────────────────────

/// Run all geometry validations and return combined results.
pub fn validate_all(
    rooms: &[PlacedRoom],
    canvas_width: f64,
    canvas_height: f64,
) -> Vec<ValidationError> {
    let mut all = Vec::new();
    all.extend(check_room_dimensions(rooms));
    all.extend(check_room_aspect_ratios(rooms));
    all.extend(check_rooms_within_canvas(rooms, canvas_width, canvas_height));
    all.extend(check_room_overlaps(rooms));
    all
}

/// Only the hard errors from [`validate_all`].
pub fn hard_errors(
    rooms: &[PlacedRoom],
    canvas_width: f64,
    canvas_height: f64,
) -> Vec<ValidationError> {
    validate_all(rooms, canvas_width, canvas_height)
        .into_iter()
        .filter(|e| e.severity == Severity::Error)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RoomCategory;

    fn make_room(x: f64, y: f64, w: f64, h: f64) -> PlacedRoom {
        PlacedRoom {
            label: "Salon".into(),
            x,
            y,
            width: w,
            height: h,
            area: 20,
            category: RoomCategory::Salon,
        }
    }

    #[test]
    fn test_valid_rooms_no_errors() {
        let rooms = vec![
            make_room(0.0, 0.0, 100.0, 80.0),
            make_room(100.0, 0.0, 100.0, 80.0),
        ];
        assert!(validate_all(&rooms, 200.0, 80.0).is_empty());
    }

    #[test]
    fn test_zero_width_room() {
        let rooms = vec![make_room(0.0, 0.0, 0.0, 10.0)];
        let errs = check_room_dimensions(&rooms);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message.contains("non-positive"));
    }

    #[test]
    fn test_nan_dimension_is_error() {
        let rooms = vec![make_room(0.0, 0.0, f64::NAN, 10.0)];
        assert_eq!(check_room_dimensions(&rooms).len(), 1);
    }

    #[test]
    fn test_extreme_aspect_ratio() {
        let rooms = vec![make_room(0.0, 0.0, 100.0, 5.0)]; // 20:1
        let errs = check_room_aspect_ratios(&rooms);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].severity, Severity::Warning);
        assert!(hard_errors(&rooms, 100.0, 5.0).is_empty());
    }

    #[test]
    fn test_room_outside_canvas() {
        let rooms = vec![make_room(350.0, 0.0, 100.0, 10.0)];
        let errs = check_rooms_within_canvas(&rooms, 400.0, 300.0);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].category, "room_bounds");
    }

    #[test]
    fn test_overlapping_rooms() {
        let rooms = vec![
            make_room(0.0, 0.0, 10.0, 10.0),
            make_room(5.0, 5.0, 10.0, 10.0),
        ];
        let errs = check_room_overlaps(&rooms);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].message.contains("#0"));
    }

    #[test]
    fn test_no_overlap_adjacent() {
        let rooms = vec![
            make_room(0.0, 0.0, 10.0, 10.0),
            make_room(10.0, 0.0, 10.0, 10.0),
        ];
        assert!(check_room_overlaps(&rooms).is_empty());
    }
}
