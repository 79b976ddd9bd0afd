//! Aspect-locked placement of room rectangles on the drawing surface.

use crate::{Canvas, RoomDescriptor};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn midpoint(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A room mapped into canvas coordinates, ready for painting.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRoom {
    pub rect: Rect,
    pub room_type: String,
    /// Pre-computed area carried through for the label
    pub size: f64,
}

/// Map room rectangles onto the canvas.
///
/// One scale factor serves both axes, so a square room stays square
/// regardless of the plan's aspect ratio. The plan's bounding box is
/// centered in the area left inside the uniform margin. No grid lines,
/// no tick labels.
pub fn fit_plan(rooms: &[RoomDescriptor], canvas: Canvas) -> Vec<PlacedRoom> {
    if rooms.is_empty() {
        return Vec::new();
    }

    let min_x = rooms.iter().map(|r| r.x).fold(f64::INFINITY, f64::min);
    let min_y = rooms.iter().map(|r| r.y).fold(f64::INFINITY, f64::min);
    let max_x = rooms
        .iter()
        .map(|r| r.x + r.width)
        .fold(f64::NEG_INFINITY, f64::max);
    let max_y = rooms
        .iter()
        .map(|r| r.y + r.height)
        .fold(f64::NEG_INFINITY, f64::max);

    let span_x = (max_x - min_x).max(f64::EPSILON);
    let span_y = (max_y - min_y).max(f64::EPSILON);

    let avail_w = (canvas.width - 2.0 * canvas.margin).max(0.0);
    let avail_h = (canvas.height - 2.0 * canvas.margin).max(0.0);

    // Aspect lock: the same factor for both axes.
    let scale = (avail_w / span_x).min(avail_h / span_y);

    let offset_x = canvas.margin + (avail_w - span_x * scale) / 2.0;
    let offset_y = canvas.margin + (avail_h - span_y * scale) / 2.0;

    rooms
        .iter()
        .map(|room| PlacedRoom {
            rect: Rect {
                x: offset_x + (room.x - min_x) * scale,
                y: offset_y + (room.y - min_y) * scale,
                width: room.width * scale,
                height: room.height * scale,
            },
            room_type: room.room_type.clone(),
            size: room.size,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas {
            width: 200.0,
            height: 100.0,
            margin: 10.0,
        }
    }

    #[test]
    fn placement_respects_margin_and_bounds() {
        let rooms = vec![
            RoomDescriptor::new("kitchen", 0.0, 0.0, 10.0, 10.0, 100.0),
            RoomDescriptor::new("bedroom", 10.0, 0.0, 10.0, 10.0, 100.0),
        ];
        let placed = fit_plan(&rooms, canvas());
        for p in &placed {
            assert!(p.rect.x >= 10.0 - 1e-9);
            assert!(p.rect.y >= 10.0 - 1e-9);
            assert!(p.rect.x + p.rect.width <= 190.0 + 1e-9);
            assert!(p.rect.y + p.rect.height <= 90.0 + 1e-9);
        }
    }

    #[test]
    fn scale_is_uniform_across_axes() {
        // A square room must stay square even on a wide canvas.
        let rooms = vec![RoomDescriptor::new("office", 0.0, 0.0, 10.0, 10.0, 100.0)];
        let placed = fit_plan(&rooms, canvas());
        let r = placed[0].rect;
        assert!((r.width - r.height).abs() < 1e-9);
    }

    #[test]
    fn plan_is_centered_inside_the_margin() {
        let rooms = vec![RoomDescriptor::new("office", 0.0, 0.0, 10.0, 10.0, 100.0)];
        let placed = fit_plan(&rooms, canvas());
        let r = placed[0].rect;
        // Height limits the scale (80px), so horizontally the box floats
        // centered in the 180px of available width.
        assert!((r.height - 80.0).abs() < 1e-9);
        assert!((r.x - (10.0 + (180.0 - 80.0) / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn empty_input_places_nothing() {
        assert!(fit_plan(&[], canvas()).is_empty());
    }

    #[test]
    fn negative_origin_plans_are_normalized() {
        let rooms = vec![RoomDescriptor::new("bedroom", -20.0, -5.0, 10.0, 10.0, 100.0)];
        let placed = fit_plan(&rooms, canvas());
        assert!(placed[0].rect.x >= 10.0 - 1e-9);
        assert!(placed[0].rect.y >= 10.0 - 1e-9);
    }
}
