//! Rendering pipeline: room descriptors in, diagram instructions out.
//!
//! The pipeline has two pure stages: [`layout::fit_plan`] maps room
//! rectangles onto the drawing surface with a single aspect-locked
//! scale, and [`paint::paint_plan`] turns the placed rooms into a flat
//! paint command list. [`render_plan`] composes the two; identical
//! inputs always yield identical command lists.

pub mod layout;
pub mod paint;
pub mod svg;

use crate::{Canvas, RoomDescriptor};
use paint::PaintCommand;

/// A rendered diagram: the surface dimensions plus the ordered paint
/// command list that draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<PaintCommand>,
}

impl Diagram {
    pub fn empty(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            commands: Vec::new(),
        }
    }
}

/// Render a room list onto the given canvas.
///
/// Replaces any prior diagram in full; there is no incremental
/// diffing. An empty room list yields an empty diagram.
pub fn render_plan(rooms: &[RoomDescriptor], canvas: Canvas) -> Diagram {
    let placed = layout::fit_plan(rooms, canvas);
    Diagram {
        width: canvas.width,
        height: canvas.height,
        commands: paint::paint_plan(&placed),
    }
}
