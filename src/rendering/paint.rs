//! Paint command set and the room-type color table.

use crate::rendering::layout::PlacedRoom;

pub type Rgba = (u8, u8, u8, u8);

/// Solid black border on every room rectangle
pub const BORDER: Rgba = (0, 0, 0, 255);
/// Fixed stroke weight for room borders
pub const BORDER_WIDTH: f64 = 2.0;
/// Semi-transparent white backing behind each label
pub const LABEL_BACKGROUND: Rgba = (255, 255, 255, 180);
/// Fallback fill for room types not in the table
pub const FALLBACK_FILL: Rgba = (255, 255, 255, 255);

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    FilledRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Rgba,
        stroke: Rgba,
        stroke_width: f64,
    },
    /// Centered text on a backing rectangle; `text` may hold one `\n`
    /// separating the room type line from the size line.
    Label {
        x: f64,
        y: f64,
        text: String,
        background: Rgba,
    },
}

/// Fill color for a room type. Closed table; anything unrecognized
/// renders white rather than failing.
pub fn fill_for(room_type: &str) -> Rgba {
    match room_type {
        "bedroom" => (173, 216, 230, 255),     // light blue
        "bathroom" => (211, 211, 211, 255),    // light gray
        "kitchen" => (255, 236, 179, 255),     // light amber
        "living_room" => (144, 238, 144, 255), // light green
        "dining_room" => (255, 218, 185, 255), // light orange
        "office" => (230, 230, 250, 255),      // light purple
        _ => FALLBACK_FILL,
    }
}

/// Label text for a room: the type name, then the rounded area with
/// its unit suffix.
pub fn room_label(room_type: &str, size: f64) -> String {
    format!("{}\n{} sq ft", room_type, size.round() as i64)
}

/// Turn placed rooms into paint commands: one filled rectangle and one
/// centered label per room, in room order. No directional markers.
pub fn paint_plan(placed: &[PlacedRoom]) -> Vec<PaintCommand> {
    let mut commands = Vec::with_capacity(placed.len() * 2);
    for room in placed {
        commands.push(PaintCommand::FilledRect {
            x: room.rect.x,
            y: room.rect.y,
            width: room.rect.width,
            height: room.rect.height,
            fill: fill_for(&room.room_type),
            stroke: BORDER,
            stroke_width: BORDER_WIDTH,
        });
        let (cx, cy) = room.rect.midpoint();
        commands.push(PaintCommand::Label {
            x: cx,
            y: cy,
            text: room_label(&room.room_type, room.size),
            background: LABEL_BACKGROUND,
        });
    }
    commands
}
