//! SVG text backend for diagrams.
//!
//! The output is deterministic byte-for-byte for a given diagram,
//! which is what the golden rendering tests digest.

use crate::rendering::paint::{PaintCommand, Rgba};
use crate::rendering::Diagram;

const FONT_FAMILY: &str = "sans-serif";
const FONT_SIZE: f64 = 13.0;
// Width-per-character estimate used to size label backing rects
const CHAR_WIDTH: f64 = 0.6;

fn rgb(color: Rgba) -> String {
    format!("rgb({},{},{})", color.0, color.1, color.2)
}

fn opacity(color: Rgba) -> f64 {
    color.3 as f64 / 255.0
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Serialize a diagram as a standalone SVG document.
pub fn diagram_to_svg(diagram: &Diagram) -> String {
    let mut svg = String::new();
    let width = diagram.width;
    let height = diagram.height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>");

    for command in &diagram.commands {
        match command {
            PaintCommand::FilledRect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
                stroke_width,
            } => {
                svg.push_str(&format!(
                    "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" fill-opacity=\"{:.3}\" stroke=\"{}\" stroke-width=\"{:.2}\"/>",
                    x,
                    y,
                    width,
                    height,
                    rgb(*fill),
                    opacity(*fill),
                    rgb(*stroke),
                    stroke_width
                ));
            }
            PaintCommand::Label {
                x,
                y,
                text,
                background,
            } => {
                let lines: Vec<&str> = text.lines().collect();
                let longest = lines.iter().map(|l| l.len()).max().unwrap_or(0) as f64;
                let text_w = longest * FONT_SIZE * CHAR_WIDTH;
                let text_h = lines.len() as f64 * FONT_SIZE;
                let rect_x = x - text_w / 2.0 - 4.0;
                let rect_y = y - text_h / 2.0 - 3.0;
                svg.push_str(&format!(
                    "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" fill-opacity=\"{:.3}\"/>",
                    rect_x,
                    rect_y,
                    text_w + 8.0,
                    text_h + 6.0,
                    rgb(*background),
                    opacity(*background)
                ));

                // Center the line block vertically around the midpoint.
                let first_line_y = y - (lines.len() as f64 - 1.0) * FONT_SIZE / 2.0;
                svg.push_str(&format!(
                    "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"{}\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\">",
                    x, first_line_y, FONT_FAMILY, FONT_SIZE
                ));
                for (i, line) in lines.iter().enumerate() {
                    if i == 0 {
                        svg.push_str(&format!(
                            "<tspan x=\"{:.2}\">{}</tspan>",
                            x,
                            escape_xml(line)
                        ));
                    } else {
                        svg.push_str(&format!(
                            "<tspan x=\"{:.2}\" dy=\"{}\">{}</tspan>",
                            x,
                            FONT_SIZE,
                            escape_xml(line)
                        ));
                    }
                }
                svg.push_str("</text>");
            }
        }
    }

    svg.push_str("</svg>");
    svg
}
