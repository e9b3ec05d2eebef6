//! Zeichnet eine `OverlayScene` und die Loch-Grundkarte mit dem egui-Painter.

use glam::Vec2;

use crate::core::Hole;
use crate::render::MapHost;
use crate::shared::{DrawPrimitive, OverlayScene};

const FAIRWAY_COLOR: egui::Color32 = egui::Color32::from_rgb(46, 110, 52);
const GREEN_COLOR: egui::Color32 = egui::Color32::from_rgb(96, 190, 90);
const TEE_COLOR: egui::Color32 = egui::Color32::from_rgb(235, 235, 235);
/// Breite des gezeichneten Fairways in Metern.
const FAIRWAY_WIDTH_M: f64 = 35.0;
/// Radius des gezeichneten Grüns in Metern.
const GREEN_RADIUS_M: f64 = 14.0;

fn color32(color: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn to_pos(rect: egui::Rect, screen: Vec2) -> egui::Pos2 {
    egui::pos2(rect.min.x + screen.x, rect.min.y + screen.y)
}

/// Zeichnet Fairway, Grün und Tee als schlichte Grundkarte.
pub fn paint_hole(painter: &egui::Painter, rect: egui::Rect, host: &dyn MapHost, hole: &Hole) {
    let mpp = host.meters_per_pixel(hole.tee.latitude).max(1e-6);
    let tee = to_pos(rect, host.project(hole.tee));
    let green = to_pos(rect, host.project(hole.green));

    painter.line_segment(
        [tee, green],
        egui::Stroke::new((FAIRWAY_WIDTH_M / mpp) as f32, FAIRWAY_COLOR),
    );
    painter.circle_filled(green, (GREEN_RADIUS_M / mpp) as f32, GREEN_COLOR);
    painter.circle_filled(green, 3.0, egui::Color32::BLACK);
    painter.rect_filled(
        egui::Rect::from_center_size(tee, egui::vec2(10.0, 10.0)),
        2.0,
        TEE_COLOR,
    );
}

/// Zeichnet alle Primitives einer Szene in Reihenfolge.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &OverlayScene) {
    for primitive in &scene.primitives {
        match primitive {
            DrawPrimitive::Line {
                from,
                to,
                width,
                color,
            } => {
                painter.line_segment(
                    [to_pos(rect, *from), to_pos(rect, *to)],
                    egui::Stroke::new(*width, color32(*color)),
                );
            }
            DrawPrimitive::Polyline {
                points,
                width,
                color,
            } => {
                let points = points.iter().map(|p| to_pos(rect, *p)).collect();
                painter.add(egui::Shape::line(
                    points,
                    egui::Stroke::new(*width, color32(*color)),
                ));
            }
            DrawPrimitive::Circle {
                center,
                radius,
                width,
                color,
            } => {
                painter.circle_stroke(
                    to_pos(rect, *center),
                    *radius,
                    egui::Stroke::new(*width, color32(*color)),
                );
            }
            DrawPrimitive::Marker {
                center,
                radius,
                color,
            } => {
                let pos = to_pos(rect, *center);
                painter.circle_filled(pos, *radius, color32(*color));
                painter.circle_stroke(pos, *radius, egui::Stroke::new(1.0, egui::Color32::BLACK));
            }
            DrawPrimitive::Label {
                position,
                text,
                size,
                color,
            } => {
                let pos = to_pos(rect, *position);
                let font = egui::FontId::proportional(*size);
                // Schatten für Lesbarkeit auf hellem Untergrund
                painter.text(
                    pos + egui::vec2(1.0, 1.0),
                    egui::Align2::CENTER_BOTTOM,
                    text,
                    font.clone(),
                    egui::Color32::from_black_alpha(200),
                );
                painter.text(pos, egui::Align2::CENTER_BOTTOM, text, font, color32(*color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_are_clamped_and_scaled() {
        assert_eq!(
            color32([1.0, 0.0, 2.0, 1.0]),
            egui::Color32::from_rgba_unmultiplied(255, 0, 255, 255)
        );
    }
}
