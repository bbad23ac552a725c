use eframe::egui::epaint::Mesh;
use eframe::egui::{self, Color32, Rounding, Shape};

use crate::ui_constants::card::{PILL_PAD_X, PILL_PAD_Y};
use crate::views::cards::motion::lerp_color;

const CORNER_SEGMENTS: usize = 8;

/// Rounded rect filled with a top-to-bottom gradient.
/// Built as a triangle fan around the center, which is fine because the outline is convex.
pub fn vertical_gradient_rounded_rect(
    rect: egui::Rect,
    radius: f32,
    top: Color32,
    bottom: Color32,
) -> Shape {
    if top == bottom {
        return Shape::rect_filled(rect, Rounding::same(radius), top);
    }

    let r = radius.min(rect.width() * 0.5).min(rect.height() * 0.5).max(0.0);
    let color_at = |y: f32| {
        let t = if rect.height() > 0.0 {
            (y - rect.top()) / rect.height()
        } else {
            0.0
        };
        lerp_color(top, bottom, t)
    };

    // Corner arc centers, clockwise from bottom-right (y grows downward).
    let centers = [
        egui::pos2(rect.right() - r, rect.bottom() - r),
        egui::pos2(rect.left() + r, rect.bottom() - r),
        egui::pos2(rect.left() + r, rect.top() + r),
        egui::pos2(rect.right() - r, rect.top() + r),
    ];

    let mut mesh = Mesh::default();
    let c = rect.center();
    mesh.colored_vertex(c, color_at(c.y));
    for (quarter, center) in centers.iter().enumerate() {
        let start = quarter as f32 * std::f32::consts::FRAC_PI_2;
        for i in 0..=CORNER_SEGMENTS {
            let a = start + std::f32::consts::FRAC_PI_2 * (i as f32 / CORNER_SEGMENTS as f32);
            let p = egui::pos2(center.x + r * a.cos(), center.y + r * a.sin());
            mesh.colored_vertex(p, color_at(p.y));
        }
    }

    let ring = mesh.vertices.len() as u32 - 1;
    for i in 0..ring {
        let a = 1 + i;
        let b = 1 + (i + 1) % ring;
        mesh.add_triangle(0, a, b);
    }
    Shape::mesh(mesh)
}

/// Size a pill needs for `text` in `font`: text plus padding, clamped to `max_w`.
pub fn pill_size(ui: &egui::Ui, text: &str, font: &egui::FontId, max_w: f32) -> egui::Vec2 {
    let text_size = ui.fonts(|f| {
        f.layout_no_wrap(text.to_string(), font.clone(), Color32::WHITE)
            .rect
            .size()
    });
    let h = text_size.y + 2.0 * PILL_PAD_Y;
    egui::vec2((text_size.x + 2.0 * PILL_PAD_X).clamp(h, max_w.max(h)), h)
}

/// Paints a fully rounded pill with centered text.
pub fn paint_pill(
    painter: &egui::Painter,
    rect: egui::Rect,
    text: &str,
    font: egui::FontId,
    fill: Color32,
    text_color: Color32,
) {
    painter.rect_filled(rect, Rounding::same(rect.height() * 0.5), fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        font,
        text_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_fill_stays_a_plain_rect() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 50.0));
        let s = vertical_gradient_rounded_rect(rect, 8.0, Color32::WHITE, Color32::WHITE);
        assert!(matches!(s, Shape::Rect(_)));
    }

    #[test]
    fn gradient_mesh_spans_the_rect() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(100.0, 50.0));
        let top = Color32::from_rgb(255, 0, 0);
        let bottom = Color32::from_rgb(0, 0, 255);
        let Shape::Mesh(mesh) = vertical_gradient_rounded_rect(rect, 8.0, top, bottom) else {
            panic!("expected a mesh");
        };
        let ring = 4 * (CORNER_SEGMENTS + 1);
        assert_eq!(mesh.vertices.len(), ring + 1);
        assert_eq!(mesh.indices.len(), ring * 3);

        let bounds = mesh.calc_bounds();
        assert!((bounds.min.y - rect.min.y).abs() < 1e-3);
        assert!((bounds.max.y - rect.max.y).abs() < 1e-3);
        assert!((bounds.min.x - rect.min.x).abs() < 1e-3);
        assert!((bounds.max.x - rect.max.x).abs() < 1e-3);

        let topmost = mesh
            .vertices
            .iter()
            .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .unwrap();
        assert_eq!(topmost.color, top);
    }
}
