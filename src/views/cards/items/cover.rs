use eframe::egui::{self, Color32, Rounding, Sense, Vec2};

use crate::localization::translate;
use crate::ui_constants::card::{IMAGE_PADDING, IMAGE_ROUNDING, IMAGE_SIZE, STRONG_PILL_FILL};
use crate::views::ui_helpers::{paint_pill, pill_size};

const PLACEHOLDER_FILL: Color32 = Color32::from_rgb(229, 231, 235);

/// Draws the padded image region across `width` with the square image centered,
/// and the discount pill pinned to the region's padded top-left corner.
/// Returns the image rect.
pub fn draw_cover(
    ui: &mut egui::Ui,
    width: f32,
    image: Option<&egui::TextureHandle>,
    discount: Option<&str>,
    opacity: f32,
) -> egui::Rect {
    let (row, _) = ui.allocate_exact_size(
        Vec2::new(width, IMAGE_SIZE + 2.0 * IMAGE_PADDING),
        Sense::hover(),
    );
    let side = IMAGE_SIZE.min(width - 2.0 * IMAGE_PADDING);
    let cover_rect = egui::Rect::from_center_size(row.center(), Vec2::splat(side));
    let rounding = Rounding::same(IMAGE_ROUNDING);

    match image {
        Some(tex) => {
            egui::Image::new((tex.id(), cover_rect.size()))
                .rounding(rounding)
                .tint(Color32::WHITE.gamma_multiply(opacity))
                .paint_at(ui, cover_rect);
        }
        None => {
            let p = ui.painter_at(cover_rect);
            p.rect_filled(cover_rect, rounding, PLACEHOLDER_FILL.gamma_multiply(opacity));
            p.text(
                cover_rect.center(),
                egui::Align2::CENTER_CENTER,
                translate("card-image-missing"),
                egui::TextStyle::Small.resolve(ui.style()),
                Color32::from_gray(120).gamma_multiply(opacity),
            );
        }
    }

    if let Some(text) = discount {
        let font = egui::FontId::proportional(12.0);
        let size = pill_size(ui, text, &font, row.width() - 2.0 * IMAGE_PADDING);
        let rect = egui::Rect::from_min_size(row.min + Vec2::splat(IMAGE_PADDING), size);
        paint_pill(
            &ui.painter_at(row),
            rect,
            text,
            font,
            STRONG_PILL_FILL.gamma_multiply(opacity),
            Color32::WHITE.gamma_multiply(opacity),
        );
    }

    cover_rect
}
