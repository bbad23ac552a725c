use eframe::egui::{self, Color32};

use crate::ui_constants::card::SOFT_PILL_FILL;
use crate::views::cards::content::Pill;
use crate::views::ui_helpers::{paint_pill, pill_size};

/// Wrapped row of badge pills followed by the stock pill. Pills take the panel's
/// current text color. Draws nothing (and takes no space) when both are empty.
pub fn draw_pills_row(
    ui: &mut egui::Ui,
    pills: &[Pill],
    stock: Option<&str>,
    text_color: Color32,
    opacity: f32,
) {
    if pills.is_empty() && stock.is_none() {
        return;
    }

    let font = egui::FontId::proportional(12.0);
    let max_w = ui.available_width();

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
        let labels = pills
            .iter()
            .map(|p| p.label.as_str())
            .chain(stock);
        for text in labels {
            let size = pill_size(ui, text, &font, max_w);
            let (_, rect) = ui.allocate_space(size);
            paint_pill(
                &ui.painter_at(rect),
                rect,
                text,
                font.clone(),
                SOFT_PILL_FILL.gamma_multiply(opacity),
                text_color,
            );
        }
    });
}
