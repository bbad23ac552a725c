use eframe::egui::{self, Color32, Rounding, Sense, Vec2};

use crate::ui_constants::card::{BUTTON_FILL, BUTTON_HEIGHT};
use crate::views::cards::motion::{toggle_progress, CardMotion};

/// Full-width pill-shaped call-to-action, always dark brown with white text.
/// It only shrinks while held; the click is reported back but nothing acts on it.
pub fn draw_action_button(
    ui: &mut egui::Ui,
    id: egui::Id,
    label: &str,
    motion: &CardMotion,
    opacity: f32,
) -> bool {
    let (rect, resp) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), BUTTON_HEIGHT), Sense::click());
    let resp = resp.on_hover_cursor(egui::CursorIcon::PointingHand);

    let pressed = toggle_progress(
        ui.ctx(),
        id.with("pressed"),
        resp.is_pointer_button_down_on(),
        &motion.press,
    );
    let scale = motion.button_scale(pressed);
    let shown = egui::Rect::from_center_size(rect.center(), rect.size() * scale);

    let p = ui.painter_at(rect);
    p.rect_filled(shown, Rounding::same(shown.height() * 0.5), BUTTON_FILL.gamma_multiply(opacity));
    p.text(
        shown.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(16.0 * scale),
        Color32::WHITE.gamma_multiply(opacity),
    );

    resp.clicked()
}
