use eframe::egui::emath::TSTransform;
use eframe::egui::epaint::Shadow;
use eframe::egui::{self, Color32, RichText, Rounding, Sense, Shape, Vec2};

use super::action_button::draw_action_button;
use super::cover::draw_cover;
use super::pills_row::draw_pills_row;
use crate::types::CardProps;
use crate::ui_constants::card::{
    BODY_PADDING, ROUNDING, SHADOW_BLUR, SHADOW_OFFSET_Y, STRONG_PILL_FILL,
};
use crate::ui_constants::{spacing, CARD_WIDTH};
use crate::views::cards::content::CardContent;
use crate::views::cards::motion::{entry_progress, toggle_progress, CardMotion};
use crate::views::ui_helpers::{paint_pill, pill_size, vertical_gradient_rounded_rect};

/// What the host gets back from a card each frame.
pub struct CardResponse {
    /// Slot the card occupies in the parent layout, before motion offsets.
    pub rect: egui::Rect,
    pub hovered: bool,
    pub add_to_cart_pressed: bool,
}

/// Fixed-width product card.
///
/// The panel lives on its own layer so entry offset and hover scale can move it
/// without disturbing the parent layout; the parent only sees a slot sized from the
/// previous frame.
pub fn product_card(
    ui: &mut egui::Ui,
    props: &CardProps,
    image: Option<&egui::TextureHandle>,
) -> CardResponse {
    let motion = CardMotion::default();
    let content = CardContent::from_props(props);
    let id = ui.id().with(("product_card", &props.title));

    let size_id = id.with("size");
    let size = ui
        .ctx()
        .memory(|m| m.data.get_temp::<Vec2>(size_id))
        .unwrap_or(Vec2::new(CARD_WIDTH, CARD_WIDTH * 1.5));
    let (slot, _) = ui.allocate_exact_size(size, Sense::hover());

    let hovered = ui
        .input(|i| i.pointer.hover_pos())
        .map_or(false, |p| slot.contains(p));
    let entry = entry_progress(ui, id.with("entry"), &motion.entry);
    let hover = toggle_progress(ui.ctx(), id.with("hover"), hovered, &motion.hover);
    let highlight = toggle_progress(ui.ctx(), id.with("highlight"), hovered, &motion.color);
    let pose = motion.pose(entry, hover);
    let colors = motion.colors(highlight).with_opacity(pose.opacity);

    let panel_id = id.with("panel");
    let layer = egui::LayerId::new(egui::Order::Middle, panel_id);
    let out = egui::Area::new(panel_id)
        .order(egui::Order::Middle)
        .fixed_pos(slot.min + Vec2::new(0.0, pose.offset_y))
        .show(ui.ctx(), |ui| {
            ui.set_min_width(CARD_WIDTH);
            ui.set_max_width(CARD_WIDTH);

            let frame_out = egui::Frame::none()
                .rounding(Rounding::same(ROUNDING))
                .shadow(Shadow {
                    offset: Vec2::new(0.0, SHADOW_OFFSET_Y),
                    blur: SHADOW_BLUR,
                    spread: 0.0,
                    color: Color32::from_black_alpha(40).gamma_multiply(pose.opacity),
                })
                .show(ui, |ui| {
                    ui.set_width(CARD_WIDTH);
                    ui.spacing_mut().item_spacing.y = 0.0;
                    // Filled in once the panel size is known.
                    let background = ui.painter().add(Shape::Noop);

                    draw_cover(
                        ui,
                        CARD_WIDTH,
                        image,
                        content.discount.as_deref(),
                        pose.opacity,
                    );

                    let body = egui::Frame::none()
                        .inner_margin(egui::Margin {
                            left: BODY_PADDING,
                            right: BODY_PADDING,
                            top: 0.0,
                            bottom: BODY_PADDING,
                        })
                        .show(ui, |ui| {
                            ui.set_width(CARD_WIDTH - 2.0 * BODY_PADDING);
                            draw_header_row(ui, &content, colors.text, pose.opacity);

                            ui.add_space(spacing::MEDIUM);
                            ui.label(
                                RichText::new(&content.description)
                                    .size(14.0)
                                    .color(colors.muted_text),
                            );

                            ui.add_space(spacing::LARGE);
                            draw_pills_row(
                                ui,
                                &content.pills,
                                content.stock.as_deref(),
                                colors.text,
                                pose.opacity,
                            );

                            ui.add_space(BODY_PADDING);
                            draw_action_button(
                                ui,
                                id.with("add_to_cart"),
                                &content.action,
                                &motion,
                                pose.opacity,
                            )
                        });
                    (background, body.inner)
                });

            let (background, pressed) = frame_out.inner;
            ui.painter().set(
                background,
                vertical_gradient_rounded_rect(
                    frame_out.response.rect,
                    ROUNDING,
                    colors.top,
                    colors.bottom,
                ),
            );
            pressed
        });

    let panel_rect = out.response.rect;
    // Scale around the panel center.
    let center = panel_rect.center().to_vec2();
    ui.ctx()
        .set_transform_layer(layer, TSTransform::new(center * (1.0 - pose.scale), pose.scale));

    if panel_rect.size() != size {
        ui.ctx().memory_mut(|m| m.data.insert_temp(size_id, panel_rect.size()));
        ui.ctx().request_repaint();
    }

    let add_to_cart_pressed = out.inner;
    if add_to_cart_pressed {
        log::debug!("'{}' add to cart pressed (no action bound)", props.title);
    }

    CardResponse {
        rect: slot,
        hovered,
        add_to_cart_pressed,
    }
}

/// Title on the left, price pill on the right.
fn draw_header_row(ui: &mut egui::Ui, content: &CardContent, text_color: Color32, opacity: f32) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(&content.title)
                .size(18.0)
                .strong()
                .color(text_color),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let font = egui::FontId::proportional(14.0);
            let size = pill_size(ui, &content.price, &font, ui.available_width());
            let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
            paint_pill(
                &ui.painter_at(rect),
                rect,
                &content.price,
                font,
                STRONG_PILL_FILL.gamma_multiply(opacity),
                text_color,
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frames(props: &CardProps, frames: usize) -> CardResponse {
        let ctx = egui::Context::default();
        let mut last = None;
        for _ in 0..frames {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    last = Some(product_card(ui, props, None));
                });
            });
        }
        last.expect("card was drawn")
    }

    #[test]
    fn bare_card_renders_without_optional_regions() {
        let props = CardProps {
            title: "Kesar".into(),
            description: "Saffron mango".into(),
            price: 199.0,
            image_src: "/kesar.jpg".into(),
            discount: None,
            badges: vec![],
            stock_left: None,
        };
        let resp = run_frames(&props, 1);
        assert!(!resp.hovered);
        assert!(!resp.add_to_cart_pressed);
    }

    fn flatten(shape: Shape, out: &mut Vec<Shape>) {
        match shape {
            Shape::Vec(shapes) => shapes.into_iter().for_each(|s| flatten(s, out)),
            other => out.push(other),
        }
    }

    /// Shapes of the last of three frames, a second apart so the entry has finished.
    fn painted_shapes(props: &CardProps) -> Vec<Shape> {
        let ctx = egui::Context::default();
        let mut shapes = Vec::new();
        for frame in 0..3 {
            let input = egui::RawInput {
                time: Some(frame as f64),
                ..Default::default()
            };
            let output = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    product_card(ui, props, None);
                });
            });
            shapes.clear();
            for clipped in output.shapes {
                flatten(clipped.shape, &mut shapes);
            }
        }
        shapes
    }

    fn painted_text(props: &CardProps) -> Vec<String> {
        painted_shapes(props)
            .iter()
            .filter_map(|s| match s {
                Shape::Text(t) => Some(t.galley.text().to_owned()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn alphonso_paints_every_region() {
        let texts = painted_text(&CardProps::alphonso());
        for expected in ["Alphonso", "₹270", "20% off", "Best Seller", "9 left", "Add to cart"] {
            assert!(
                texts.iter().any(|t| t == expected),
                "{expected:?} missing from {texts:?}"
            );
        }
    }

    #[test]
    fn bare_card_paints_no_discount_or_stock() {
        let props = CardProps {
            title: "Kesar".into(),
            description: "Saffron mango".into(),
            price: 199.0,
            image_src: "/kesar.jpg".into(),
            discount: None,
            badges: vec![],
            stock_left: None,
        };
        let texts = painted_text(&props);
        assert!(texts.iter().any(|t| t == "Add to cart"));
        assert!(texts.iter().any(|t| t == "₹199"));
        assert!(!texts.iter().any(|t| t.ends_with(" left") || t.ends_with("% off")));
    }

    #[test]
    fn zero_stock_still_paints_its_pill() {
        let props = CardProps {
            stock_left: Some(0),
            ..CardProps::alphonso()
        };
        assert!(painted_text(&props).iter().any(|t| t == "0 left"));
    }

    #[test]
    fn pills_and_button_use_fixed_fills() {
        use crate::ui_constants::card::{BUTTON_FILL, SOFT_PILL_FILL};

        let fills: Vec<Color32> = painted_shapes(&CardProps::alphonso())
            .iter()
            .filter_map(|s| match s {
                Shape::Rect(r) => Some(r.fill),
                _ => None,
            })
            .collect();
        let count = |c: Color32| fills.iter().filter(|&&f| f == c).count();
        assert_eq!(count(BUTTON_FILL), 1);
        // discount and price
        assert_eq!(count(STRONG_PILL_FILL), 2);
        // "Best Seller" and "9 left"
        assert_eq!(count(SOFT_PILL_FILL), 2);
    }

    #[test]
    fn slot_settles_to_panel_size() {
        let resp = run_frames(&CardProps::alphonso(), 3);
        assert_eq!(resp.rect.width(), CARD_WIDTH);
        assert!(resp.rect.height() > crate::ui_constants::card::IMAGE_SIZE);
    }
}
