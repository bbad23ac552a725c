// Page shell: one full-viewport panel with a single card centered in it.
// Config and image loading live in submodules.

use eframe::{egui, App};

use crate::types::CardProps;
use crate::views::cards::product_card;

pub mod assets;
pub mod config;

enum CoverState {
    NotLoaded,
    Ready(egui::TextureHandle),
    Failed,
}

pub struct ShowcaseApp {
    props: CardProps,
    asset_dir: std::path::PathBuf,
    cover: CoverState,
}

impl ShowcaseApp {
    pub fn new(cfg: &config::AppConfig) -> Self {
        let props = cfg.card_props();
        if let Err(e) = props.validate() {
            // Pills are keyed by position, so this still renders.
            log::warn!("card '{}': {e}", props.title);
        }
        Self {
            props,
            asset_dir: cfg.asset_dir.clone(),
            cover: CoverState::NotLoaded,
        }
    }

    fn cover_texture(&mut self, ctx: &egui::Context) -> Option<&egui::TextureHandle> {
        if let CoverState::NotLoaded = self.cover {
            self.cover = match assets::load_image(&self.asset_dir, &self.props.image_src) {
                Ok(img) => {
                    let color = egui::ColorImage::from_rgba_unmultiplied(
                        [img.width as usize, img.height as usize],
                        &img.rgba,
                    );
                    CoverState::Ready(ctx.load_texture(
                        format!("card_cover:{}", self.props.image_src),
                        color,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(e) => {
                    log::warn!("card image {} unavailable: {e}", self.props.image_src);
                    CoverState::Failed
                }
            };
        }
        match &self.cover {
            CoverState::Ready(tex) => Some(tex),
            _ => None,
        }
    }
}

impl Default for ShowcaseApp {
    fn default() -> Self {
        Self::new(&config::current())
    }
}

impl App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = egui::Frame::central_panel(&ctx.style()).fill(egui::Color32::from_rgb(243, 244, 246));
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            // Center horizontally and vertically using the card's last known height.
            let card_h = ui
                .ctx()
                .memory(|m| m.data.get_temp::<egui::Vec2>(ui.id().with("card_slot")))
                .map(|s| s.y)
                .unwrap_or(0.0);
            let avail = ui.available_size();
            ui.add_space(((avail.y - card_h) * 0.5).max(0.0));

            let slot = ui
                .vertical_centered(|ui| {
                    let tex = self.cover_texture(ctx).cloned();
                    product_card(ui, &self.props, tex.as_ref()).rect
                })
                .inner;

            ui.ctx().memory_mut(|m| {
                m.data.insert_temp(ui.id().with("card_slot"), slot.size());
            });
        });
    }
}
