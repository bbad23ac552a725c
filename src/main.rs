#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // no console window in release
// Entry point stays minimal: window config and app launch. The page lives in app.rs.

use eframe::{egui, egui_wgpu::WgpuConfiguration};

mod app;
mod localization;
mod logger;
mod types;
mod ui_constants;
mod views;

fn main() -> eframe::Result<()> {
    logger::init();
    app::config::load_config_from_disk();
    let cfg = app::config::current();
    localization::initialize_localization(cfg.language.as_deref());
    log::info!("UI language: {}", localization::get_current_language());

    let wgpu_options = WgpuConfiguration {
        present_mode: eframe::wgpu::PresentMode::AutoVsync,
        ..Default::default()
    };
    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        wgpu_options,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(cfg.window_size)
            .with_min_inner_size([views::cards::CARD_WIDTH + 40.0, 400.0])
            .with_resizable(true),
        ..Default::default()
    };

    let res = eframe::run_native(
        localization::translate("app-window-title").as_str(),
        native_options,
        Box::new(move |_cc| Box::new(app::ShowcaseApp::new(&cfg))),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
