#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod convert;
mod structs;
mod types;
mod ui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        centered: true,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([450.0, 320.0])
            .with_resizable(false)
            .with_maximize_button(false),
        ..Default::default()
    };

    eframe::run_native(
        "Image Converter",
        options,
        Box::new(|_cc| Ok(Box::<ui::App>::default())),
    )
}
