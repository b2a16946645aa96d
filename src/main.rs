mod app;
mod ui;

use eframe::egui;

use crate::app::MenuApp;

fn main() {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 580.0])
            .with_min_inner_size([320.0, 380.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rondel — case actions",
        options,
        Box::new(|cc| {
            // Labels are Persian; register the first RTL-capable font found.
            let mut fonts = egui::FontDefinitions::default();
            let font_paths = [
                "/usr/share/fonts/truetype/vazirmatn/Vazirmatn-Regular.ttf",
                "/usr/share/fonts/TTF/Vazirmatn-Regular.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/System/Library/Fonts/Supplemental/Tahoma.ttf",
            ];
            for path in &font_paths {
                if let Ok(data) = std::fs::read(path) {
                    fonts
                        .font_data
                        .insert("persian".to_owned(), egui::FontData::from_owned(data));
                    fonts
                        .families
                        .get_mut(&egui::FontFamily::Proportional)
                        .unwrap()
                        .push("persian".to_owned());
                    fonts
                        .families
                        .get_mut(&egui::FontFamily::Monospace)
                        .unwrap()
                        .push("persian".to_owned());
                    break;
                }
            }
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(MenuApp::default()))
        }),
    )
    .expect("Failed to start rondel");
}
