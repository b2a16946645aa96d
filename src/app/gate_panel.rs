//! The identity-code search form shown while the gate is closed.
//!
//! Edits pass through `CodeInput`, so a non-digit keystroke (or an 11th
//! digit) is bounced on the spot: the text box snaps back to the stored
//! code on the next frame and the rejection is shown under the field.

use eframe::egui;

use super::MenuApp;

impl MenuApp {
    /// Render the code entry field and submit button.
    pub fn draw_gate_panel(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.heading("جستجوی کد ملی");
            ui.add_space(6.0);

            let mut text = self.code_input.as_str().to_string();
            let field = ui.add_sized(
                egui::vec2(220.0, 28.0),
                egui::TextEdit::singleline(&mut text)
                    .hint_text("کد ملی ۱۰ رقمی")
                    .horizontal_align(egui::Align::Center),
            );
            if field.changed() {
                self.code_error = self.code_input.apply(&text);
            }

            ui.add_space(4.0);
            let submitted = ui
                .add_sized(egui::vec2(220.0, 26.0), egui::Button::new("جستجو"))
                .clicked()
                || (field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)));

            if submitted {
                match self.selection.submit_search(self.code_input.as_str()) {
                    Ok(()) => self.code_error = None,
                    Err(e) => self.code_error = Some(e),
                }
            }

            if let Some(ref error) = self.code_error {
                ui.add_space(4.0);
                ui.colored_label(egui::Color32::from_rgb(255, 90, 90), error.to_string());
            }
        });
    }
}
