use crate::app::GanttrApp;
use crate::ui::theme;
use egui::{menu, RichText, Ui};
use egui_phosphor::regular as icons;

/// Render the top menu bar.
pub fn show_toolbar(app: &mut GanttrApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            if ui.button(format!("{}  Export PNG...", icons::IMAGE)).clicked() {
                app.export_png();
                ui.close_menu();
            }
            ui.separator();
            if ui.button(format!("{}  Save          Ctrl+S", icons::FLOPPY_DISK)).clicked() {
                app.save();
                ui.close_menu();
            }
            if ui.button(format!("{}  Load", icons::FOLDER_OPEN)).clicked() {
                app.load();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Chart  ").font(theme::font_menu()), |ui| {
            let editing = app.chart.editing().is_some();
            if ui
                .add_enabled(editing, egui::Button::new("  Close Editor      Esc"))
                .clicked()
            {
                app.chart.close_editor();
                ui.close_menu();
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let config = app.chart.config();
            ui.label(
                RichText::new(format!(
                    "{}×{} · {} rows of {}px",
                    config.width,
                    config.height,
                    app.chart.rows().len(),
                    app.chart.layout().row_height
                ))
                .size(11.0)
                .weak(),
            );
        });
    });
}
