use std::path::Path;

use crate::io;
use crate::model::{Chart, ChartConfig, ChartError, ChartResult, ClickOutcome};
use crate::ui;
use crate::ui::chart_view::ChartInteraction;
use crate::ui::task_editor::EditorAction;

/// Main application state.
pub struct GanttrApp {
    pub chart: Chart,

    // Status message
    pub status_message: String,
    pub status_is_error: bool,
}

impl GanttrApp {
    /// `startup_error` comes from [`startup_chart`] and is shown in the status
    /// bar until the next action replaces it.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        chart: Chart,
        startup_error: Option<String>,
    ) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let (status_message, status_is_error) = match startup_error {
            Some(message) => (message, true),
            None => ("Click a row to add a task".to_string(), false),
        };
        Self {
            chart,
            status_message,
            status_is_error,
        }
    }

    // --- Chart operations ---

    pub fn export_png(&mut self) {
        let result = self.chart.export_png();
        self.report(result, "Exported PNG");
    }

    pub fn save(&mut self) {
        let result = self.chart.save();
        self.report(result, "Chart saved");
    }

    pub fn load(&mut self) {
        let result = self.chart.load();
        self.report(result, "Chart loaded");
    }

    fn report(&mut self, result: ChartResult<()>, ok: &str) {
        match result {
            Ok(()) => self.set_status(ok.to_string()),
            Err(e) => self.set_error(&e),
        }
    }

    fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.status_is_error = false;
    }

    fn set_error(&mut self, error: &ChartError) {
        tracing::error!("{}", error);
        self.status_message = error.to_string();
        self.status_is_error = true;
    }

    fn handle_chart_interaction(&mut self, interaction: ChartInteraction) {
        match interaction.click {
            Some(Ok(ClickOutcome::Created(id))) => {
                let row = self.chart.get(&id).map(|t| t.row + 1).unwrap_or_default();
                self.set_status(format!("Task added in row {}", row));
            }
            Some(Ok(ClickOutcome::Opened(id))) => {
                let title = self
                    .chart
                    .get(&id)
                    .map(|t| t.title.clone())
                    .unwrap_or_default();
                self.set_status(format!("Editing '{}'", title));
            }
            Some(Ok(ClickOutcome::Ignored)) | None => {}
            Some(Err(e)) => self.set_error(&e),
        }
    }

    fn handle_editor_action(&mut self, action: EditorAction) {
        match action {
            EditorAction::Changed(field) => self.set_status(format!("Task {} updated", field)),
            EditorAction::Failed(e) => self.set_error(&e),
            EditorAction::Closed => self.set_status("Ready".to_string()),
            EditorAction::None => {}
        }
    }
}

/// Build the chart from the settings at `path`.
///
/// Unreadable, malformed or invalid settings do not stop the app: the chart
/// starts with the defaults and the returned message says what was ignored.
pub fn startup_chart(path: &Path) -> ChartResult<(Chart, Option<String>)> {
    let loaded = io::load_config(path)
        .map_err(|e| e.to_string())
        .and_then(|config| Chart::new(config).map_err(|e| e.to_string()));
    match loaded {
        Ok(chart) => Ok((chart, None)),
        Err(e) => {
            tracing::error!(path = %path.display(), "using default settings: {}", e);
            let chart = Chart::new(ChartConfig::default())?;
            Ok((chart, Some(format!("Settings ignored, using defaults: {}", e))))
        }
    }
}

impl eframe::App for GanttrApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // Handle keyboard shortcuts outside closures to avoid borrow issues
        let should_save = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::S));
        if should_save {
            self.save();
        }

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_DARK)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let color = if self.status_is_error {
                        ui::theme::TEXT_ERROR
                    } else {
                        ui::theme::TEXT_SECONDARY
                    };
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(color),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("Tasks: {}", self.chart.task_count()))
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Central panel: the chart surface
        let chart_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::same(16.0));
        let mut interaction = ChartInteraction::default();
        egui::CentralPanel::default().frame(chart_frame).show(ctx, |ui| {
            interaction = ui::chart_view::show_chart(&mut self.chart, ui);
        });
        self.handle_chart_interaction(interaction);

        // Editor window, reused for whichever task is being edited
        let action = ui::task_editor::show_task_editor(&mut self.chart, ctx);
        self.handle_editor_action(action);
    }
}
