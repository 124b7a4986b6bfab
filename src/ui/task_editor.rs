use egui::{Color32, Context, RichText, Window};
use egui_phosphor::regular as icons;

use crate::model::{date_edits, Chart, ChartError, TaskEdit};
use crate::ui::theme;

/// What happened in the editor this frame.
pub enum EditorAction {
    None,
    Changed(&'static str),
    Failed(ChartError),
    Closed,
}

/// Render the task editor window for the task the chart is editing.
///
/// Every change is pushed into the chart as soon as it happens. "Done" only
/// hides the window.
pub fn show_task_editor(chart: &mut Chart, ctx: &Context) -> EditorAction {
    let Some(id) = chart.editing().cloned() else {
        return EditorAction::None;
    };
    let task = match chart.get(&id) {
        Ok(task) => task.clone(),
        Err(e) => {
            chart.close_editor();
            return EditorAction::Failed(e);
        }
    };

    let mut title = task.title.clone();
    let mut start = task.start_date;
    let mut end = task.end_date;
    let mut edits: Vec<TaskEdit> = Vec::new();
    let mut done = false;

    let title_text = RichText::new(format!("{} Edit Task", icons::PENCIL_SIMPLE))
        .strong()
        .size(14.0);
    Window::new(title_text)
        .id(egui::Id::new("task_editor"))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([theme::EDITOR_WIDTH, 0.0])
        .show(ctx, |ui| {
            ui.visuals_mut().extreme_bg_color = theme::BG_FIELD;
            ui.add_space(4.0);

            egui::Grid::new("task_editor_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Title").color(theme::TEXT_SECONDARY));
                    let resp = ui.add_sized(
                        [200.0, 24.0],
                        egui::TextEdit::singleline(&mut title)
                            .hint_text("Task title...")
                            .text_color(theme::TEXT_PRIMARY),
                    );
                    if resp.changed() {
                        edits.push(TaskEdit::Title(title.clone()));
                    }
                    ui.end_row();

                    ui.label(RichText::new("Start").color(theme::TEXT_SECONDARY));
                    let resp = ui.add(
                        egui_extras::DatePickerButton::new(&mut start).id_salt("editor_dp_start"),
                    );
                    if resp.changed() {
                        edits.extend(date_edits(
                            task.start_date,
                            task.end_date,
                            TaskEdit::StartDate(start),
                        ));
                    }
                    ui.end_row();

                    ui.label(RichText::new("End").color(theme::TEXT_SECONDARY));
                    let resp = ui.add(
                        egui_extras::DatePickerButton::new(&mut end).id_salt("editor_dp_end"),
                    );
                    if resp.changed() {
                        edits.extend(date_edits(
                            task.start_date,
                            task.end_date,
                            TaskEdit::EndDate(end),
                        ));
                    }
                    ui.end_row();
                });

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Row {} · id {}", task.row + 1, task.id))
                    .size(10.0)
                    .color(theme::TEXT_DIM),
            );
            ui.add_space(4.0);
            ui.separator();

            let done_btn = egui::Button::new(
                RichText::new(format!("{} Done", icons::CHECK)).color(Color32::WHITE),
            )
            .fill(theme::ACCENT)
            .rounding(egui::Rounding::same(4.0));
            if ui.add_sized([80.0, 28.0], done_btn).clicked() {
                done = true;
            }
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        done = true;
    }

    let mut action = EditorAction::None;
    for edit in edits {
        let field = edit.field();
        match chart.update_task(&id, edit) {
            Ok(()) => action = EditorAction::Changed(field),
            Err(e) => return EditorAction::Failed(e),
        }
    }

    if done {
        chart.close_editor();
        return EditorAction::Closed;
    }
    action
}
