use egui::{Align2, Painter, Pos2, Rounding, Sense, Stroke, Ui, Vec2};

use crate::model::{Chart, ChartResult, ClickOutcome, TaskId};
use crate::render::{Hit, Node, NodeKind};
use crate::ui::theme;

/// Result details from interactions with the chart surface.
#[derive(Debug, Default)]
pub struct ChartInteraction {
    /// Set when the surface was clicked this frame.
    pub click: Option<ChartResult<ClickOutcome>>,
}

/// Paint the chart's scene and route clicks back into the chart.
pub fn show_chart(chart: &mut Chart, ui: &mut Ui) -> ChartInteraction {
    let mut interaction = ChartInteraction::default();
    let size = chart.scene().size();

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(size, Sense::click());
            let origin = response.rect.min;

            let hover = response
                .hover_pos()
                .map(|p| chart.scene().hit_test(to_surface(p, origin)))
                .unwrap_or(Hit::None);

            painter.rect_filled(response.rect, 0.0, theme::SURFACE_BG);
            let selected = chart.editing().cloned();
            for node in chart.scene().nodes() {
                paint_node(&painter, node, origin.to_vec2(), &hover, selected.as_ref());
            }
            painter.rect_stroke(response.rect, 0.0, theme::SURFACE_BORDER);

            if let Hit::Task { id } = &hover {
                if let Ok(task) = chart.get(id) {
                    egui::show_tooltip_at_pointer(
                        ui.ctx(),
                        ui.layer_id(),
                        egui::Id::new(("task-tip", id.as_str())),
                        |ui| {
                            ui.strong(&task.title);
                            ui.label(format!(
                                "{} → {} ({} days)",
                                task.start_date.format("%d/%m/%Y"),
                                task.end_date.format("%d/%m/%Y"),
                                task.duration_days(),
                            ));
                        },
                    );
                }
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            } else if matches!(hover, Hit::Row { .. }) {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    interaction.click = Some(chart.click(to_surface(pos, origin)));
                }
            }
        });

    interaction
}

fn to_surface(screen: Pos2, origin: Pos2) -> Pos2 {
    (screen - origin).to_pos2()
}

fn paint_node(
    painter: &Painter,
    node: &Node,
    offset: Vec2,
    hover: &Hit,
    selected: Option<&TaskId>,
) {
    let rect = node.rect.translate(offset);

    match &node.kind {
        NodeKind::Gridline => {
            painter.line_segment(
                [rect.center_top(), rect.center_bottom()],
                Stroke::new(1.0, theme::GRID_LINE),
            );
        }
        NodeKind::RowStrip { index } => {
            if *hover == (Hit::Row { index: *index }) {
                painter.rect_filled(rect, 0.0, theme::ROW_HOVER);
            }
        }
        NodeKind::LabelPanel => {
            painter.rect_filled(rect, 0.0, theme::LABEL_PANEL);
        }
        NodeKind::TaskStrip { .. } => {}
        NodeKind::TaskLabel { text, .. } => {
            let clipped = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
            clipped.text(
                Pos2::new(rect.left() + theme::LABEL_PADDING, rect.center().y),
                Align2::LEFT_CENTER,
                text,
                theme::font_label(),
                theme::TASK_LABEL_TEXT,
            );
        }
        NodeKind::TaskBox { id } => {
            painter.rect_filled(rect, Rounding::ZERO, theme::TASK_BOX);
            if selected == Some(id) {
                painter.rect_stroke(rect.shrink(1.0), Rounding::ZERO, theme::TASK_BOX_SELECTED);
            }
        }
    }

    for child in &node.children {
        paint_node(painter, child, rect.min.to_vec2(), hover, selected);
    }
}
