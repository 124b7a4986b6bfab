//! Projects the chart model onto a [`Scene`].
//!
//! These functions hold no state of their own: everything they draw comes
//! from the config, layout, rows and tasks handed to them.

pub mod scene;

pub use scene::{Hit, Node, NodeKind, Scene};

use egui::{pos2, vec2, Rect};

use crate::model::{ChartConfig, Layout, RowTable, Task};

/// Horizontal room kept free to the right of a task label.
const LABEL_GUTTER: f32 = 10.0;

/// Clear the surface and size it to the configured extent.
pub fn render_container(scene: &mut Scene, config: &ChartConfig) {
    scene.reset(vec2(config.width, config.height));
}

/// Draw gridlines, row strips and the label panel.
pub fn render_grid(scene: &mut Scene, config: &ChartConfig, layout: &Layout, rows: &RowTable) {
    for x in &layout.gridlines {
        scene.push(Node::leaf(
            NodeKind::Gridline,
            Rect::from_min_size(pos2(*x, 0.0), vec2(0.0, config.height)),
        ));
    }

    for row in rows.iter() {
        scene.push(Node::leaf(
            NodeKind::RowStrip { index: row.index },
            Rect::from_min_size(
                pos2(layout.label_width, row.top),
                vec2(layout.drawable_width, layout.row_height),
            ),
        ));
    }

    scene.push(Node::leaf(
        NodeKind::LabelPanel,
        Rect::from_min_size(pos2(0.0, 0.0), vec2(layout.label_width, config.height)),
    ));
}

/// Replace whatever is drawn for `task` with a fresh strip, label and box.
pub fn render_task(scene: &mut Scene, config: &ChartConfig, layout: &Layout, task: &Task) {
    scene.remove_task(&task.id);

    let label = Node::leaf(
        NodeKind::TaskLabel {
            id: task.id.clone(),
            text: task.title.clone(),
        },
        Rect::from_min_size(
            pos2(0.0, 0.0),
            vec2((layout.label_width - LABEL_GUTTER).max(0.0), layout.row_height),
        ),
    );
    let task_box = Node::leaf(
        NodeKind::TaskBox {
            id: task.id.clone(),
        },
        Rect::from_min_size(pos2(task.x, 0.0), vec2(task.width, layout.row_height)),
    );

    scene.push(Node {
        kind: NodeKind::TaskStrip {
            id: task.id.clone(),
        },
        rect: Rect::from_min_size(pos2(0.0, task.y), vec2(config.width, layout.row_height)),
        children: vec![label, task_box],
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::DEFAULT_TITLE;
    use crate::model::TaskId;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn setup() -> (ChartConfig, Layout, RowTable) {
        let config = ChartConfig::default();
        let layout = Layout::new(&config);
        let rows = RowTable::new(config.max_rows, layout.row_height);
        (config, layout, rows)
    }

    fn task(id: &str, row: usize, x: f32) -> Task {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Task {
            id: TaskId::from(id),
            title: DEFAULT_TITLE.to_string(),
            start_date: date,
            end_date: date,
            x,
            y: row as f32 * 50.0,
            width: 40.0,
            row,
        }
    }

    fn count(scene: &Scene, pred: impl Fn(&NodeKind) -> bool) -> usize {
        scene.nodes().iter().filter(|n| pred(&n.kind)).count()
    }

    #[test]
    fn grid_has_lines_rows_and_label_panel() {
        let (config, layout, rows) = setup();
        let mut scene = Scene::new();
        render_container(&mut scene, &config);
        render_grid(&mut scene, &config, &layout, &rows);

        assert_eq!(scene.size(), vec2(800.0, 500.0));
        assert_eq!(count(&scene, |k| *k == NodeKind::Gridline), 4);
        assert_eq!(count(&scene, |k| matches!(k, NodeKind::RowStrip { .. })), 10);
        assert_eq!(count(&scene, |k| *k == NodeKind::LabelPanel), 1);

        let third_row = scene
            .nodes()
            .iter()
            .find(|n| n.kind == NodeKind::RowStrip { index: 2 })
            .unwrap();
        assert_eq!(
            third_row.rect,
            Rect::from_min_size(pos2(200.0, 100.0), vec2(600.0, 50.0))
        );
    }

    #[test]
    fn container_render_is_a_full_reset() {
        let (config, layout, rows) = setup();
        let mut scene = Scene::new();
        for _ in 0..3 {
            render_container(&mut scene, &config);
            render_grid(&mut scene, &config, &layout, &rows);
        }
        assert_eq!(scene.nodes().len(), 4 + 10 + 1);
    }

    #[test]
    fn task_subtree_geometry() {
        let (config, layout, _) = setup();
        let mut scene = Scene::new();
        render_container(&mut scene, &config);
        render_task(&mut scene, &config, &layout, &task("abc", 2, 280.0));

        let strip = &scene.nodes()[0];
        assert_eq!(
            strip.rect,
            Rect::from_min_size(pos2(0.0, 100.0), vec2(800.0, 50.0))
        );
        assert_eq!(
            strip.children,
            vec![
                Node::leaf(
                    NodeKind::TaskLabel {
                        id: TaskId::from("abc"),
                        text: DEFAULT_TITLE.to_string(),
                    },
                    Rect::from_min_size(pos2(0.0, 0.0), vec2(190.0, 50.0)),
                ),
                Node::leaf(
                    NodeKind::TaskBox {
                        id: TaskId::from("abc"),
                    },
                    Rect::from_min_size(pos2(280.0, 0.0), vec2(40.0, 50.0)),
                ),
            ]
        );
    }

    #[test]
    fn rerendering_a_task_leaves_one_subtree() {
        let (config, layout, _) = setup();
        let mut scene = Scene::new();
        let mut t = task("abc", 0, 300.0);
        render_task(&mut scene, &config, &layout, &t);
        t.title = "Renamed".into();
        render_task(&mut scene, &config, &layout, &t);
        render_task(&mut scene, &config, &layout, &task("other", 1, 300.0));

        assert_eq!(scene.task_subtrees(&TaskId::from("abc")), 1);
        assert_eq!(scene.task_subtrees(&TaskId::from("other")), 1);
    }

    #[test]
    fn hit_test_prefers_task_parts_over_rows() {
        let (config, layout, rows) = setup();
        let mut scene = Scene::new();
        render_container(&mut scene, &config);
        render_grid(&mut scene, &config, &layout, &rows);
        render_task(&mut scene, &config, &layout, &task("abc", 2, 280.0));

        let id = TaskId::from("abc");
        assert_eq!(scene.hit_test(pos2(300.0, 125.0)), Hit::Task { id: id.clone() });
        assert_eq!(scene.hit_test(pos2(50.0, 120.0)), Hit::Task { id });
        // Same row but away from the box falls through to the strip below.
        assert_eq!(scene.hit_test(pos2(600.0, 125.0)), Hit::Row { index: 2 });
        assert_eq!(scene.hit_test(pos2(600.0, 375.0)), Hit::Row { index: 7 });
        // Label column of an empty row.
        assert_eq!(scene.hit_test(pos2(50.0, 20.0)), Hit::None);
        assert_eq!(scene.hit_test(pos2(900.0, 20.0)), Hit::None);
    }
}
