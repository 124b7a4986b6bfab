use chrono::NaiveDate;
use egui::Pos2;

use super::config::ChartConfig;
use super::error::{ChartError, ChartResult};
use super::layout::Layout;
use super::row::RowTable;
use super::store::TaskStore;
use super::task::{Task, TaskEdit, TaskId};
use crate::render::{self, Hit, Scene};

/// Outcome of [`Chart::add_task`].
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Created(TaskId),
    /// The row was already taken; the editor opened for its task instead.
    Existing(TaskId),
}

/// Outcome of a click on the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    Created(TaskId),
    Opened(TaskId),
    Ignored,
}

/// A Gantt chart instance: configuration, rows, tasks and their drawn scene.
#[derive(Debug)]
pub struct Chart {
    config: ChartConfig,
    layout: Layout,
    rows: RowTable,
    store: TaskStore,
    scene: Scene,
    /// Task shown in the editor. The editor itself is reused across tasks.
    editing: Option<TaskId>,
}

impl Chart {
    /// Validate `config` and draw an empty chart.
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let layout = Layout::new(&config);
        let rows = RowTable::new(config.max_rows, layout.row_height);

        let mut chart = Self {
            config,
            layout,
            rows,
            store: TaskStore::new(),
            scene: Scene::new(),
            editing: None,
        };
        chart.draw();
        tracing::info!(
            width = chart.config.width,
            height = chart.config.height,
            rows = chart.config.max_rows,
            "chart ready"
        );
        Ok(chart)
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn rows(&self) -> &RowTable {
        &self.rows
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn task_count(&self) -> usize {
        self.store.len()
    }

    pub fn get(&self, id: &TaskId) -> ChartResult<&Task> {
        self.store.get(id)
    }

    /// Task currently open in the editor.
    pub fn editing(&self) -> Option<&TaskId> {
        self.editing.as_ref()
    }

    /// Full redraw. Discards every node, so only used when building the chart.
    fn draw(&mut self) {
        render::render_container(&mut self.scene, &self.config);
        render::render_grid(&mut self.scene, &self.config, &self.layout, &self.rows);
        for task in self.store.tasks_by_row() {
            render::render_task(&mut self.scene, &self.config, &self.layout, task);
        }
        self.store.take_stale();
    }

    /// Redraw every task whose record changed since its last render.
    fn render_stale(&mut self) -> ChartResult<()> {
        for id in self.store.take_stale() {
            let task = self.store.get(&id)?;
            render::render_task(&mut self.scene, &self.config, &self.layout, task);
        }
        Ok(())
    }

    /// Dispatch a click at `pos`, given in surface coordinates.
    pub fn click(&mut self, pos: Pos2) -> ChartResult<ClickOutcome> {
        match self.scene.hit_test(pos) {
            Hit::Row { index } => Ok(match self.add_task(index, pos)? {
                AddOutcome::Created(id) => ClickOutcome::Created(id),
                AddOutcome::Existing(id) => ClickOutcome::Opened(id),
            }),
            Hit::Task { id } => {
                self.edit_task(&id)?;
                Ok(ClickOutcome::Opened(id))
            }
            Hit::None => Ok(ClickOutcome::Ignored),
        }
    }

    /// Create a task in `row_index` around `pointer.x` and open it in the
    /// editor. An occupied row opens its existing task instead.
    pub fn add_task(&mut self, row_index: usize, pointer: Pos2) -> ChartResult<AddOutcome> {
        self.add_task_on(row_index, pointer, chrono::Local::now().date_naive())
    }

    fn add_task_on(
        &mut self,
        row_index: usize,
        pointer: Pos2,
        today: NaiveDate,
    ) -> ChartResult<AddOutcome> {
        let created = self.store.create(
            &mut self.rows,
            &self.config,
            &self.layout,
            row_index,
            pointer.x,
            today,
        );
        match created {
            Ok(id) => {
                tracing::debug!(row = row_index, y = pointer.y, "task added from pointer");
                self.render_stale()?;
                self.edit_task(&id)?;
                Ok(AddOutcome::Created(id))
            }
            Err(ChartError::RowOccupied(_)) => {
                let existing = self
                    .rows
                    .row_at(row_index)?
                    .task
                    .clone()
                    .ok_or(ChartError::RowOccupied(row_index))?;
                self.edit_task(&existing)?;
                Ok(AddOutcome::Existing(existing))
            }
            Err(err) => Err(err),
        }
    }

    /// Open the editor on `id`.
    pub fn edit_task(&mut self, id: &TaskId) -> ChartResult<&Task> {
        if !self.store.contains(id) {
            return Err(ChartError::TaskNotFound(id.clone()));
        }
        self.editing = Some(id.clone());
        self.store.get(id)
    }

    /// Hide the editor. Edits were applied as they happened, so nothing is
    /// committed or rolled back here.
    pub fn close_editor(&mut self) {
        self.editing = None;
    }

    /// Apply one field edit and redraw the task.
    pub fn update_task(&mut self, id: &TaskId, edit: TaskEdit) -> ChartResult<()> {
        self.store.update(id, edit)?;
        self.render_stale()
    }

    pub fn export_png(&self) -> ChartResult<()> {
        tracing::warn!("PNG export requested but not available");
        Err(ChartError::Unsupported("PNG export"))
    }

    pub fn save(&self) -> ChartResult<()> {
        tracing::warn!("save requested but not available");
        Err(ChartError::Unsupported("saving"))
    }

    pub fn load(&mut self) -> ChartResult<()> {
        tracing::warn!("load requested but not available");
        Err(ChartError::Unsupported("loading"))
    }
}
