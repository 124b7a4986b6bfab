use std::collections::{BTreeSet, HashMap};

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use super::config::ChartConfig;
use super::error::{ChartError, ChartResult};
use super::layout::Layout;
use super::row::RowTable;
use super::task::{Task, TaskEdit, TaskId, DEFAULT_TASK_DAYS, DEFAULT_TITLE};

/// Number of base-36 digits in a generated task id.
const ID_LEN: usize = 6;

/// Owns every task of a chart, keyed by id.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: HashMap<TaskId, Task>,
    /// Tasks whose visuals no longer match their record.
    stale: BTreeSet<TaskId>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn get(&self, id: &TaskId) -> ChartResult<&Task> {
        self.tasks
            .get(id)
            .ok_or_else(|| ChartError::TaskNotFound(id.clone()))
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.tasks.contains_key(id)
    }

    /// Tasks ordered by row, top to bottom.
    pub fn tasks_by_row(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.values().collect();
        tasks.sort_by_key(|t| t.row);
        tasks
    }

    /// Create a task in an empty row, centred on `pointer_x`.
    ///
    /// The box is `width / 20` pixels wide and never starts inside the label
    /// column. The new task is linked to its row and marked stale.
    pub fn create(
        &mut self,
        rows: &mut RowTable,
        config: &ChartConfig,
        layout: &Layout,
        row_index: usize,
        pointer_x: f32,
        today: NaiveDate,
    ) -> ChartResult<TaskId> {
        let row = rows.row_at(row_index)?;
        if row.task.is_some() {
            return Err(ChartError::RowOccupied(row_index));
        }
        let top = row.top;

        let width = (config.width / 20.0).floor();
        let x = (pointer_x - width / 2.0).max(layout.label_width);
        let id = self.fresh_id();

        rows.assign(row_index, id.clone())?;
        self.tasks.insert(
            id.clone(),
            Task {
                id: id.clone(),
                title: DEFAULT_TITLE.to_string(),
                start_date: today,
                end_date: today + Duration::days(DEFAULT_TASK_DAYS),
                x,
                y: top,
                width,
                row: row_index,
            },
        );
        self.stale.insert(id.clone());

        tracing::debug!(task = %id, row = row_index, x, "created task");
        Ok(id)
    }

    /// Change one field of a task and mark it stale.
    pub fn update(&mut self, id: &TaskId, edit: TaskEdit) -> ChartResult<()> {
        let task = self
            .tasks
            .get_mut(id)
            .ok_or_else(|| ChartError::TaskNotFound(id.clone()))?;
        tracing::trace!(task = %id, field = edit.field(), "updating task");
        edit.apply(task);
        self.stale.insert(id.clone());
        Ok(())
    }

    /// Drain the ids whose visuals must be redrawn.
    pub fn take_stale(&mut self) -> Vec<TaskId> {
        std::mem::take(&mut self.stale).into_iter().collect()
    }

    fn fresh_id(&self) -> TaskId {
        self.fresh_id_with(random_token)
    }

    /// Sample ids until one is unused.
    pub(crate) fn fresh_id_with(&self, mut sample: impl FnMut() -> String) -> TaskId {
        loop {
            let id = TaskId::from(sample());
            if !self.tasks.contains_key(&id) {
                return id;
            }
        }
    }
}

fn random_token() -> String {
    let mut bits = Uuid::new_v4().as_u128();
    let mut token = String::with_capacity(ID_LEN);
    for _ in 0..ID_LEN {
        let digit = (bits % 36) as u32;
        bits /= 36;
        token.push(char::from_digit(digit, 36).unwrap_or('0'));
    }
    token
}
