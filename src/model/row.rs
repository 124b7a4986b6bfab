use super::error::{ChartError, ChartResult};
use super::task::TaskId;

/// One horizontal lane of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub index: usize,
    /// Top edge in surface pixels.
    pub top: f32,
    /// The task living in this row, if any. The store owns the task itself.
    pub task: Option<TaskId>,
}

/// Fixed-size table of rows. Rows are never added or removed after construction.
#[derive(Debug, Clone)]
pub struct RowTable {
    rows: Vec<Row>,
}

impl RowTable {
    pub fn new(max_rows: usize, row_height: f32) -> Self {
        let rows = (0..max_rows)
            .map(|index| Row {
                index,
                top: index as f32 * row_height,
                task: None,
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn row_at(&self, index: usize) -> ChartResult<&Row> {
        self.rows.get(index).ok_or(ChartError::RowOutOfRange {
            index,
            rows: self.rows.len(),
        })
    }

    /// Link `task` to the row. Fails with `RowOccupied` if the row already has one.
    pub fn assign(&mut self, index: usize, task: TaskId) -> ChartResult<()> {
        let rows = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(ChartError::RowOutOfRange { index, rows })?;
        if row.task.is_some() {
            return Err(ChartError::RowOccupied(index));
        }
        row.task = Some(task);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn rows_start_empty_with_stacked_tops() {
        let table = RowTable::new(3, 50.0);
        let rows: Vec<Row> = table.iter().cloned().collect();
        assert_eq!(
            rows,
            vec![
                Row { index: 0, top: 0.0, task: None },
                Row { index: 1, top: 50.0, task: None },
                Row { index: 2, top: 100.0, task: None },
            ]
        );
    }

    #[test]
    fn assign_refuses_an_occupied_row() {
        let mut table = RowTable::new(2, 10.0);
        table.assign(1, TaskId::from("first")).unwrap();

        let err = table.assign(1, TaskId::from("second")).unwrap_err();
        assert_eq!(err, ChartError::RowOccupied(1));
        assert_eq!(table.row_at(1).unwrap().task, Some(TaskId::from("first")));
    }

    #[test]
    fn row_at_is_bounds_checked() {
        let table = RowTable::new(2, 10.0);
        assert_eq!(
            table.row_at(2).unwrap_err(),
            ChartError::RowOutOfRange { index: 2, rows: 2 }
        );
    }

    proptest! {
        #[test]
        fn exactly_max_rows_exist_and_are_empty(max_rows in 1usize..500) {
            let table = RowTable::new(max_rows, 7.5);
            prop_assert_eq!(table.len(), max_rows);
            prop_assert!(table.iter().all(|r| r.task.is_none()));
            prop_assert!(table.iter().enumerate().all(|(i, r)| r.index == i));
        }
    }
}
