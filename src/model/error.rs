//! Error types for the chart model.

use thiserror::Error;

use super::task::TaskId;

/// Result type for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;

/// Everything that can go wrong while building or driving a chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The configuration cannot produce a drawable chart.
    #[error("invalid chart configuration: {0}")]
    InvalidConfiguration(String),

    /// The row already holds a task. Callers route this to the editor.
    #[error("row {0} already holds a task")]
    RowOccupied(usize),

    /// A row index outside the fixed row table.
    #[error("row {index} is out of range (chart has {rows} rows)")]
    RowOutOfRange { index: usize, rows: usize },

    /// A task id that the store does not know about.
    #[error("task '{0}' not found")]
    TaskNotFound(TaskId),

    /// Operation exposed on the chart but not available.
    #[error("{0} is not supported")]
    Unsupported(&'static str),
}
