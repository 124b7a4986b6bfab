pub mod chart;
pub mod config;
pub mod error;
pub mod layout;
pub mod row;
pub mod store;
pub mod task;

pub use chart::{Chart, ClickOutcome};
pub use config::ChartConfig;
pub use error::{ChartError, ChartResult};
pub use layout::Layout;
pub use row::RowTable;
pub use task::{date_edits, Task, TaskEdit, TaskId};
