pub mod chart_view;
pub mod task_editor;
pub mod theme;
pub mod toolbar;
