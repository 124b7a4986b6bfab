use super::config::ChartConfig;

/// Geometry derived once from a [`ChartConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub row_height: f32,
    pub label_width: f32,
    /// Width right of the label column.
    pub drawable_width: f32,
    /// X positions of the vertical date lines, truncated to whole pixels.
    pub gridlines: Vec<f32>,
}

impl Layout {
    pub fn new(config: &ChartConfig) -> Self {
        let row_height = config.height / config.max_rows as f32;
        let drawable_width = config.width - config.label_width;
        let distance = drawable_width / config.gridline_count as f32;

        let gridlines = (1..config.gridline_count)
            .map(|i| (config.label_width + i as f32 * distance).trunc())
            .collect();

        Self {
            row_height,
            label_width: config.label_width,
            drawable_width,
            gridlines,
        }
    }
}
