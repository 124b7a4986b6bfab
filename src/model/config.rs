use serde::{Deserialize, Deserializer, Serialize};

use super::error::{ChartError, ChartResult};

/// Per-instance chart configuration. Immutable once a chart is built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Surface width in pixels. Accepts `800` or `"800px"`.
    #[serde(deserialize_with = "pixels")]
    pub width: f32,
    /// Surface height in pixels.
    #[serde(deserialize_with = "pixels")]
    pub height: f32,
    pub max_rows: usize,
    /// Width of the label column reserved on the left.
    #[serde(deserialize_with = "pixels")]
    pub label_width: f32,
    pub gridline_count: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            max_rows: 10,
            label_width: 200.0,
            gridline_count: 5,
        }
    }
}

impl ChartConfig {
    /// Check the invariants a chart relies on.
    pub fn validate(&self) -> ChartResult<()> {
        let invalid = |msg: String| Err(ChartError::InvalidConfiguration(msg));

        if !(self.width.is_finite() && self.width > 0.0) {
            return invalid(format!("width must be positive, got {}", self.width));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return invalid(format!("height must be positive, got {}", self.height));
        }
        if self.max_rows == 0 {
            return invalid("max_rows must be at least 1".to_string());
        }
        if !(self.label_width.is_finite() && self.label_width >= 0.0) {
            return invalid(format!(
                "label_width must not be negative, got {}",
                self.label_width
            ));
        }
        if self.label_width >= self.width {
            return invalid(format!(
                "label_width ({}) must be smaller than width ({})",
                self.label_width, self.width
            ));
        }
        if self.gridline_count == 0 {
            return invalid("gridline_count must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Parse a pixel extent given either as a number or as a string such as `"800px"`.
pub fn parse_pixels(raw: &str) -> Option<f32> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    number.parse::<f32>().ok().filter(|v| v.is_finite())
}

fn pixels<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => parse_pixels(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid pixel value '{}'", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_valid() {
        let config = ChartConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_rows, 10);
        assert_eq!(config.label_width, 200.0);
        assert_eq!(config.gridline_count, 5);
    }

    #[test]
    fn parse_pixels_accepts_suffix_and_plain_numbers() {
        assert_eq!(parse_pixels("800px"), Some(800.0));
        assert_eq!(parse_pixels(" 500 "), Some(500.0));
        assert_eq!(parse_pixels("12.5px"), Some(12.5));
        assert_eq!(parse_pixels("wide"), None);
        assert_eq!(parse_pixels("px"), None);
    }

    #[test]
    fn deserializes_mixed_pixel_forms_with_defaults() {
        let config: ChartConfig =
            serde_json::from_str(r#"{ "width": "1000px", "height": 600 }"#).unwrap();
        assert_eq!(
            config,
            ChartConfig {
                width: 1000.0,
                height: 600.0,
                ..ChartConfig::default()
            }
        );
    }

    #[test]
    fn rejects_garbage_pixel_string() {
        let result = serde_json::from_str::<ChartConfig>(r#"{ "width": "lots" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn label_column_must_fit_inside_width() {
        let config = ChartConfig {
            width: 200.0,
            ..ChartConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ChartError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn zero_rows_is_rejected() {
        let config = ChartConfig {
            max_rows: 0,
            ..ChartConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_gridlines_is_rejected() {
        let config = ChartConfig {
            gridline_count: 0,
            ..ChartConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
