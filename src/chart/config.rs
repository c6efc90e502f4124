//! Chart Configuration
//!
//! A backend-neutral description of one chart: kind, labels, a single
//! dataset and display options. The three dashboard charts share fixed
//! styling defined here.

use serde::{Deserialize, Serialize};

use super::error::ChartError;
use crate::model::{SeriesData, StatusData};

/// Energy line color (sky blue)
pub const ENERGY_COLOR: &str = "#0EA5E9";
/// Energy area fill under the line
pub const ENERGY_FILL: &str = "rgba(14, 165, 233, 0.2)";
/// Quality bar color (teal)
pub const QUALITY_COLOR: &str = "#14B8A6";
/// Quality bar fill
pub const QUALITY_FILL: &str = "rgba(20, 184, 166, 0.6)";

/// Doughnut slice colors, cycled when there are more slices than colors
pub const STATUS_COLORS: [&str; 5] = [
    "#22C55E", // Green (operational)
    "#F59E0B", // Amber (maintenance)
    "#EF4444", // Red (fault)
    "#6366F1", // Indigo
    "#94A3B8", // Slate
];

/// Line smoothing for the energy chart
const LINE_TENSION: f64 = 0.35;

/// Kind of chart drawn on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
}

/// Where the legend sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

/// One series of values with its styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Legend text
    pub label: String,
    pub data: Vec<f64>,
    /// One color for the whole series, or one per value (doughnut)
    pub background_color: Vec<String>,
    pub border_color: String,
    pub border_width: f64,
    /// Fill the area under a line
    pub fill: bool,
    /// Bezier smoothing, 0 draws straight segments
    pub tension: f64,
}

/// Display options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    /// Resize with the container
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    /// Value axis starts at zero (ignored by doughnuts)
    pub begin_at_zero: bool,
    pub legend: LegendPosition,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            begin_at_zero: true,
            legend: LegendPosition::Top,
        }
    }
}

/// Complete chart description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub dataset: Dataset,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Line chart of energy consumption
    pub fn energy(series: &SeriesData) -> Result<Self, ChartError> {
        check_lengths(&series.labels, &series.data)?;

        Ok(Self {
            kind: ChartKind::Line,
            labels: series.labels.clone(),
            dataset: Dataset {
                label: with_unit("Energy consumption", series.unit_label()),
                data: series.data.clone(),
                background_color: vec![ENERGY_FILL.to_string()],
                border_color: ENERGY_COLOR.to_string(),
                border_width: 2.0,
                fill: true,
                tension: LINE_TENSION,
            },
            options: ChartOptions::default(),
        })
    }

    /// Bar chart of water quality readings
    pub fn quality(series: &SeriesData) -> Result<Self, ChartError> {
        check_lengths(&series.labels, &series.data)?;

        Ok(Self {
            kind: ChartKind::Bar,
            labels: series.labels.clone(),
            dataset: Dataset {
                label: with_unit("Water quality", series.unit_label()),
                data: series.data.clone(),
                background_color: vec![QUALITY_FILL.to_string()],
                border_color: QUALITY_COLOR.to_string(),
                border_width: 1.0,
                fill: false,
                tension: 0.0,
            },
            options: ChartOptions::default(),
        })
    }

    /// Doughnut of plant status shares
    pub fn status(status: &StatusData) -> Result<Self, ChartError> {
        check_lengths(&status.labels, &status.data)?;

        let background_color = (0..status.data.len())
            .map(|idx| STATUS_COLORS[idx % STATUS_COLORS.len()].to_string())
            .collect();

        Ok(Self {
            kind: ChartKind::Doughnut,
            labels: status.labels.clone(),
            dataset: Dataset {
                label: "Plant status".to_string(),
                data: status.data.clone(),
                background_color,
                border_color: "#FFFFFF".to_string(),
                border_width: 2.0,
                fill: false,
                tension: 0.0,
            },
            options: ChartOptions {
                begin_at_zero: false,
                legend: LegendPosition::Bottom,
                ..ChartOptions::default()
            },
        })
    }

    /// Color for the value at `idx`
    pub fn color_at(&self, idx: usize) -> &str {
        let colors = &self.dataset.background_color;
        if colors.is_empty() {
            &self.dataset.border_color
        } else {
            &colors[idx % colors.len()]
        }
    }

    /// Largest value, at least zero
    pub fn max_value(&self) -> f64 {
        self.dataset.data.iter().copied().fold(0.0, f64::max)
    }
}

fn check_lengths(labels: &[String], values: &[f64]) -> Result<(), ChartError> {
    if labels.len() != values.len() {
        return Err(ChartError::LengthMismatch {
            labels: labels.len(),
            values: values.len(),
        });
    }
    Ok(())
}

fn with_unit(title: &str, unit: &str) -> String {
    if unit.is_empty() {
        title.to_string()
    } else {
        format!("{} ({})", title, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(labels: &[&str], data: &[f64], unit: Option<&str>) -> SeriesData {
        SeriesData::new(
            labels.iter().map(|l| l.to_string()).collect(),
            data.to_vec(),
            unit.map(str::to_string),
        )
    }

    #[test]
    fn test_energy_config() {
        let config = ChartConfig::energy(&series(&["Jan", "Feb"], &[10.0, 20.0], Some("kWh"))).unwrap();

        assert_eq!(config.kind, ChartKind::Line);
        assert_eq!(config.dataset.data, vec![10.0, 20.0]);
        assert!(config.dataset.label.contains("kWh"));
        assert!(config.dataset.fill);
        assert!(config.options.begin_at_zero);
        assert!(config.options.responsive);
    }

    #[test]
    fn test_quality_config_without_unit() {
        let config = ChartConfig::quality(&series(&["pH", "Turbidity"], &[7.2, 0.4], None)).unwrap();

        assert_eq!(config.kind, ChartKind::Bar);
        assert_eq!(config.dataset.label, "Water quality");
        assert_eq!(config.max_value(), 7.2);
    }

    #[test]
    fn test_status_colors_cycle() {
        let labels: Vec<String> = (0..7).map(|i| format!("Unit {}", i)).collect();
        let status = StatusData::new(labels, vec![1.0; 7]);
        let config = ChartConfig::status(&status).unwrap();

        assert_eq!(config.kind, ChartKind::Doughnut);
        assert_eq!(config.dataset.background_color.len(), 7);
        assert_eq!(config.color_at(5), STATUS_COLORS[0]);
        assert_eq!(config.options.legend, LegendPosition::Bottom);
        assert!(!config.options.begin_at_zero);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = ChartConfig::energy(&series(&["Jan", "Feb", "Mar"], &[1.0], None)).unwrap_err();
        assert_eq!(
            err,
            ChartError::LengthMismatch {
                labels: 3,
                values: 1
            }
        );

        let status = StatusData::new(vec![], vec![1.0]);
        assert!(ChartConfig::status(&status).is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let config = ChartConfig::energy(&series(&["Jan"], &[5.0], Some("kWh"))).unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["type"], "line");
        assert_eq!(json["dataset"]["borderColor"], ENERGY_COLOR);
        assert_eq!(json["options"]["beginAtZero"], true);
        assert_eq!(json["options"]["legend"], "top");
    }

    #[test]
    fn test_max_value_never_negative() {
        let config = ChartConfig::quality(&series(&["a", "b"], &[-3.0, -1.0], None)).unwrap();
        assert_eq!(config.max_value(), 0.0);
    }
}
