//! Demo Content
//!
//! The four documents served by the demo data server. Built-in values
//! describe a mid-size municipal plant; a JSON file with the same layout
//! can replace them.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ApiError, ApiResult};
use crate::model::{DescriptiveInfo, Problem, SeriesData, Solution, StatusData};

/// Everything the data routes serve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoContent {
    pub info: DescriptiveInfo,
    pub energy: SeriesData,
    pub quality: SeriesData,
    pub status: StatusData,
}

impl Default for DemoContent {
    fn default() -> Self {
        let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

        Self {
            info: DescriptiveInfo {
                context: "Water treatment plants spend up to 40% of their operating budget on \
                          energy, yet most still run on manual readings and monthly reports."
                    .to_string(),
                problem: Problem {
                    owners: "Plant owners see energy bills and compliance issues only after \
                             the fact, with no way to act on them in time."
                        .to_string(),
                    vendors: "Equipment vendors ship pumps and dosing units without telemetry, \
                              so maintenance is scheduled blind."
                        .to_string(),
                },
                solution: Solution {
                    modules: "Retrofit sensor modules for flow, pressure, turbidity and power \
                              draw on existing equipment."
                        .to_string(),
                    ai: "Models forecast energy demand and flag water quality drift before \
                         limits are crossed."
                        .to_string(),
                    dashboard: "One dashboard for operators, managers and regulators with live \
                                status of every unit."
                        .to_string(),
                },
                business_model: "Hardware at cost, monitoring as a per-plant monthly \
                                 subscription, analytics tiers on top."
                    .to_string(),
            },
            energy: SeriesData::new(
                months.iter().map(|m| m.to_string()).collect(),
                vec![1250.0, 1180.0, 1320.0, 1105.0, 990.0, 940.0],
                Some("kWh".to_string()),
            ),
            quality: SeriesData::new(
                months.iter().map(|m| m.to_string()).collect(),
                vec![92.0, 94.5, 91.0, 96.0, 97.5, 98.0],
                Some("% compliance".to_string()),
            ),
            status: StatusData::new(
                vec![
                    "Operational".to_string(),
                    "Maintenance".to_string(),
                    "Fault".to_string(),
                ],
                vec![18.0, 3.0, 1.0],
            ),
        }
    }
}

impl DemoContent {
    /// Load content from a JSON file
    pub fn load(path: &Path) -> ApiResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let content: DemoContent = serde_json::from_str(&raw)
            .map_err(|e| ApiError::InvalidContent(format!("{}: {}", path.display(), e)))?;
        content.validate()?;
        Ok(content)
    }

    /// Every series must pair labels and values one to one
    pub fn validate(&self) -> ApiResult<()> {
        let series = [
            ("energy", self.energy.labels.len(), self.energy.data.len()),
            ("quality", self.quality.labels.len(), self.quality.data.len()),
            ("status", self.status.labels.len(), self.status.data.len()),
        ];

        for (name, labels, values) in series {
            if labels != values {
                return Err(ApiError::InvalidContent(format!(
                    "{}: {} labels but {} values",
                    name, labels, values
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_is_valid() {
        assert!(DemoContent::default().validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");

        let mut content = DemoContent::default();
        content.status = StatusData::new(vec!["Online".to_string()], vec![5.0]);
        std::fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();

        assert_eq!(DemoContent::load(&path).unwrap(), content);
    }

    #[test]
    fn test_load_rejects_mismatched_series() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");

        let mut content = DemoContent::default();
        content.energy.data.pop();
        std::fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();

        let err = DemoContent::load(&path).unwrap_err();
        assert!(err.to_string().contains("energy"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = DemoContent::load(Path::new("/nonexistent/content.json")).unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }
}
