//! Data Model
//!
//! JSON documents served by the backend and consumed as-is by the page.
//! Shapes mirror the four GET endpoints one to one.

use serde::{Deserialize, Serialize};

/// Marketing copy shown in the page's text sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveInfo {
    pub context: String,
    pub problem: Problem,
    pub solution: Solution,
    pub business_model: String,
}

/// Who suffers from the status quo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub owners: String,
    pub vendors: String,
}

/// What the product brings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub modules: String,
    pub ai: String,
    pub dashboard: String,
}

/// Labelled numeric series with a unit (energy, quality)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Labelled numeric breakdown without a unit (plant status)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusData {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl SeriesData {
    pub fn new(labels: Vec<String>, data: Vec<f64>, unit: Option<String>) -> Self {
        Self { labels, data, unit }
    }

    /// Unit text, empty when the backend sent none
    pub fn unit_label(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }
}

impl StatusData {
    pub fn new(labels: Vec<String>, data: Vec<f64>) -> Self {
        Self { labels, data }
    }

    /// Sum of all slices
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// Everything the page fetches, each part independently optional
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardData {
    pub info: Option<DescriptiveInfo>,
    pub energy: Option<SeriesData>,
    pub quality: Option<SeriesData>,
    pub status: Option<StatusData>,
}

impl DashboardData {
    /// Number of sections that arrived
    pub fn loaded_count(&self) -> usize {
        [
            self.info.is_some(),
            self.energy.is_some(),
            self.quality.is_some(),
            self.status.is_some(),
        ]
        .iter()
        .filter(|loaded| **loaded)
        .count()
    }

    pub fn is_complete(&self) -> bool {
        self.loaded_count() == 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_info() {
        let json = r#"{
            "context": "Plants run blind",
            "problem": {"owners": "High bills", "vendors": "No telemetry"},
            "solution": {"modules": "Sensors", "ai": "Forecasts", "dashboard": "One view"},
            "business_model": "Subscription"
        }"#;

        let info: DescriptiveInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.problem.vendors, "No telemetry");
        assert_eq!(info.solution.ai, "Forecasts");
        assert_eq!(info.business_model, "Subscription");
    }

    #[test]
    fn test_decode_series_without_unit() {
        let series: SeriesData =
            serde_json::from_str(r#"{"labels": ["Jan"], "data": [1.5]}"#).unwrap();
        assert_eq!(series.unit, None);
        assert_eq!(series.unit_label(), "");
    }

    #[test]
    fn test_decode_status_rejects_missing_data() {
        let result: Result<StatusData, _> = serde_json::from_str(r#"{"labels": ["Ok"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_dashboard_loaded_count() {
        let mut data = DashboardData::default();
        assert_eq!(data.loaded_count(), 0);

        data.status = Some(StatusData::new(vec!["Ok".into()], vec![3.0]));
        assert_eq!(data.loaded_count(), 1);
        assert!(!data.is_complete());
        assert_eq!(data.status.as_ref().map(StatusData::total), Some(3.0));
    }

    #[test]
    fn test_dashboard_complete_needs_all_four() {
        let series = SeriesData::new(vec!["Jan".into()], vec![1.0], Some("kWh".into()));
        let mut data = DashboardData {
            info: None,
            energy: Some(series.clone()),
            quality: Some(series),
            status: Some(StatusData::new(vec!["Ok".into()], vec![1.0])),
        };
        assert!(!data.is_complete());

        data.info = Some(DescriptiveInfo {
            context: "c".into(),
            problem: Problem {
                owners: "o".into(),
                vendors: "v".into(),
            },
            solution: Solution {
                modules: "m".into(),
                ai: "a".into(),
                dashboard: "d".into(),
            },
            business_model: "b".into(),
        });
        assert!(data.is_complete());
    }
}
