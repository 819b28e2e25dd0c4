//! Showcase Configuration Module
//! Page content and timings, with built-in defaults and an optional JSON
//! override file. Fields missing from the file keep their default values.

use crate::charts::Series;
use crate::simulator::StatCounter;
use crate::site::PricingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub simulator: SimulatorConfig,
    pub carousel: CarouselConfig,
    pub timing: TimingConfig,
    pub pricing: PricingConfig,
}

impl ShowcaseConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabConfig {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatConfig {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub tabs: Vec<TabConfig>,
    pub stats: Vec<StatConfig>,
    /// `null` removes the dashboard chart surface
    pub chart: Option<Series>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        let tab = |id: &str, title: &str, active: bool| TabConfig {
            id: id.to_string(),
            title: title.to_string(),
            active,
        };
        let stat = |label: &str, value: &str| StatConfig {
            label: label.to_string(),
            value: value.to_string(),
        };

        Self {
            tabs: vec![
                tab("dashboard", "Dashboard", true),
                tab("inventory", "Inventory", false),
                tab("sales", "Sales", false),
                tab("customers", "Customers", false),
                tab("reports", "Reports", false),
            ],
            stats: vec![
                stat("Today's Sales", "$2,847"),
                stat("Orders", "156"),
                stat("Conversion", "45%"),
                stat("Rating", "4.8 / 5"),
            ],
            chart: Some(Series::dashboard_sample()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideConfig {
    pub title: String,
    pub caption: String,
}

/// Hoverable description next to the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureConfig {
    pub title: String,
    pub description: String,
    /// Slide index as written in the page markup; unparseable values are
    /// not wired to any slide
    pub feature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub slides: Vec<SlideConfig>,
    pub features: Vec<FeatureConfig>,
    /// Chart on slide 0; `null` removes the surface
    pub chart: Option<Series>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let entries = [
            (
                "Real-time Dashboard",
                "Track sales, orders and trends as they happen.",
            ),
            (
                "Inventory Management",
                "Know what is on the shelf and what needs reordering.",
            ),
            (
                "Compliance Tracking",
                "Keep every sale inside the regulatory limits automatically.",
            ),
            (
                "Customer Insights",
                "Understand buying habits and reward loyal customers.",
            ),
        ];

        Self {
            slides: entries
                .iter()
                .map(|(title, caption)| SlideConfig {
                    title: title.to_string(),
                    caption: caption.to_string(),
                })
                .collect(),
            features: entries
                .iter()
                .enumerate()
                .map(|(i, (title, caption))| FeatureConfig {
                    title: title.to_string(),
                    description: caption.to_string(),
                    feature: i.to_string(),
                })
                .collect(),
            chart: Some(Series::carousel_sample()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay before the first chart renders and autoplay begins
    pub initial_delay_ms: u64,
    /// Delay between a panel becoming visible and its chart redraw
    pub redraw_delay_ms: u64,
    pub autoplay_ms: u64,
    pub stat_tick_ms: u64,
    pub stat_steps: u32,
    pub waitlist_submit_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 500,
            redraw_delay_ms: 100,
            autoplay_ms: 4000,
            stat_tick_ms: 30,
            stat_steps: StatCounter::DEFAULT_STEPS,
            waitlist_submit_ms: 2000,
        }
    }
}

impl TimingConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn redraw_delay(&self) -> Duration {
        Duration::from_millis(self.redraw_delay_ms)
    }

    pub fn autoplay(&self) -> Duration {
        Duration::from_millis(self.autoplay_ms)
    }

    pub fn stat_tick(&self) -> Duration {
        Duration::from_millis(self.stat_tick_ms)
    }

    pub fn waitlist_submit(&self) -> Duration {
        Duration::from_millis(self.waitlist_submit_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = ShowcaseConfig::from_json("{}").unwrap();
        assert_eq!(config, ShowcaseConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = ShowcaseConfig::from_json(
            r#"{ "timing": { "autoplay_ms": 1000 }, "carousel": { "chart": null } }"#,
        )
        .unwrap();

        assert_eq!(config.timing.autoplay(), Duration::from_millis(1000));
        assert_eq!(config.timing.redraw_delay(), Duration::from_millis(100));
        assert!(config.carousel.chart.is_none());
        assert_eq!(config.carousel.slides.len(), 4);
        assert!(config.simulator.chart.is_some());
    }

    #[test]
    fn test_invalid_series_is_rejected() {
        let err = ShowcaseConfig::from_json(
            r#"{ "simulator": { "chart": { "values": [1], "labels": ["Mon"] } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ShowcaseConfig::load(Path::new("/nonexistent/showcase.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_default_features_match_slides() {
        let carousel = CarouselConfig::default();
        assert_eq!(carousel.features.len(), carousel.slides.len());
        assert_eq!(carousel.features[2].feature, "2");
    }
}
