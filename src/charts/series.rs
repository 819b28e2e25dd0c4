//! Chart Series Module
//! Fixed numeric samples paired with their axis labels.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("Series needs at least 2 samples, got {0}")]
    TooShort(usize),
    #[error("Series has {values} values but {labels} labels")]
    LabelMismatch { values: usize, labels: usize },
    #[error("Series value at index {0} is not finite")]
    NotFinite(usize),
}

/// Ordered values with one label per value. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries", into = "RawSeries")]
pub struct Series {
    values: Vec<f64>,
    labels: Vec<String>,
}

#[derive(Serialize, Deserialize)]
struct RawSeries {
    values: Vec<f64>,
    labels: Vec<String>,
}

impl TryFrom<RawSeries> for Series {
    type Error = SeriesError;

    fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
        Series::new(raw.values, raw.labels)
    }
}

impl From<Series> for RawSeries {
    fn from(series: Series) -> Self {
        RawSeries {
            values: series.values,
            labels: series.labels,
        }
    }
}

impl Series {
    pub fn new<S: Into<String>>(
        values: Vec<f64>,
        labels: impl IntoIterator<Item = S>,
    ) -> Result<Self, SeriesError> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if values.len() < 2 {
            return Err(SeriesError::TooShort(values.len()));
        }
        if values.len() != labels.len() {
            return Err(SeriesError::LabelMismatch {
                values: values.len(),
                labels: labels.len(),
            });
        }
        if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
            return Err(SeriesError::NotFinite(idx));
        }

        Ok(Self { values, labels })
    }

    /// Weekly sales figures shown on the dashboard tab.
    pub fn dashboard_sample() -> Self {
        Self {
            values: vec![120.0, 190.0, 300.0, 500.0, 200.0, 300.0, 450.0],
            labels: weekdays(),
        }
    }

    /// Figures shown on the first carousel slide.
    pub fn carousel_sample() -> Self {
        Self {
            values: vec![150.0, 230.0, 180.0, 320.0, 280.0, 400.0, 350.0],
            labels: weekdays(),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

fn weekdays() -> Vec<String> {
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_series() {
        assert_eq!(
            Series::new(vec![1.0], ["Mon"]),
            Err(SeriesError::TooShort(1))
        );
    }

    #[test]
    fn test_rejects_label_mismatch() {
        let err = Series::new(vec![1.0, 2.0, 3.0], ["a", "b"]).unwrap_err();
        assert_eq!(err, SeriesError::LabelMismatch { values: 3, labels: 2 });
    }

    #[test]
    fn test_rejects_nan() {
        let err = Series::new(vec![1.0, f64::NAN], ["a", "b"]).unwrap_err();
        assert_eq!(err, SeriesError::NotFinite(1));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Series =
            serde_json::from_str(r#"{"values":[1,2],"labels":["a","b"]}"#).unwrap();
        assert_eq!(ok.values(), &[1.0, 2.0]);

        let bad = serde_json::from_str::<Series>(r#"{"values":[1],"labels":["a"]}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_samples_are_paired() {
        for series in [Series::dashboard_sample(), Series::carousel_sample()] {
            assert_eq!(series.values().len(), series.labels().len());
            assert_eq!(series.labels()[0], "Mon");
        }
    }
}
