// File: crates/heatmap-core/src/dataset.rs
// Summary: Temperature-variance dataset model, JSON decoding, and validation.

use anyhow::Context;
use chrono::Month;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset has no monthly variance records")]
    Empty,
    #[error("base temperature is not finite: {0}")]
    NonFiniteBase(f64),
    #[error("record {index}: month {month} out of range 1..=12")]
    MonthOutOfRange { index: usize, month: u32 },
    #[error("record {index}: variance is not finite")]
    NonFiniteVariance { index: usize },
}

/// One month of observed variance from the baseline temperature.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct MonthRecord {
    pub year: i32,
    /// Calendar month, 1..=12.
    pub month: u32,
    /// Delta from the baseline temperature, in °C.
    pub variance: f64,
}

impl MonthRecord {
    /// Derived absolute temperature for this record.
    #[inline]
    pub fn temperature(&self, base: f64) -> f64 {
        base + self.variance
    }

    /// Zero-based month index (January = 0), used as the vertical band domain.
    #[inline]
    pub fn month_index(&self) -> u32 {
        self.month.saturating_sub(1)
    }
}

/// The full dataset as served by the upstream JSON resource.
/// Immutable once loaded; owned by the chart for the lifetime of one render.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthRecord>,
}

impl Dataset {
    /// Decode and validate a dataset from JSON text.
    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        let dataset: Dataset = serde_json::from_str(text).context("parsing dataset JSON")?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Decode and validate a dataset from any reader (file, HTTP body).
    pub fn from_json_reader(reader: impl std::io::Read) -> anyhow::Result<Self> {
        let dataset: Dataset = serde_json::from_reader(reader).context("parsing dataset JSON")?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check the input contract: non-empty records, finite base temperature,
    /// months in 1..=12, finite variances.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.monthly_variance.is_empty() {
            return Err(DatasetError::Empty);
        }
        if !self.base_temperature.is_finite() {
            return Err(DatasetError::NonFiniteBase(self.base_temperature));
        }
        for (index, rec) in self.monthly_variance.iter().enumerate() {
            if rec.month < 1 || rec.month > 12 {
                return Err(DatasetError::MonthOutOfRange { index, month: rec.month });
            }
            if !rec.variance.is_finite() {
                return Err(DatasetError::NonFiniteVariance { index });
            }
        }
        Ok(())
    }

    /// Distinct years in first-seen order; the categorical X-axis domain.
    pub fn years(&self) -> Vec<i32> {
        let mut years = Vec::new();
        for rec in &self.monthly_variance {
            if years.last() != Some(&rec.year) && !years.contains(&rec.year) {
                years.push(rec.year);
            }
        }
        years
    }

    /// Min/max of the derived absolute temperatures across all records.
    pub fn temperature_range(&self) -> (f64, f64) {
        let mut min_t = f64::INFINITY;
        let mut max_t = f64::NEG_INFINITY;
        for rec in &self.monthly_variance {
            let t = rec.temperature(self.base_temperature);
            min_t = min_t.min(t);
            max_t = max_t.max(t);
        }
        (min_t, max_t)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }
}

/// Full English month name for a zero-based month index (0 = "January").
/// Out-of-range indices fall back to "?" rather than panicking.
pub fn month_name(month_index: u32) -> &'static str {
    u8::try_from(month_index + 1)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("?")
}
