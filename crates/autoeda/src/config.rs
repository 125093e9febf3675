//! Analysis configuration.
//!
//! Every threshold used by the profiling and insight passes lives here so a
//! session can be described by one value and loaded from a JSON file. All
//! structs use `#[serde(default)]`, so a config file only needs the keys it
//! overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EdaError, Result};
use crate::input::ParserConfig;

/// Outlier detector settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlierConfig {
    /// IQR fence multiplier.
    pub iqr_multiplier: f64,
    /// Absolute z-score above which a value is an outlier.
    pub z_threshold: f64,
    /// Outlier percentage above which a row becomes an insight.
    pub insight_pct: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            iqr_multiplier: 1.5,
            z_threshold: 3.0,
            insight_pct: 5.0,
        }
    }
}

impl OutlierConfig {
    /// Reject negative or non-finite settings.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("outliers.iqr_multiplier", self.iqr_multiplier)?;
        check_non_negative("outliers.z_threshold", self.z_threshold)?;
        check_non_negative("outliers.insight_pct", self.insight_pct)
    }
}

/// Skewness detector settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkewnessConfig {
    /// Absolute skewness above which a column is flagged.
    pub threshold: f64,
}

impl Default for SkewnessConfig {
    fn default() -> Self {
        Self { threshold: 1.0 }
    }
}

impl SkewnessConfig {
    /// Reject negative or non-finite settings.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("skewness.threshold", self.threshold)
    }
}

/// Cardinality detector settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardinalityConfig {
    /// Uniqueness ratio (0-1) above which a column is flagged.
    pub threshold: f64,
}

impl Default for CardinalityConfig {
    fn default() -> Self {
        Self { threshold: 0.95 }
    }
}

impl CardinalityConfig {
    /// Reject thresholds outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_fraction("cardinality.threshold", self.threshold)
    }
}

/// Correlation detector settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// Absolute Pearson correlation above which a pair is flagged.
    pub threshold: f64,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self { threshold: 0.85 }
    }
}

impl CorrelationConfig {
    /// Reject thresholds outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_fraction("correlation.threshold", self.threshold)
    }
}

/// Missing-value flag settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissingConfig {
    /// Missing fraction (0-1) above which a column is flagged.
    pub threshold: f64,
}

impl Default for MissingConfig {
    fn default() -> Self {
        Self { threshold: 0.3 }
    }
}

impl MissingConfig {
    /// Reject thresholds outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_fraction("missing.threshold", self.threshold)
    }
}

/// Configuration for one analysis session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdaConfig {
    /// Loader settings.
    pub parser: ParserConfig,
    /// Run detectors on the imputed/encoded table instead of the raw one.
    pub preprocess: bool,
    pub outliers: OutlierConfig,
    pub skewness: SkewnessConfig,
    pub cardinality: CardinalityConfig,
    pub correlation: CorrelationConfig,
    pub missing: MissingConfig,
}

impl Default for EdaConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            preprocess: true,
            outliers: OutlierConfig::default(),
            skewness: SkewnessConfig::default(),
            cardinality: CardinalityConfig::default(),
            correlation: CorrelationConfig::default(),
            missing: MissingConfig::default(),
        }
    }
}

impl EdaConfig {
    /// Load a configuration from a JSON file. Missing keys take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| EdaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.outliers.validate()?;
        self.skewness.validate()?;
        self.cardinality.validate()?;
        self.correlation.validate()?;
        self.missing.validate()
    }
}

fn check_non_negative(key: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(EdaError::Config(format!(
            "{key} must be a finite, non-negative number (got {value})"
        )))
    }
}

fn check_fraction(key: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EdaError::Config(format!(
            "{key} must be between 0 and 1 (got {value})"
        )))
    }
}
