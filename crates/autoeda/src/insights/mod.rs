//! Statistical insight detectors and their aggregation.

mod cardinality;
mod correlation;
mod detector;
mod engine;
mod outlier;
mod skewness;

pub use cardinality::{CardinalityDetector, CardinalityRow};
pub use correlation::{CorrelationDetector, CorrelationMatrix, CorrelationPair};
pub use detector::{Detection, Detector, InsightCategory};
pub use engine::{generate_all_insights, InsightEngine, InsightReport, InsightRun};
pub use outlier::{IqrBounds, OutlierDetector, OutlierMethod, OutlierRow, OutlierSummary};
pub use skewness::{SkewnessDetector, SkewnessRow};
