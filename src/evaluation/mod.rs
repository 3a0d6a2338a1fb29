pub mod evaluator;
pub mod metrics;

pub use evaluator::{ModelEvaluator, CLASSIFICATION_METRICS, REGRESSION_METRICS};
pub use metrics::EvaluationReport;
