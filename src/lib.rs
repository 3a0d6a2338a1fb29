pub mod config;
pub mod data_loading;
pub mod error;
pub mod evaluation;
pub mod model;
pub mod models;
pub mod pipeline;
pub mod processing;
pub mod reporting;

pub use config::EvalConfig;
pub use data_loading::{CsvDataLoader, Dataset, ScalingStats};
pub use error::{EvalError, Result};
pub use evaluation::{EvaluationReport, ModelEvaluator};
pub use model::{CombinedModel, Model, ModelOutput};
pub use models::{ModelFactory, ModelFormat};
pub use pipeline::{EvaluationPipeline, RunSummary};
