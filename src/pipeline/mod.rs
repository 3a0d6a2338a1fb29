pub mod builder;
pub mod pipeline;

pub use builder::EvaluationPipelineBuilder;
pub use pipeline::{EvaluationPipeline, RunSummary};
