pub mod predictions;
pub mod writer;

pub use predictions::{PredictionRow, PredictionTable};
pub use writer::{ReportPaths, ReportWriter, TIMESTAMP_FORMAT};
