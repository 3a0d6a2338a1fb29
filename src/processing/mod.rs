pub mod data_processor;
pub mod scaler;

pub use data_processor::DataProcessor;
pub use scaler::StandardScaler;
