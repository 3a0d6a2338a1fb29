pub mod data_loader; // Strategy trait
pub mod csv_data_loader; // CSV implementation of strategy
pub mod scaling_stats;

pub use data_loader::{DataLoader, Dataset};
pub use csv_data_loader::CsvDataLoader;
pub use scaling_stats::ScalingStats;
