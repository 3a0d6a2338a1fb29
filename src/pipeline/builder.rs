use std::path::PathBuf;

use super::pipeline::EvaluationPipeline;
use crate::config::EvalConfig;
use crate::data_loading::{CsvDataLoader, DataLoader};
use crate::error::{EvalError, Result};
use crate::models::ModelFormat;

/// Builder pre konfiguráciu evaluačnej pipeline
pub struct EvaluationPipelineBuilder {
    config: EvalConfig,
    loader: Option<Box<dyn DataLoader>>,
}

impl EvaluationPipelineBuilder {
    pub fn new() -> Self {
        Self {
            config: EvalConfig::default(),
            loader: None,
        }
    }

    /// Nahradí celú konfiguráciu
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn means_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.means_path = path.into();
        self
    }

    pub fn variances_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.variances_path = path.into();
        self
    }

    pub fn reports_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.reports_dir = dir.into();
        self
    }

    pub fn target_column(mut self, name: &str) -> Self {
        self.config.target_column = name.to_string();
        self
    }

    pub fn index_column(mut self, name: &str) -> Self {
        self.config.index_column = name.to_string();
        self
    }

    /// Explicitne nastaví formát modelu
    /// Ak nie je nastavený, odvodí sa z názvu súboru
    pub fn format(mut self, format: Option<ModelFormat>) -> Self {
        self.config.format = format;
        self
    }

    /// Vlastný loader namiesto CSV (napr. v testoch)
    pub fn loader(mut self, loader: Box<dyn DataLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    pub fn build(self) -> Result<EvaluationPipeline> {
        if self.config.target_column.is_empty() || self.config.index_column.is_empty() {
            return Err(EvalError::MissingColumn(
                "index and target column names must not be empty".to_string(),
            ));
        }
        if self.config.target_column == self.config.index_column {
            return Err(EvalError::ShapeMismatch(format!(
                "column '{}' cannot be both index and target",
                self.config.index_column
            )));
        }

        let loader = self.loader.unwrap_or_else(|| {
            Box::new(CsvDataLoader::new(&self.config.index_column, &self.config.target_column))
        });

        Ok(EvaluationPipeline {
            config: self.config,
            loader,
        })
    }
}

impl Default for EvaluationPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
