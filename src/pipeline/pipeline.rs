use std::path::Path;

use chrono::{DateTime, Local};
use log::{debug, info, warn};
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::builder::EvaluationPipelineBuilder;
use crate::config::EvalConfig;
use crate::data_loading::{DataLoader, Dataset, ScalingStats};
use crate::error::Result;
use crate::evaluation::{EvaluationReport, ModelEvaluator};
use crate::model::{Model, ModelOutput};
use crate::models::ModelFactory;
use crate::processing::{DataProcessor, StandardScaler};
use crate::reporting::{PredictionTable, ReportPaths, ReportWriter};

/// Facade pre celý beh evaluácie
/// Fázy idú raz, v pevnom poradí: load -> scale -> predict -> score -> persist.
pub struct EvaluationPipeline {
    pub(crate) config: EvalConfig,
    pub(crate) loader: Box<dyn DataLoader>,
}

impl EvaluationPipeline {
    /// Vytvorí builder pre konfiguráciu pipeline
    pub fn builder() -> EvaluationPipelineBuilder {
        EvaluationPipelineBuilder::new()
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn load_model(&self, model_path: &Path) -> Result<Model> {
        info!("Loading model at {}", model_path.display());
        let model = ModelFactory::load(model_path, self.config.format)?;
        debug!("Loaded {}", model.get_name());
        Ok(model)
    }

    pub fn load_dataset(&self, data_path: &Path) -> Result<Dataset> {
        info!("Loading data at {}", data_path.display());
        let dataset = self.loader.load_from_path(data_path)?;
        debug!(
            "{}: {} rows, {} features: {:?}",
            self.loader.get_name(),
            dataset.num_samples(),
            dataset.num_features(),
            dataset.feature_names
        );
        Ok(dataset)
    }

    /// Škáluje features štatistikami z trénovacej množiny
    pub fn scale(&self, dataset: &Dataset) -> Result<DenseMatrix<f64>> {
        info!("Scaling input features...");
        let stats = ScalingStats::load(&self.config.means_path, &self.config.variances_path)?;
        let scaler = StandardScaler::from_stats(&stats, dataset.num_features())?;
        debug!("{} with {} training statistics", scaler.get_name(), stats.len());

        for j in scaler.zero_variance_columns() {
            warn!(
                "Feature '{}' has zero training variance; scaled values will be inf/NaN",
                dataset.feature_names[j]
            );
        }

        Ok(scaler.process(&dataset.x_data))
    }

    pub fn predict(&self, model: &Model, x: &DenseMatrix<f64>) -> Result<ModelOutput> {
        info!("Testing the model...");
        model.predict_all(x)
    }

    pub fn score(&self, model_name: &str, dataset: &Dataset, output: &ModelOutput) -> Result<EvaluationReport> {
        ModelEvaluator::evaluate(model_name, &dataset.y_data, output)
    }

    pub fn persist(
        &self,
        report: &EvaluationReport,
        predictions: &PredictionTable,
        timestamp: &DateTime<Local>,
    ) -> Result<ReportPaths> {
        ReportWriter::new(&self.config.reports_dir).write(report, predictions, timestamp)
    }

    /// Kompletný workflow nad modelom zo súboru
    pub fn run(&self, model_path: &Path, data_path: &Path) -> Result<RunSummary> {
        let model = self.load_model(model_path)?;
        let model_name = ModelFactory::model_name(model_path);
        self.run_with_model(&model, &model_name, data_path)
    }

    /// Kompletný workflow nad už načítaným modelom
    pub fn run_with_model(&self, model: &Model, model_name: &str, data_path: &Path) -> Result<RunSummary> {
        let dataset = self.load_dataset(data_path)?;
        let x = self.scale(&dataset)?;
        let output = self.predict(model, &x)?;

        // všetko sa vypočíta pred prvým zápisom
        let predictions = PredictionTable::build(&dataset, &output)?;
        let report = self.score(model_name, &dataset, &output)?;

        let paths = self.persist(&report, &predictions, &Local::now())?;
        info!("Reports written to {}", self.config.reports_dir.display());

        Ok(RunSummary { report, predictions, paths })
    }
}

/// Výsledok jedného behu
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report: EvaluationReport,
    pub predictions: PredictionTable,
    pub paths: ReportPaths,
}

impl RunSummary {
    pub fn print(&self) {
        println!("\nResults: ");
        for (name, value) in &self.report.metrics {
            println!("{}: {}", name, value.unwrap_or(f64::NAN));
        }
        println!("\nResults saved to {}", self.paths.results.display());
        println!("\nPredictions saved to {}", self.paths.predictions.display());
    }
}
