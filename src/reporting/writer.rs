use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use csv::Writer;

use super::predictions::PredictionTable;
use crate::error::{EvalError, Result};
use crate::evaluation::EvaluationReport;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Cesty k zapísaným súborom
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPaths {
    pub results: PathBuf,
    pub predictions: PathBuf,
}

/// Zapisuje výsledky a predikcie do adresára reportov
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Vytvorí adresár, ak ešte neexistuje
    pub fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| EvalError::io(&self.dir, e))
    }

    pub fn paths_for(&self, timestamp: &DateTime<Local>) -> ReportPaths {
        let stamp = timestamp.format(TIMESTAMP_FORMAT).to_string();
        ReportPaths {
            results: self.dir.join(format!("test_results_{stamp}.csv")),
            predictions: self.dir.join(format!("test_predictions_{stamp}.csv")),
        }
    }

    pub fn write(
        &self,
        report: &EvaluationReport,
        predictions: &PredictionTable,
        timestamp: &DateTime<Local>,
    ) -> Result<ReportPaths> {
        self.ensure_dir()?;
        let paths = self.paths_for(timestamp);

        write_results(&paths.results, report)?;
        write_predictions(&paths.predictions, predictions)?;

        Ok(paths)
    }
}

fn open_writer(path: &Path) -> Result<Writer<std::fs::File>> {
    let file = std::fs::File::create(path).map_err(|e| EvalError::io(path, e))?;
    Ok(Writer::from_writer(file))
}

/// Nedefinovaná metrika (aj NaN) je prázdna bunka.
/// Celé čísla majú ".0" ako v súbore predikcií.
fn format_score(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{v:?}"),
        _ => String::new(),
    }
}

/// Hlavička: prázdny index stĺpec + mená metrík; jeden riadok na model.
pub fn write_results(path: &Path, report: &EvaluationReport) -> Result<()> {
    let mut wtr = open_writer(path)?;

    let mut header = vec![String::new()];
    header.extend(report.metric_names().into_iter().map(str::to_string));
    wtr.write_record(&header)?;

    let mut row = vec![report.model_name.clone()];
    row.extend(report.metrics.iter().map(|(_, v)| format_score(*v)));
    wtr.write_record(&row)?;

    wtr.flush().map_err(|e| EvalError::io(path, e))?;
    Ok(())
}

pub fn write_predictions(path: &Path, predictions: &PredictionTable) -> Result<()> {
    let mut wtr = open_writer(path)?;
    for row in &predictions.rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(|e| EvalError::io(path, e))?;
    Ok(())
}
