use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::logistic_regression::LogisticRegression;

use super::Classifier;
use crate::error::Result;

#[derive(Serialize, Deserialize)]
pub struct LogRegWrapper {
    model: LogisticRegression<f64, i32, DenseMatrix<f64>, Vec<i32>>,
}

impl LogRegWrapper {
    pub fn new(model: LogisticRegression<f64, i32, DenseMatrix<f64>, Vec<i32>>) -> Self {
        Self { model }
    }
}

impl Classifier for LogRegWrapper {
    fn get_name(&self) -> &str { "Logistic Regression" }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        // labely su 0/1
        let labels = self.model.predict(x)?;
        Ok(labels.into_iter().map(f64::from).collect())
    }
}
