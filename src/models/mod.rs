use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::Result;

/// Spojitý prediktor (regresor alebo celý model)
pub trait Predictor
{
    fn get_name(&self) -> &str;

    /// Jedna predikcia na riadok `x`
    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>>;
}

/// Binárny klasifikátor. `NaN` znamená, že pre daný riadok nemá predikciu.
pub trait Classifier
{
    fn get_name(&self) -> &str;

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>>;
}

pub mod linreg;
pub mod logreg;
pub mod tree;
pub mod ffnn;
pub mod factory;

pub use linreg::LinRegWrapper;
pub use logreg::LogRegWrapper;
pub use tree::{TreeClassifierWrapper, TreeWrapper};
pub use ffnn::{Activation, FfnnCheckpoint, FfnnWrapper};
pub use factory::{ClassifierArtifact, ModelArtifact, ModelFactory, ModelFormat, RegressorArtifact};
