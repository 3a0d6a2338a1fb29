use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_classifier::DecisionTreeClassifier;
use smartcore::tree::decision_tree_regressor::DecisionTreeRegressor;

use super::{Classifier, Predictor};
use crate::error::Result;

#[derive(Serialize, Deserialize)]
pub struct TreeWrapper
{
    model: DecisionTreeRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl TreeWrapper
{
    pub fn new(model: DecisionTreeRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>) -> Self
    {
        Self { model }
    }
}

impl Predictor for TreeWrapper
{
    fn get_name(&self) -> &str
    {
        "Decision Tree"
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>>
    {
        Ok(self.model.predict(x)?)
    }
}

/// Rozhodovací strom ako klasifikátor nulového/nenulového obsahu
#[derive(Serialize, Deserialize)]
pub struct TreeClassifierWrapper
{
    model: DecisionTreeClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>,
}

impl TreeClassifierWrapper
{
    pub fn new(model: DecisionTreeClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>>) -> Self
    {
        Self { model }
    }
}

impl Classifier for TreeClassifierWrapper
{
    fn get_name(&self) -> &str
    {
        "Decision Tree Classifier"
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>>
    {
        let labels = self.model.predict(x)?;
        Ok(labels.into_iter().map(f64::from).collect())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use smartcore::tree::decision_tree_classifier::DecisionTreeClassifierParameters;
    use smartcore::tree::decision_tree_regressor::DecisionTreeRegressorParameters;

    fn features() -> DenseMatrix<f64>
    {
        DenseMatrix::from_2d_vec(&vec![
            vec![0.0, 1.0],
            vec![0.1, 1.1],
            vec![5.0, 0.0],
            vec![5.1, 0.2],
        ])
        .unwrap()
    }

    #[test]
    fn regressor_separates_groups()
    {
        let y = vec![0.0, 0.0, 4.0, 4.0];
        let model = DecisionTreeRegressor::fit(&features(), &y, DecisionTreeRegressorParameters::default()).unwrap();
        let pred = TreeWrapper::new(model).predict(&features()).unwrap();

        assert_eq!(pred, vec![0.0, 0.0, 4.0, 4.0]);
    }

    #[test]
    fn classifier_returns_labels_as_floats()
    {
        let y = vec![0, 0, 1, 1];
        let model = DecisionTreeClassifier::fit(&features(), &y, DecisionTreeClassifierParameters::default()).unwrap();
        let pred = TreeClassifierWrapper::new(model).predict(&features()).unwrap();

        assert_eq!(pred, vec![0.0, 0.0, 1.0, 1.0]);
    }
}
