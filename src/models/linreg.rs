use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;

use super::Predictor;
use crate::error::Result;

#[derive(Serialize, Deserialize)]
pub struct LinRegWrapper
{
    pub(crate) model: LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl LinRegWrapper
{
    pub fn new(model: LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>) -> Self
    {
        Self { model }
    }
}

impl Predictor for LinRegWrapper
{
    fn get_name(&self) -> &str { "Linear Regression" }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>>
    {
        Ok(self.model.predict(x)?)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use approx::assert_abs_diff_eq;
    use smartcore::linear::linear_regression::LinearRegressionParameters;

    #[test]
    fn predicts_fitted_line()
    {
        let x = DenseMatrix::from_2d_vec(&vec![
            vec![1.0, 0.0],
            vec![2.0, 1.0],
            vec![3.0, 0.0],
            vec![4.0, 1.0],
            vec![5.0, 0.0],
        ])
        .unwrap();
        let y = vec![3.0, 7.0, 7.0, 11.0, 11.0];
        let model = LinearRegression::fit(&x, &y, LinearRegressionParameters::default()).unwrap();
        let wrapper = LinRegWrapper::new(model);

        let test = DenseMatrix::from_2d_vec(&vec![vec![6.0, 1.0]]).unwrap();
        let pred = wrapper.predict(&test).unwrap();

        // y = 2x + 2*flag + 1
        assert_eq!(pred.len(), 1);
        assert_abs_diff_eq!(pred[0], 15.0, epsilon = 1e-6);
    }
}
