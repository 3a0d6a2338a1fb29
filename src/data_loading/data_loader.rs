use std::path::Path;

use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{EvalError, Result};

/// Výsledok načítania dát
///
/// Riadky sú v rovnakom poradí ako vo vstupnom súbore; `food_ids[i]`,
/// `x_data` riadok `i` a `y_data[i]` patria k tomu istému záznamu.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub food_ids: Vec<String>,
    pub feature_names: Vec<String>,
    pub x_data: DenseMatrix<f64>,
    pub y_data: Vec<f64>,
}

impl Dataset {
    pub fn new(
        food_ids: Vec<String>,
        feature_names: Vec<String>,
        x_data: DenseMatrix<f64>,
        y_data: Vec<f64>,
    ) -> Result<Self> {
        let (rows, cols) = x_data.shape();
        if rows != y_data.len() || rows != food_ids.len() {
            return Err(EvalError::ShapeMismatch(format!(
                "{} ids, {} feature rows, {} targets",
                food_ids.len(),
                rows,
                y_data.len()
            )));
        }
        if cols != feature_names.len() {
            return Err(EvalError::ShapeMismatch(format!(
                "{} feature columns but {} feature names",
                cols,
                feature_names.len()
            )));
        }
        Ok(Self { food_ids, feature_names, x_data, y_data })
    }

    pub fn num_features(&self) -> usize {
        self.x_data.shape().1
    }

    pub fn num_samples(&self) -> usize {
        self.x_data.shape().0
    }
}

/// Strategy pattern pre načítanie dát z rôznych zdrojov
pub trait DataLoader {
    fn get_name(&self) -> &str;

    /// Načíta dáta zo stringu
    fn load_from_string(&self, data: &str) -> Result<Dataset>;

    fn load_from_path(&self, path: &Path) -> Result<Dataset> {
        let text = std::fs::read_to_string(path).map_err(|e| EvalError::io(path, e))?;
        self.load_from_string(&text)
    }
}
