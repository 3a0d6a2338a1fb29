use smartcore::linalg::basic::arrays::{Array, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::DataProcessor;
use crate::data_loading::ScalingStats;
use crate::error::Result;

/// Standard Scaler s externými štatistikami z trénovacej množiny.
///
/// `(x - mean) / sqrt(var)` po stĺpcoch, bez epsilon ochrany: nulový rozptyl
/// dá `±inf` alebo `NaN` a tie idú ďalej do modelu.
pub struct StandardScaler
{
    means: Vec<f64>,
    std_devs: Vec<f64>,
}

impl StandardScaler
{
    pub fn from_stats(stats: &ScalingStats, num_features: usize) -> Result<Self>
    {
        stats.check_features(num_features)?;
        Ok(Self {
            means: stats.means.clone(),
            std_devs: stats.variances.iter().map(|v| v.sqrt()).collect(),
        })
    }

    /// Indexy stĺpcov, kde je smerodajná odchýlka nulová
    pub fn zero_variance_columns(&self) -> Vec<usize>
    {
        self.std_devs
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == 0.0)
            .map(|(j, _)| j)
            .collect()
    }
}

impl DataProcessor for StandardScaler
{
    fn get_name(&self) -> &str
    {
        "Standard Scaler"
    }

    fn process(&self, data: &DenseMatrix<f64>) -> DenseMatrix<f64>
    {
        let (rows, cols) = data.shape();
        let mut result = data.clone();

        for j in 0..cols
        {
            let mean = self.means[j];
            let std = self.std_devs[j];
            for i in 0..rows
            {
                let val = (data.get((i, j)) - mean) / std;
                result.set((i, j), val);
            }
        }
        result
    }
}
