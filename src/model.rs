use std::fmt;

use ndarray::Array1;
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{EvalError, Result};
use crate::models::{Classifier, Predictor};

/// Načítaný model. Variant sa určí raz pri načítaní, nie skúšaním za behu.
pub enum Model {
    /// Iba celková predikcia
    Simple(Box<dyn Predictor>),
    /// Regresor + klasifikátor (nulový / nenulový obsah)
    Combined(CombinedModel),
}

/// Kombinovaný model: regresor sa použije iba tam, kde klasifikátor predikuje nenulovú triedu.
pub struct CombinedModel {
    regressor: Box<dyn Predictor>,
    classifier: Box<dyn Classifier>,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Simple(p) => f.debug_tuple("Simple").field(&p.get_name()).finish(),
            Model::Combined(c) => f
                .debug_struct("Combined")
                .field("regressor", &c.regressor.get_name())
                .field("classifier", &c.classifier.get_name())
                .finish(),
        }
    }
}

/// Predikcie pre všetky riadky, v poradí vstupu
#[derive(Debug, Clone, PartialEq)]
pub struct ModelOutput {
    pub y_pred: Vec<f64>,
    pub y_pred_reg: Option<Vec<f64>>,
    pub y_pred_clas: Option<Vec<Option<i64>>>,
}

impl CombinedModel {
    pub fn new(regressor: Box<dyn Predictor>, classifier: Box<dyn Classifier>) -> Self {
        Self { regressor, classifier }
    }

    pub fn regressor_predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        let pred = self.regressor.predict(x)?;
        check_len(self.regressor.get_name(), pred.len(), x.shape().0)?;
        Ok(pred)
    }

    pub fn classifier_predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        let pred = self.classifier.predict(x)?;
        check_len(self.classifier.get_name(), pred.len(), x.shape().0)?;
        Ok(pred)
    }

    /// Bez predikcie klasifikátora (NaN) ostáva hodnota regresora.
    fn combine(reg: &[f64], clas: &[f64]) -> Vec<f64> {
        reg.iter()
            .zip(clas)
            .map(|(r, c)| if *c == 0.0 { 0.0 } else { *r })
            .collect()
    }
}

impl Model {
    pub fn get_name(&self) -> &str {
        match self {
            Model::Simple(p) => p.get_name(),
            Model::Combined(_) => "Combined Model",
        }
    }

    /// Celková predikcia, jedna hodnota na riadok
    pub fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        let n_rows = x.shape().0;
        let raw = match self {
            Model::Simple(p) => p.predict(x)?,
            Model::Combined(c) => {
                CombinedModel::combine(&c.regressor_predict(x)?, &c.classifier_predict(x)?)
            }
        };
        flatten_leading(raw, n_rows)
    }

    /// Celková predikcia plus čiastkové predikcie kombinovaného modelu.
    /// Regresor aj klasifikátor bežia iba raz.
    pub fn predict_all(&self, x: &DenseMatrix<f64>) -> Result<ModelOutput> {
        let n_rows = x.shape().0;
        match self {
            Model::Simple(p) => Ok(ModelOutput {
                y_pred: flatten_leading(p.predict(x)?, n_rows)?,
                y_pred_reg: None,
                y_pred_clas: None,
            }),
            Model::Combined(c) => {
                let reg = c.regressor_predict(x)?;
                let clas = c.classifier_predict(x)?;
                let y_pred = flatten_leading(CombinedModel::combine(&reg, &clas), n_rows)?;
                Ok(ModelOutput {
                    y_pred,
                    y_pred_reg: Some(reg),
                    y_pred_clas: Some(clas.into_iter().map(cast_class).collect()),
                })
            }
        }
    }
}

/// Číselný cast triedy na celé číslo (orezanie k nule); NaN = bez predikcie.
pub fn cast_class(value: f64) -> Option<i64> {
    if value.is_nan() {
        None
    } else {
        Some(value.trunc() as i64)
    }
}

/// Preusporiada výstup na (-1, n_rows) a vezme prvý riadok.
///
/// Výstup tvaru (n, 1) alebo (1, n) tak dá presne n hodnôt.
pub fn flatten_leading(raw: Vec<f64>, n_rows: usize) -> Result<Vec<f64>> {
    let total = raw.len();
    if n_rows == 0 || total == 0 || total % n_rows != 0 {
        return Err(EvalError::ShapeMismatch(format!(
            "model returned {total} values for {n_rows} rows"
        )));
    }
    let reshaped = Array1::from_vec(raw)
        .into_shape((total / n_rows, n_rows))
        .map_err(|e| EvalError::ShapeMismatch(e.to_string()))?;
    Ok(reshaped.row(0).to_vec())
}

fn check_len(name: &str, got: usize, expected: usize) -> Result<()> {
    if got != expected {
        return Err(EvalError::ShapeMismatch(format!(
            "{name} returned {got} predictions for {expected} rows"
        )));
    }
    Ok(())
}
