use serde::Serialize;

use crate::data_loading::Dataset;
use crate::error::{EvalError, Result};
use crate::model::ModelOutput;

/// Jeden riadok tabuľky predikcií
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRow {
    #[serde(rename = "FoodCode")]
    pub food_id: String,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Y_pred")]
    pub y_pred: f64,
    #[serde(rename = "Y_pred_reg")]
    pub y_pred_reg: Option<f64>,
    #[serde(rename = "Y_pred_clas")]
    pub y_pred_clas: Option<i64>,
}

/// Predikcie v poradí riadkov datasetu
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionTable {
    pub rows: Vec<PredictionRow>,
}

impl PredictionTable {
    pub fn build(dataset: &Dataset, output: &ModelOutput) -> Result<Self> {
        let n = dataset.num_samples();
        let lengths = [
            Some(output.y_pred.len()),
            output.y_pred_reg.as_ref().map(Vec::len),
            output.y_pred_clas.as_ref().map(Vec::len),
        ];
        if lengths.iter().flatten().any(|len| *len != n) {
            return Err(EvalError::ShapeMismatch(format!(
                "prediction columns {lengths:?} do not match {n} dataset rows"
            )));
        }

        let rows = (0..n)
            .map(|i| PredictionRow {
                food_id: dataset.food_ids[i].clone(),
                y: dataset.y_data[i],
                y_pred: output.y_pred[i],
                y_pred_reg: output.y_pred_reg.as_ref().map(|v| v[i]),
                y_pred_clas: output.y_pred_clas.as_ref().and_then(|v| v[i]),
            })
            .collect();

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcore::linalg::basic::matrix::DenseMatrix;

    fn dataset() -> Dataset {
        Dataset::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec!["f".into()],
            DenseMatrix::from_2d_vec(&vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap(),
            vec![0.0, 0.5, 2.0],
        )
        .unwrap()
    }

    #[test]
    fn rows_follow_dataset_order() {
        let output = ModelOutput {
            y_pred: vec![0.1, 0.4, 1.9],
            y_pred_reg: Some(vec![0.2, 0.4, 1.9]),
            y_pred_clas: Some(vec![Some(0), None, Some(1)]),
        };
        let table = PredictionTable::build(&dataset(), &output).unwrap();

        assert_eq!(table.len(), 3);
        let ids: Vec<&str> = table.rows.iter().map(|r| r.food_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(table.rows[2].y, 2.0);
        assert_eq!(table.rows[2].y_pred, 1.9);
        assert_eq!(table.rows[0].y_pred_reg, Some(0.2));
        assert_eq!(table.rows[1].y_pred_clas, None);
        assert_eq!(table.rows[2].y_pred_clas, Some(1));
    }

    #[test]
    fn simple_model_leaves_optional_columns_empty() {
        let output = ModelOutput { y_pred: vec![0.1, 0.4, 1.9], y_pred_reg: None, y_pred_clas: None };
        let table = PredictionTable::build(&dataset(), &output).unwrap();

        assert!(table.rows.iter().all(|r| r.y_pred_reg.is_none() && r.y_pred_clas.is_none()));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let output = ModelOutput { y_pred: vec![0.1], y_pred_reg: None, y_pred_clas: None };
        assert!(PredictionTable::build(&dataset(), &output).is_err());
    }
}
