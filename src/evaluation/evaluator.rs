use smartcore::metrics::{mean_absolute_error, r2};

use super::metrics::{mutual_info_score, pearson, round2, spearman, EvaluationReport};
use crate::error::{EvalError, Result};
use crate::model::ModelOutput;

/// Regresné metriky v poradí stĺpcov výsledkov
pub const REGRESSION_METRICS: [&str; 5] = ["r2", "SRC", "PCC", "MI", "MAE"];

/// Klasifikačné metriky (iba pre kombinované modely)
pub const CLASSIFICATION_METRICS: [&str; 2] = ["classifier_accuracy", "classifier_f1"];

pub struct ModelEvaluator;

impl ModelEvaluator {
    /// Vyhodnotí celý beh: regresia vždy, klasifikácia iba ak existuje
    /// aspoň jedna predikcia klasifikátora.
    pub fn evaluate(model_name: &str, y_true: &[f64], output: &ModelOutput) -> Result<EvaluationReport> {
        let mut report = EvaluationReport::new(model_name.to_string());

        Self::evaluate_regression(y_true, &output.y_pred, &mut report)?;

        let y_binary: Vec<bool> = y_true.iter().map(|y| *y != 0.0).collect();
        Self::evaluate_classification(&y_binary, output.y_pred_clas.as_deref(), &mut report)?;

        Ok(report)
    }

    /// Vypočíta metriky pre regresiu, zaokrúhlené na 2 desatinné miesta
    pub fn evaluate_regression(y_true: &[f64], y_pred: &[f64], report: &mut EvaluationReport) -> Result<()> {
        if y_true.len() != y_pred.len() || y_true.is_empty() {
            return Err(EvalError::ShapeMismatch(format!(
                "{} targets but {} predictions",
                y_true.len(),
                y_pred.len()
            )));
        }

        let y_true_vec: Vec<f64> = y_true.to_vec();
        let y_pred_vec: Vec<f64> = y_pred.to_vec();

        let scores = [
            r2(&y_true_vec, &y_pred_vec),
            spearman(y_true, y_pred),
            pearson(y_true, y_pred),
            mutual_info_score(y_true, y_pred),
            mean_absolute_error(&y_true_vec, &y_pred_vec),
        ];

        for (name, score) in REGRESSION_METRICS.iter().zip(scores) {
            report.add_metric(name, Some(round2(score)));
        }
        Ok(())
    }

    /// Confusion matrix pre binárnu klasifikáciu, pozitívna trieda je 1
    /// Vracia (TP, TN, FP, FN)
    fn confusion_matrix(pairs: &[(f64, f64)]) -> (f64, f64, f64, f64) {
        let mut tp = 0.0;
        let mut tn = 0.0;
        let mut fp = 0.0;
        let mut fn_ = 0.0;

        for (t, p) in pairs {
            match (*t == 1.0, *p == 1.0) {
                (true, true) => tp += 1.0,
                (false, false) => tn += 1.0,
                (false, true) => fp += 1.0,
                (true, false) => fn_ += 1.0,
            }
        }

        (tp, tn, fp, fn_)
    }

    /// Accuracy a F1 voči binárnemu targetu.
    ///
    /// Všetko alebo nič: ak nie je žiadna predikcia klasifikátora (model ho nemá,
    /// alebo pre každý riadok chýba), obe metriky sú nedefinované. Inak sa
    /// počítajú z riadkov, ktoré predikciu majú.
    pub fn evaluate_classification(
        y_binary: &[bool],
        y_pred_clas: Option<&[Option<i64>]>,
        report: &mut EvaluationReport,
    ) -> Result<()> {
        let pairs: Vec<(f64, f64)> = match y_pred_clas {
            Some(preds) => {
                if preds.len() != y_binary.len() {
                    return Err(EvalError::ShapeMismatch(format!(
                        "{} targets but {} classifier predictions",
                        y_binary.len(),
                        preds.len()
                    )));
                }
                y_binary
                    .iter()
                    .zip(preds)
                    .filter_map(|(t, p)| p.map(|p| (if *t { 1.0 } else { 0.0 }, p as f64)))
                    .collect()
            }
            None => Vec::new(),
        };

        if pairs.is_empty() {
            for name in CLASSIFICATION_METRICS {
                report.add_metric(name, None);
            }
            return Ok(());
        }

        if let Some((_, label)) = pairs.iter().find(|(_, p)| *p != 0.0 && *p != 1.0) {
            return Err(EvalError::Model(format!(
                "classifier produced label {label}, expected 0 or 1"
            )));
        }

        let (tp, tn, fp, fn_) = Self::confusion_matrix(&pairs);

        let acc = (tp + tn) / pairs.len() as f64;
        // F1 pre triedu 1; 0/0 => 0
        let denom = 2.0 * tp + fp + fn_;
        let f1_score = if denom == 0.0 { 0.0 } else { 2.0 * tp / denom };

        report.add_metric(CLASSIFICATION_METRICS[0], Some(round2(acc)));
        report.add_metric(CLASSIFICATION_METRICS[1], Some(round2(f1_score)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn simple_output(y_pred: Vec<f64>) -> ModelOutput {
        ModelOutput { y_pred, y_pred_reg: None, y_pred_clas: None }
    }

    #[test]
    fn simple_model_leaves_classification_undefined() {
        let y = [0.0, 0.5, 2.0];
        let report = ModelEvaluator::evaluate("m", &y, &simple_output(vec![0.1, 0.4, 1.9])).unwrap();

        assert_eq!(report.get_metric("MAE"), Some(0.1));
        assert!(report.get_metric("r2").is_some());
        assert!(report.has_metric("classifier_accuracy"));
        assert_eq!(report.get_metric("classifier_accuracy"), None);
        assert_eq!(report.get_metric("classifier_f1"), None);
    }

    #[test]
    fn column_order_is_fixed() {
        let y = [0.0, 0.5, 2.0];
        let report = ModelEvaluator::evaluate("m", &y, &simple_output(vec![0.1, 0.4, 1.9])).unwrap();

        assert_eq!(
            report.metric_names(),
            vec!["r2", "SRC", "PCC", "MI", "MAE", "classifier_accuracy", "classifier_f1"]
        );
    }

    #[test]
    fn regression_scores_are_rounded() {
        let y = [0.0, 0.5, 2.0];
        let report = ModelEvaluator::evaluate("m", &y, &simple_output(vec![0.1, 0.4, 1.9])).unwrap();

        for name in REGRESSION_METRICS {
            let v = report.get_metric(name).unwrap();
            assert_abs_diff_eq!(v, round2(v));
        }
        // 1 - 0.03 / 2.1666..
        assert_eq!(report.get_metric("r2"), Some(0.99));
        assert_eq!(report.get_metric("SRC"), Some(1.0));
        assert_eq!(report.get_metric("MI"), Some(1.1));
    }

    #[test]
    fn classifier_predictions_define_classification_metrics() {
        let y = [0.0, 0.5, 2.0];
        let output = ModelOutput {
            y_pred: vec![0.0, 0.4, 1.9],
            y_pred_reg: Some(vec![0.1, 0.4, 1.9]),
            y_pred_clas: Some(vec![Some(0), Some(1), Some(1)]),
        };
        let report = ModelEvaluator::evaluate("m", &y, &output).unwrap();

        assert_eq!(report.get_metric("classifier_accuracy"), Some(1.0));
        assert_eq!(report.get_metric("classifier_f1"), Some(1.0));
    }

    #[test]
    fn single_present_prediction_is_enough() {
        let mut report = EvaluationReport::new("m".to_string());
        let preds = [None, Some(1), None];
        ModelEvaluator::evaluate_classification(&[false, true, true], Some(&preds), &mut report).unwrap();

        assert_eq!(report.get_metric("classifier_accuracy"), Some(1.0));
    }

    #[test]
    fn all_missing_classifier_predictions_are_undefined() {
        let mut report = EvaluationReport::new("m".to_string());
        let preds = [None, None, None];
        ModelEvaluator::evaluate_classification(&[false, true, true], Some(&preds), &mut report).unwrap();

        assert!(report.has_metric("classifier_f1"));
        assert_eq!(report.get_metric("classifier_accuracy"), None);
        assert_eq!(report.get_metric("classifier_f1"), None);
    }

    #[test]
    fn wrong_classifier_guess_lowers_accuracy() {
        let mut report = EvaluationReport::new("m".to_string());
        let preds = [Some(1), Some(1), Some(0), Some(1)];
        ModelEvaluator::evaluate_classification(&[false, true, true, true], Some(&preds), &mut report)
            .unwrap();

        assert_eq!(report.get_metric("classifier_accuracy"), Some(0.5));
        // precision 2/3, recall 2/3
        assert_eq!(report.get_metric("classifier_f1"), Some(0.67));
    }

    #[test]
    fn all_negative_target_with_false_positive_gives_zero_f1() {
        let mut report = EvaluationReport::new("m".to_string());
        let preds = [Some(0), Some(0), Some(1)];
        ModelEvaluator::evaluate_classification(&[false, false, false], Some(&preds), &mut report)
            .unwrap();

        assert_eq!(report.get_metric("classifier_accuracy"), Some(0.67));
        assert_eq!(report.get_metric("classifier_f1"), Some(0.0));
    }

    #[test]
    fn no_positives_anywhere_gives_zero_f1() {
        let mut report = EvaluationReport::new("m".to_string());
        let preds = [Some(0), Some(0)];
        ModelEvaluator::evaluate_classification(&[false, false], Some(&preds), &mut report).unwrap();

        assert_eq!(report.get_metric("classifier_accuracy"), Some(1.0));
        assert_eq!(report.get_metric("classifier_f1"), Some(0.0));
    }

    #[test]
    fn confusion_matrix_counts_positive_class() {
        let pairs = [(1.0, 1.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0), (0.0, 0.0)];
        assert_eq!(ModelEvaluator::confusion_matrix(&pairs), (1.0, 2.0, 1.0, 1.0));
    }

    #[test]
    fn non_binary_label_is_rejected() {
        let mut report = EvaluationReport::new("m".to_string());
        let preds = [Some(2), Some(1)];
        let err = ModelEvaluator::evaluate_classification(&[false, true], Some(&preds), &mut report);
        assert!(matches!(err, Err(EvalError::Model(_))));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let mut report = EvaluationReport::new("m".to_string());
        let err = ModelEvaluator::evaluate_regression(&[1.0, 2.0], &[1.0], &mut report);
        assert!(matches!(err, Err(EvalError::ShapeMismatch(_))));
    }
}
