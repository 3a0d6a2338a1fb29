use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::Predictor;
use crate::error::{EvalError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    #[default]
    Linear,
    Relu,
    Sigmoid,
    Tanh,
}

impl Activation {
    fn apply(self, v: f64) -> f64 {
        match self {
            Activation::Linear => v,
            Activation::Relu => v.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-v).exp()),
            Activation::Tanh => v.tanh(),
        }
    }
}

/// Jedna hustá vrstva v checkpointe; `weights` má tvar (vstupy × výstupy).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerSpec {
    pub weights: Vec<Vec<f64>>,
    pub bias: Vec<f64>,
    #[serde(default)]
    pub activation: Activation,
}

/// Checkpoint feed-forward siete
///
/// ```json
/// { "layers": [ { "weights": [[0.5], [1.0]], "bias": [0.1], "activation": "linear" } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FfnnCheckpoint {
    pub layers: Vec<LayerSpec>,
}

struct DenseLayer {
    weights: Array2<f64>,
    bias: Array1<f64>,
    activation: Activation,
}

pub struct FfnnWrapper {
    layers: Vec<DenseLayer>,
}

impl FfnnWrapper {
    pub fn from_checkpoint(checkpoint: FfnnCheckpoint) -> Result<Self> {
        if checkpoint.layers.is_empty() {
            return Err(EvalError::ShapeMismatch("network has no layers".to_string()));
        }

        let mut layers: Vec<DenseLayer> = Vec::with_capacity(checkpoint.layers.len());
        for (idx, spec) in checkpoint.layers.into_iter().enumerate() {
            let inputs = spec.weights.len();
            let outputs = spec.weights.first().map_or(0, |row| row.len());
            if spec.weights.iter().any(|row| row.len() != outputs) {
                return Err(EvalError::ShapeMismatch(format!("layer {idx}: ragged weight matrix")));
            }
            if spec.bias.len() != outputs {
                return Err(EvalError::ShapeMismatch(format!(
                    "layer {idx}: {outputs} outputs but {} bias terms",
                    spec.bias.len()
                )));
            }
            if let Some(prev) = layers.last() {
                if prev.weights.ncols() != inputs {
                    return Err(EvalError::ShapeMismatch(format!(
                        "layer {idx} expects {inputs} inputs, previous layer emits {}",
                        prev.weights.ncols()
                    )));
                }
            }

            let flat: Vec<f64> = spec.weights.into_iter().flatten().collect();
            let weights = Array2::from_shape_vec((inputs, outputs), flat)
                .map_err(|e| EvalError::ShapeMismatch(format!("layer {idx}: {e}")))?;

            layers.push(DenseLayer {
                weights,
                bias: Array1::from_vec(spec.bias),
                activation: spec.activation,
            });
        }

        Ok(Self { layers })
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].weights.nrows()
    }

    /// Výstup má tvar (riadky × výstupy poslednej vrstvy)
    pub fn forward(&self, input: Array2<f64>) -> Result<Array2<f64>> {
        if input.ncols() != self.input_size() {
            return Err(EvalError::ShapeMismatch(format!(
                "network expects {} features, got {}",
                self.input_size(),
                input.ncols()
            )));
        }

        let mut activations = input;
        for layer in &self.layers {
            let mut z = activations.dot(&layer.weights) + &layer.bias;
            let act = layer.activation;
            z.mapv_inplace(|v| act.apply(v));
            activations = z;
        }
        Ok(activations)
    }
}

fn to_ndarray(x: &DenseMatrix<f64>) -> Array2<f64> {
    let (rows, cols) = x.shape();
    Array2::from_shape_fn((rows, cols), |(i, j)| *x.get((i, j)))
}

impl Predictor for FfnnWrapper {
    fn get_name(&self) -> &str {
        "Feed-forward Neural Network"
    }

    /// Vráti výstup v row-major poradí; zvyšnú dimenziu odstráni `Model::predict`.
    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        let output = self.forward(to_ndarray(x))?;
        Ok(output.iter().copied().collect())
    }
}
