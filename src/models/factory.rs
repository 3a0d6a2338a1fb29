use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Classifier, FfnnCheckpoint, FfnnWrapper, LinRegWrapper, LogRegWrapper, Predictor, TreeClassifierWrapper, TreeWrapper};
use crate::error::{EvalError, Result};
use crate::model::{CombinedModel, Model};

/// Formát uloženého modelu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
    /// Checkpoint feed-forward siete
    Ffnn,
    /// Serializovaný smartcore model (JSON s tagom `kind`)
    Serialized,
}

impl ModelFormat {
    /// Odvodí formát z názvu súboru: `ffnn` v mene => sieť.
    pub fn infer(path: &Path) -> Self {
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if file_name.contains("ffnn") {
            ModelFormat::Ffnn
        } else {
            ModelFormat::Serialized
        }
    }
}

impl FromStr for ModelFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ffnn" => Ok(ModelFormat::Ffnn),
            "serialized" => Ok(ModelFormat::Serialized),
            _ => Err(format!("unknown model format '{s}' (expected ffnn or serialized)")),
        }
    }
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelFormat::Ffnn => write!(f, "ffnn"),
            ModelFormat::Serialized => write!(f, "serialized"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressorArtifact {
    LinearRegression(LinRegWrapper),
    DecisionTreeRegressor(TreeWrapper),
}

impl RegressorArtifact {
    fn into_predictor(self) -> Box<dyn Predictor> {
        match self {
            RegressorArtifact::LinearRegression(m) => Box::new(m),
            RegressorArtifact::DecisionTreeRegressor(m) => Box::new(m),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    LogisticRegression(LogRegWrapper),
    DecisionTreeClassifier(TreeClassifierWrapper),
}

impl ClassifierArtifact {
    fn into_classifier(self) -> Box<dyn Classifier> {
        match self {
            ClassifierArtifact::LogisticRegression(m) => Box::new(m),
            ClassifierArtifact::DecisionTreeClassifier(m) => Box::new(m),
        }
    }
}

/// Obsah súboru vo formáte `Serialized`
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LinearRegression(LinRegWrapper),
    DecisionTreeRegressor(TreeWrapper),
    Combined {
        regressor: RegressorArtifact,
        classifier: ClassifierArtifact,
    },
}

impl ModelArtifact {
    pub fn into_model(self) -> Model {
        match self {
            ModelArtifact::LinearRegression(m) => Model::Simple(Box::new(m)),
            ModelArtifact::DecisionTreeRegressor(m) => Model::Simple(Box::new(m)),
            ModelArtifact::Combined { regressor, classifier } => Model::Combined(CombinedModel::new(
                regressor.into_predictor(),
                classifier.into_classifier(),
            )),
        }
    }
}

/// Factory pre načítanie modelov zo súboru
pub struct ModelFactory;

impl ModelFactory {
    /// Načíta model; `format = None` => odvodí sa z názvu súboru
    pub fn load(path: &Path, format: Option<ModelFormat>) -> Result<Model> {
        let format = format.unwrap_or_else(|| ModelFormat::infer(path));
        log::debug!("Model format for {}: {}", path.display(), format);

        let text = std::fs::read_to_string(path).map_err(|e| EvalError::io(path, e))?;
        let deserialize_err = |source| EvalError::Deserialize { path: path.to_path_buf(), source };

        match format {
            ModelFormat::Ffnn => {
                let checkpoint: FfnnCheckpoint = serde_json::from_str(&text).map_err(deserialize_err)?;
                Ok(Model::Simple(Box::new(FfnnWrapper::from_checkpoint(checkpoint)?)))
            }
            ModelFormat::Serialized => {
                let artifact: ModelArtifact = serde_json::from_str(&text).map_err(deserialize_err)?;
                Ok(artifact.into_model())
            }
        }
    }

    /// Meno modelu pre výsledky: názov súboru bez `.model`
    pub fn model_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().replace(".model", ""))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn infers_format_from_file_name() {
        assert_eq!(ModelFormat::infer(Path::new("models/ffnn_full.json")), ModelFormat::Ffnn);
        assert_eq!(ModelFormat::infer(Path::new("models/xgb_combined.model")), ModelFormat::Serialized);
        // adresár sa neberie do úvahy
        assert_eq!(ModelFormat::infer(Path::new("ffnn/ridge.model")), ModelFormat::Serialized);
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("FFNN".parse::<ModelFormat>().unwrap(), ModelFormat::Ffnn);
        assert_eq!("serialized".parse::<ModelFormat>().unwrap(), ModelFormat::Serialized);
        assert!("pickle".parse::<ModelFormat>().is_err());
    }

    #[test]
    fn model_name_strips_model_suffix() {
        assert_eq!(ModelFactory::model_name(Path::new("models/xgb_combined.model")), "xgb_combined");
        assert_eq!(ModelFactory::model_name(Path::new("ffnn.json")), "ffnn.json");
    }

    #[test]
    fn loads_ffnn_checkpoint() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, r#"{{"layers": [{{"weights": [[1.0], [1.0]], "bias": [0.0]}}]}}"#).unwrap();

        let model = ModelFactory::load(f.path(), Some(ModelFormat::Ffnn)).unwrap();
        assert!(matches!(model, Model::Simple(_)));
    }

    #[test]
    fn malformed_artifact_is_deserialize_error() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, r#"{{"kind": "xgboost"}}"#).unwrap();

        let err = ModelFactory::load(f.path(), Some(ModelFormat::Serialized)).unwrap_err();
        assert!(matches!(err, EvalError::Deserialize { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ModelFactory::load(Path::new("/nonexistent/model.model"), None).unwrap_err();
        assert!(matches!(err, EvalError::Io { .. }));
    }
}
