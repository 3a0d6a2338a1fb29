use std::path::PathBuf;

use serde::Deserialize;

use crate::models::ModelFormat;

pub const DEFAULT_MEANS_PATH: &str = "scaling/train_feature_means.csv";
pub const DEFAULT_VARIANCES_PATH: &str = "scaling/train_feature_variances.csv";
pub const DEFAULT_REPORTS_DIR: &str = "reports";
pub const DEFAULT_TARGET_COLUMN: &str = "lac.per.100g";
pub const DEFAULT_INDEX_COLUMN: &str = "FoodCode";

/// Nastavenia jedného behu evaluácie. Všetky cesty sú relatívne k pracovnému adresáru.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct EvalConfig {
    pub means_path: PathBuf,
    pub variances_path: PathBuf,
    pub reports_dir: PathBuf,
    pub target_column: String,
    pub index_column: String,
    /// `None` = odvodiť z názvu súboru modelu
    pub format: Option<ModelFormat>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            means_path: PathBuf::from(DEFAULT_MEANS_PATH),
            variances_path: PathBuf::from(DEFAULT_VARIANCES_PATH),
            reports_dir: PathBuf::from(DEFAULT_REPORTS_DIR),
            target_column: DEFAULT_TARGET_COLUMN.to_string(),
            index_column: DEFAULT_INDEX_COLUMN.to_string(),
            format: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_directory_conventions() {
        let cfg = EvalConfig::default();
        assert_eq!(cfg.means_path, PathBuf::from("scaling/train_feature_means.csv"));
        assert_eq!(cfg.reports_dir, PathBuf::from("reports"));
        assert_eq!(cfg.target_column, "lac.per.100g");
        assert!(cfg.format.is_none());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: EvalConfig =
            serde_json::from_str(r#"{"reports_dir": "out", "format": "ffnn"}"#).unwrap();
        assert_eq!(cfg.reports_dir, PathBuf::from("out"));
        assert_eq!(cfg.format, Some(ModelFormat::Ffnn));
        assert_eq!(cfg.index_column, "FoodCode");
    }
}
