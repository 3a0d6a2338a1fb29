use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{EvalError, Result};

/// Priemery a rozptyly features z trénovacej množiny.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingStats {
    pub means: Vec<f64>,
    pub variances: Vec<f64>,
}

impl ScalingStats {
    pub fn load(means_path: &Path, variances_path: &Path) -> Result<Self> {
        let means = load_vector(means_path)?;
        let variances = load_vector(variances_path)?;
        if means.len() != variances.len() {
            return Err(EvalError::ShapeMismatch(format!(
                "{} means but {} variances",
                means.len(),
                variances.len()
            )));
        }
        Ok(Self { means, variances })
    }

    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// Overí, že štatistiky sedia na počet feature stĺpcov.
    pub fn check_features(&self, num_features: usize) -> Result<()> {
        if self.len() != num_features {
            return Err(EvalError::ShapeMismatch(format!(
                "scaling statistics have {} entries, dataset has {} features",
                self.len(),
                num_features
            )));
        }
        Ok(())
    }
}

/// Načíta plochý zoznam čísel oddelených čiarkou (aj cez viac riadkov).
pub fn load_vector(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path).map_err(|e| EvalError::io(path, e))?;
    parse_vector(&text, &path.display().to_string())
}

fn parse_vector(text: &str, source: &str) -> Result<Vec<f64>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut values = Vec::new();
    for (row_idx, record) in rdr.records().enumerate() {
        for field in record?.iter().filter(|f| !f.is_empty()) {
            let value = field.parse::<f64>().map_err(|_| EvalError::Parse {
                column: source.to_string(),
                row: row_idx + 1,
                value: field.to_string(),
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_tmp(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parses_single_line() {
        assert_eq!(parse_vector("1.5,2,3e-1\n", "x").unwrap(), vec![1.5, 2.0, 0.3]);
    }

    #[test]
    fn parses_one_value_per_line() {
        assert_eq!(parse_vector("1\n2\n\n3\n", "x").unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse_vector("1,two", "x"), Err(EvalError::Parse { .. })));
    }

    #[test]
    fn load_checks_lengths() {
        let means = write_tmp("0,0,0");
        let vars = write_tmp("1,1");
        let err = ScalingStats::load(means.path(), vars.path()).unwrap_err();
        assert!(matches!(err, EvalError::ShapeMismatch(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let vars = write_tmp("1,1");
        let err = ScalingStats::load(Path::new("/nonexistent/means.csv"), vars.path()).unwrap_err();
        assert!(matches!(err, EvalError::Io { .. }));
    }

    #[test]
    fn check_features_rejects_mismatch() {
        let stats = ScalingStats { means: vec![0.0; 2], variances: vec![1.0; 2] };
        assert!(stats.check_features(2).is_ok());
        assert!(stats.check_features(3).is_err());
    }
}
