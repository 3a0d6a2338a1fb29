use csv::ReaderBuilder;
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::data_loader::{DataLoader, Dataset};
use crate::config::{DEFAULT_INDEX_COLUMN, DEFAULT_TARGET_COLUMN};
use crate::error::{EvalError, Result};

/// CSV Data Loader pre tabuľku zloženia potravín.
///
/// Layout: index stĺpec (`FoodCode`) je kľúč riadku. Zo zvyšných stĺpcov sú
/// features všetky okrem prvého a posledného; target sa hľadá podľa mena.
pub struct CsvDataLoader {
    index_column: String,
    target_column: String,
}

impl CsvDataLoader {
    pub fn new(index_column: &str, target_column: &str) -> Self {
        Self {
            index_column: index_column.to_string(),
            target_column: target_column.to_string(),
        }
    }

    fn parse_csv(&self, csv_text: &str) -> Result<(Vec<String>, Vec<csv::StringRecord>)> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::All)
            .from_reader(csv_text.as_bytes());

        let headers: Vec<String> = rdr.headers()?.iter().map(|s| s.to_string()).collect();
        let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;

        Ok((headers, records))
    }

    fn column_position(headers: &[String], name: &str) -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| EvalError::MissingColumn(name.to_string()))
    }

    /// Prázdna bunka je chýbajúca hodnota (NaN), nie nula.
    fn parse_numeric_value(val: &str, column: &str, row: usize) -> Result<f64> {
        if val.is_empty() {
            return Ok(f64::NAN);
        }
        val.parse::<f64>().map_err(|_| EvalError::Parse {
            column: column.to_string(),
            row: row + 1,
            value: val.to_string(),
        })
    }
}

impl Default for CsvDataLoader {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_COLUMN, DEFAULT_TARGET_COLUMN)
    }
}

impl DataLoader for CsvDataLoader {
    fn get_name(&self) -> &str {
        "CSV Data Loader"
    }

    fn load_from_string(&self, data: &str) -> Result<Dataset> {
        let (headers, records) = self.parse_csv(data)?;

        let index_pos = Self::column_position(&headers, &self.index_column)?;
        let target_pos = Self::column_position(&headers, &self.target_column)?;

        // stĺpce bez indexu, features = [1..len-1]
        let value_columns: Vec<usize> = (0..headers.len()).filter(|&i| i != index_pos).collect();
        if value_columns.len() < 3 || records.is_empty() {
            return Err(EvalError::EmptyDataset);
        }
        let feature_columns = &value_columns[1..value_columns.len() - 1];

        let feature_names: Vec<String> =
            feature_columns.iter().map(|&i| headers[i].clone()).collect();

        let mut food_ids = Vec::with_capacity(records.len());
        let mut x_rows: Vec<Vec<f64>> = Vec::with_capacity(records.len());
        let mut y_data = Vec::with_capacity(records.len());

        for (row_idx, record) in records.iter().enumerate() {
            food_ids.push(record[index_pos].to_string());

            y_data.push(Self::parse_numeric_value(
                &record[target_pos],
                &headers[target_pos],
                row_idx,
            )?);

            let row = feature_columns
                .iter()
                .map(|&i| Self::parse_numeric_value(&record[i], &headers[i], row_idx))
                .collect::<Result<Vec<f64>>>()?;
            x_rows.push(row);
        }

        let x_data = DenseMatrix::from_2d_vec(&x_rows)?;

        Dataset::new(food_ids, feature_names, x_data, y_data)
    }
}
