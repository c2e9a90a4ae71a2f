//! Tabular input: named columns of samples, loaded from CSV or JSON.

use std::{collections::BTreeMap, path::Path};

use anyhow::{Context, bail};
use serde::Deserialize;

use crate::util;

/// Cell spellings treated as a missing observation, compared case-insensitively.
const MISSING_MARKERS: [&str; 4] = ["", "na", "nan", "null"];

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub columns: Vec<Column>,
}

/// JSON layout: `{"columns": {"name": [1.0, null, ...]}}`, `null` is missing.
#[derive(Debug, Deserialize)]
struct JsonDataset {
    columns: BTreeMap<String, Vec<Option<f64>>>,
}

impl Dataset {
    /// Loads a dataset, choosing the format from the file extension.
    ///
    /// `.csv` files are read as CSV with a header row; anything else is
    /// read as JSON.
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        let dataset = if is_csv {
            Self::read_csv(path)?
        } else {
            Self::read_json(path)?
        };
        log::info!(
            "Loaded {} column(s) from {}",
            dataset.columns.len(),
            path.display()
        );
        Ok(dataset)
    }

    fn read_json(path: &Path) -> anyhow::Result<Self> {
        let json = util::read_json_file::<JsonDataset, _>("dataset", path)?;
        let columns = json
            .columns
            .into_iter()
            .map(|(name, values)| Column {
                name,
                values: values
                    .into_iter()
                    .map(|v| v.unwrap_or(f64::NAN))
                    .collect(),
            })
            .collect();
        Ok(Self { columns })
    }

    fn read_csv(path: &Path) -> anyhow::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Failed to open dataset file: {}", path.display()))?;

        let mut columns = reader
            .headers()
            .with_context(|| format!("Failed to read CSV header: {}", path.display()))?
            .iter()
            .map(|name| Column {
                name: name.to_owned(),
                values: vec![],
            })
            .collect::<Vec<_>>();

        for (row, record) in reader.records().enumerate() {
            // Header is line 1.
            let line = row + 2;
            let record = record
                .with_context(|| format!("Failed to read CSV line {line}: {}", path.display()))?;
            if record.len() != columns.len() {
                bail!(
                    "CSV line {line} has {} field(s), expected {}: {}",
                    record.len(),
                    columns.len(),
                    path.display()
                );
            }
            for (column, cell) in columns.iter_mut().zip(record.iter()) {
                let value = parse_cell(cell).with_context(|| {
                    format!("Invalid value in column '{}' at line {line}", column.name)
                })?;
                column.values.push(value);
            }
        }

        Ok(Self { columns })
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> anyhow::Result<&Column> {
        match self.columns.iter().find(|c| c.name == name) {
            Some(column) => Ok(column),
            None => bail!(
                "Column '{name}' not found (available: {})",
                self.column_names().join(", ")
            ),
        }
    }

    /// Selects the named columns, or every column when `names` is empty.
    pub fn select(&self, names: &[String]) -> anyhow::Result<Vec<&Column>> {
        if names.is_empty() {
            return Ok(self.columns.iter().collect());
        }
        names.iter().map(|name| self.column(name)).collect()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

fn parse_cell(cell: &str) -> anyhow::Result<f64> {
    if MISSING_MARKERS
        .iter()
        .any(|marker| cell.eq_ignore_ascii_case(marker))
    {
        return Ok(f64::NAN);
    }
    cell.parse::<f64>()
        .with_context(|| format!("'{cell}' is not a number"))
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("3.5").unwrap(), 3.5);
        assert_eq!(parse_cell("-1e3").unwrap(), -1000.0);
        assert!(parse_cell("").unwrap().is_nan());
        assert!(parse_cell("NA").unwrap().is_nan());
        assert!(parse_cell("NaN").unwrap().is_nan());
        assert!(parse_cell("null").unwrap().is_nan());
        assert!(parse_cell("abc").is_err());
    }

    #[test]
    fn test_load_csv() {
        let file = write_temp(".csv", "x, y\n1, 10\n2, NA\n3,30\n");
        let dataset = Dataset::load(file.path()).unwrap();

        assert_eq!(dataset.column_names(), ["x", "y"]);
        assert_eq!(dataset.column("x").unwrap().values, [1.0, 2.0, 3.0]);
        let y = &dataset.column("y").unwrap().values;
        assert_eq!(y[0], 10.0);
        assert!(y[1].is_nan());
        assert_eq!(y[2], 30.0);
    }

    #[test]
    fn test_load_csv_invalid_cell() {
        let file = write_temp(".csv", "x\n1\nfoo\n");
        let err = Dataset::load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("column 'x' at line 3"));
    }

    #[test]
    fn test_load_json() {
        let file = write_temp(
            ".json",
            r#"{"columns": {"b": [1.0, null, 3.0], "a": [4, 5, 6]}}"#,
        );
        let dataset = Dataset::load(file.path()).unwrap();

        assert_eq!(dataset.column_names(), ["a", "b"]);
        assert_eq!(dataset.column("a").unwrap().values, [4.0, 5.0, 6.0]);
        assert!(dataset.column("b").unwrap().values[1].is_nan());
    }

    #[test]
    fn test_select() {
        let dataset = Dataset {
            columns: vec![
                Column {
                    name: "x".to_owned(),
                    values: vec![1.0],
                },
                Column {
                    name: "y".to_owned(),
                    values: vec![2.0],
                },
            ],
        };
        assert_eq!(dataset.select(&[]).unwrap().len(), 2);
        let selected = dataset.select(&["y".to_owned()]).unwrap();
        assert_eq!(selected[0].name, "y");

        let err = dataset.select(&["z".to_owned()]).unwrap_err();
        assert_eq!(err.to_string(), "Column 'z' not found (available: x, y)");
    }
}
