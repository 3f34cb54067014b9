use std::path::{Path, PathBuf};

use crate::error::{LysoError, Result};
use crate::table::model::{COL_SLICE, COL_TOTAL_AREA, COL_WELL_TOKEN, Row, Table};
use crate::well::crude_well_token;

/// Parse one particle-analysis results CSV.
///
/// Fails naming the file on malformed CSV and on a missing `Slice` or
/// `Total Area` column; extra columns pass through untouched.
pub fn read_results_csv(path: &Path) -> Result<Table> {
    let csv_err = |source: csv::Error| LysoError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = csv::Reader::from_path(path).map_err(csv_err)?;
    let headers: Vec<String> = rdr
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();

    for required in [COL_SLICE, COL_TOTAL_AREA] {
        if !headers.iter().any(|h| h == required) {
            return Err(LysoError::MissingColumn {
                path: path.to_path_buf(),
                column: required.to_string(),
            });
        }
    }

    let mut table = Table {
        columns: headers.clone(),
        rows: Vec::new(),
    };
    for record in rdr.records() {
        let record = record.map_err(csv_err)?;
        let mut row = Row::new();
        for (i, col) in headers.iter().enumerate() {
            if let Some(v) = record.get(i) {
                row.insert(col.clone(), v.to_string());
            }
        }
        table.rows.push(row);
    }
    Ok(table)
}

/// Load and concatenate a group of results CSVs in the given order.
///
/// Heterogeneous schemas are unioned (missing fields stay undefined) with a
/// warning, never an error. Afterward the crude `wellID` token is derived
/// from `Slice` on every row, so both join strategies see the same input.
pub fn concat_results(paths: &[PathBuf]) -> Result<Table> {
    let mut combined = Table::new();
    let mut first_schema: Option<Vec<String>> = None;

    for path in paths {
        let table = read_results_csv(path)?;
        match &first_schema {
            None => first_schema = Some(table.columns.clone()),
            Some(schema) if *schema != table.columns => {
                eprintln!(
                    "warning: {}: column set differs from {}; taking schema union",
                    path.display(),
                    paths[0].display()
                );
            }
            Some(_) => {}
        }
        for col in &table.columns {
            combined.add_column(col);
        }
        combined.rows.extend(table.rows);
    }

    combined.derive_column(COL_WELL_TOKEN, |row| {
        Some(
            row.get(COL_SLICE)
                .and_then(|s| crude_well_token(s))
                .unwrap_or_default(),
        )
    });
    Ok(combined)
}
