use std::path::Path;

use crate::error::{LysoError, Result};
use crate::table::model::Table;

/// Write a table to `path`, undefined fields as empty cells.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let csv_err = |source: csv::Error| LysoError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut wtr = csv::Writer::from_path(path).map_err(csv_err)?;
    wtr.write_record(&table.columns).map_err(csv_err)?;
    for row in &table.rows {
        let record: Vec<&str> = table
            .columns
            .iter()
            .map(|c| row.get(c).map(String::as_str).unwrap_or(""))
            .collect();
        wtr.write_record(record).map_err(csv_err)?;
    }
    wtr.flush()?;
    Ok(())
}
