use std::path::Path;

use crate::error::OutputError;
use crate::table::Table;

/// Write `table` as comma-separated values with a header row, replacing any
/// existing file at `path`. No index column.
pub fn write_csv(table: &Table, path: &Path) -> Result<(), OutputError> {
    let csv_err = |source| OutputError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(csv_err)?;

    w.write_record(&table.columns).map_err(csv_err)?;
    for record in table.records() {
        w.write_record(&record).map_err(csv_err)?;
    }
    w.flush().map_err(|source| OutputError::Io {
        path: path.display().to_string(),
        source,
    })
}
