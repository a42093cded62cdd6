use crate::error::{PrepError, Result};
use crate::table::{Table, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads a tool export into a `Table`. Empty cells come back as nulls.
pub fn read_table(path: &Path) -> Result<Table> {
    info!("Reading {}", path.display());
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| permission_hint(e, "Try closing out the file you are trying to read"))?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record?;
        let row: Vec<Value> = record
            .iter()
            .map(|cell| {
                if cell.is_empty() {
                    Value::Null
                } else {
                    Value::str(cell)
                }
            })
            .collect();
        table.push_row(row)?;
    }
    Ok(table)
}

/// Writes a `Table` back out, creating the stage directory on the way.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| permission_hint(e, "Try closing the file you are trying to write to"))?;

    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(format_cell))?;
    }
    writer.flush().map_err(PrepError::Io)?;

    info!("Data has been saved to {}", path.display());
    Ok(())
}

/// Output file path for one stage: `<dir>/<stem><suffix>.csv`.
pub fn output_path(dir: &Path, stem: &str, suffix: &str) -> PathBuf {
    dir.join(format!("{}{}.csv", stem, suffix))
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::Str(s) => s.clone(),
        Value::Null => String::new(),
        Value::Num(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
    }
}

fn permission_hint(e: csv::Error, hint: &str) -> PrepError {
    if let csv::ErrorKind::Io(io_err) = e.kind() {
        if io_err.kind() == ErrorKind::PermissionDenied {
            return PrepError::Permission(hint.to_string());
        }
    }
    PrepError::Csv(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_preserves_headers_and_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.csv");

        let mut table = Table::new(vec!["Name".to_string(), "csiMasterformat".to_string()]);
        table
            .push_row(vec![Value::str("Ready-mix, 5000 psi"), Value::str("3")])
            .unwrap();
        table.push_row(vec![Value::Null, Value::Num(8.0)]).unwrap();
        write_table(&table, &path).unwrap();

        let back = read_table(&path).unwrap();
        assert_eq!(back.headers(), table.headers());
        assert_eq!(back.value(0, "Name").unwrap(), &Value::str("Ready-mix, 5000 psi"));
        // empty cell reads back as null, written number reads back as text
        assert!(back.value(1, "Name").unwrap().is_null());
        assert_eq!(back.value(1, "csiMasterformat").unwrap(), &Value::str("8"));
    }

    #[test]
    fn test_write_creates_stage_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cleaned").join("tally").join("model.csv");

        let mut table = Table::new(vec!["a".to_string()]);
        table.push_row(vec![Value::str("1")]).unwrap();
        write_table(&table, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_output_path_appends_suffix() {
        let p = output_path(Path::new("out"), "model_a", "_EleMapped");
        assert_eq!(p, Path::new("out").join("model_a_EleMapped.csv"));
    }
}
