use std::path::{Path, PathBuf};

use super::average::average;
use super::error::DataError;
use super::model::{AveragedRun, Dataset};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load `data1.csv` … `data{count}.csv` from `dir` and average them.
///
/// All files are read before any averaging happens; the first load failure
/// aborts the whole run.
pub fn load_run(dir: &Path, count: usize) -> Result<AveragedRun, DataError> {
    let mut datasets = Vec::with_capacity(count);
    for i in 1..=count {
        datasets.push(load_dataset(&dataset_path(dir, i))?);
    }
    average(&datasets)
}

/// File-name pattern for the i-th benchmark repetition (1-based).
pub fn dataset_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("data{index}.csv"))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse one comma-delimited numeric file into a [`Dataset`].
///
/// The file has no header row: row 0 already carries the X-axis values.
/// A missing file, a non-numeric cell, or rows of unequal length all come
/// back as [`DataError::Load`].
pub fn load_dataset(path: &Path) -> Result<Dataset, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| DataError::load(path, e.to_string()))?;

    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        // The csv reader itself flags ragged records against the first row.
        let record = result.map_err(|e| DataError::load(path, e.to_string()))?;

        let row: Vec<f64> = record
            .iter()
            .enumerate()
            .map(|(col, tok)| {
                tok.parse::<f64>().map_err(|_| {
                    DataError::load(
                        path,
                        format!("row {row_no}, column {col}: '{tok}' is not a number"),
                    )
                })
            })
            .collect::<Result<_, _>>()?;

        rows.push(row);
    }

    if rows.len() < 2 {
        return Err(DataError::load(
            path,
            format!(
                "expected an X-axis row plus at least one measurement row, found {} rows",
                rows.len()
            ),
        ));
    }

    Ok(Dataset {
        path: path.to_path_buf(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_a_well_formed_file() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "data1.csv", "1,2,3\n10,20,30\n40,50,60\n");

        let ds = load_dataset(&path).unwrap();
        assert_eq!(ds.shape(), (3, 3));
        assert_eq!(ds.x_axis(), &[1.0, 2.0, 3.0]);
        assert_eq!(ds.measurements()[1], vec![40.0, 50.0, 60.0]);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = TempDir::new().unwrap();
        let err = load_dataset(&dir.path().join("data1.csv")).unwrap_err();
        assert!(matches!(err, DataError::Load { .. }));
    }

    #[test]
    fn non_numeric_cell_is_a_load_error() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "data1.csv", "1,2,3\n10,oops,30\n");

        let err = load_dataset(&path).unwrap_err();
        match err {
            DataError::Load { reason, .. } => assert!(reason.contains("oops")),
            other => panic!("expected Load error, got {other:?}"),
        }
    }

    #[test]
    fn ragged_rows_are_a_load_error() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "data1.csv", "1,2,3\n10,20\n");

        assert!(matches!(
            load_dataset(&path).unwrap_err(),
            DataError::Load { .. }
        ));
    }

    #[test]
    fn x_axis_only_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "data1.csv", "1,2,3\n");

        assert!(matches!(
            load_dataset(&path).unwrap_err(),
            DataError::Load { .. }
        ));
    }

    #[test]
    fn run_averages_all_repetitions() {
        let dir = TempDir::new().unwrap();
        write_csv(&dir, "data1.csv", "1,2,3\n10,20,30\n");
        write_csv(&dir, "data2.csv", "1,2,3\n30,40,50\n");

        let run = load_run(dir.path(), 2).unwrap();
        assert_eq!(run.x_axis, vec![1.0, 2.0, 3.0]);
        assert_eq!(run.rows, vec![vec![20.0, 30.0, 40.0]]);
        assert_eq!(run.dataset_count, 2);
    }

    #[test]
    fn run_fails_before_averaging_when_a_file_is_missing() {
        let dir = TempDir::new().unwrap();
        write_csv(&dir, "data1.csv", "1,2,3\n10,20,30\n");
        // data2.csv deliberately absent.

        assert!(matches!(
            load_run(dir.path(), 2).unwrap_err(),
            DataError::Load { .. }
        ));
    }
}
