use super::error::DataError;
use super::model::{AveragedRun, Dataset};

// ---------------------------------------------------------------------------
// Element-wise averaging across benchmark repetitions
// ---------------------------------------------------------------------------

/// Average the measurement rows of all datasets element-wise.
///
/// The X axis is taken from the first dataset; the X-axis row of every
/// dataset is stripped before summing. Every dataset must have the same
/// shape as the first, otherwise [`DataError::ShapeMismatch`].
pub fn average(datasets: &[Dataset]) -> Result<AveragedRun, DataError> {
    let first = datasets.first().ok_or_else(|| {
        DataError::load("<none>", "no datasets to average")
    })?;
    let (rows, cols) = first.shape();

    // The loader guarantees this for file-backed datasets, but `average` is
    // callable with hand-built ones too.
    if rows < 2 {
        return Err(DataError::load(
            first.path.clone(),
            format!(
                "expected an X-axis row plus at least one measurement row, found {rows} rows"
            ),
        ));
    }

    for ds in &datasets[1..] {
        let (r, c) = ds.shape();
        if (r, c) != (rows, cols) {
            return Err(DataError::ShapeMismatch {
                path: ds.path.clone(),
                rows: r,
                cols: c,
                expected_rows: rows,
                expected_cols: cols,
            });
        }
    }

    let mut sums: Vec<Vec<f64>> = vec![vec![0.0; cols]; rows - 1];
    for ds in datasets {
        for (sum_row, data_row) in sums.iter_mut().zip(ds.measurements()) {
            for (s, v) in sum_row.iter_mut().zip(data_row) {
                *s += v;
            }
        }
    }

    let n = datasets.len() as f64;
    for row in &mut sums {
        for v in row.iter_mut() {
            *v /= n;
        }
    }

    Ok(AveragedRun {
        x_axis: first.x_axis().to_vec(),
        rows: sums,
        dataset_count: datasets.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(name: &str, rows: Vec<Vec<f64>>) -> Dataset {
        Dataset {
            path: name.into(),
            rows,
        }
    }

    #[test]
    fn mean_of_two_repetitions() {
        let a = dataset("data1.csv", vec![vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]]);
        let b = dataset("data2.csv", vec![vec![1.0, 2.0, 3.0], vec![30.0, 40.0, 50.0]]);

        let run = average(&[a, b]).unwrap();
        assert_eq!(run.x_axis, vec![1.0, 2.0, 3.0]);
        assert_eq!(run.rows, vec![vec![20.0, 30.0, 40.0]]);
    }

    #[test]
    fn every_cell_is_the_per_dataset_mean() {
        let a = dataset(
            "data1.csv",
            vec![
                vec![1.0, 2.0],
                vec![4.0, 8.0],
                vec![100.0, 200.0],
            ],
        );
        let b = dataset(
            "data2.csv",
            vec![
                vec![1.0, 2.0],
                vec![6.0, 12.0],
                vec![300.0, 400.0],
            ],
        );
        let c = dataset(
            "data3.csv",
            vec![
                vec![1.0, 2.0],
                vec![8.0, 16.0],
                vec![500.0, 600.0],
            ],
        );

        let run = average(&[a, b, c]).unwrap();
        assert_eq!(run.rows, vec![vec![6.0, 12.0], vec![300.0, 400.0]]);
        assert_eq!(run.dataset_count, 3);
    }

    #[test]
    fn single_dataset_averages_to_itself() {
        let a = dataset("data1.csv", vec![vec![1.0], vec![42.0]]);
        let run = average(&[a]).unwrap();
        assert_eq!(run.rows, vec![vec![42.0]]);
    }

    #[test]
    fn column_count_mismatch_is_rejected() {
        let a = dataset("data1.csv", vec![vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]]);
        let b = dataset("data2.csv", vec![vec![1.0, 2.0], vec![30.0, 40.0]]);

        let err = average(&[a, b]).unwrap_err();
        match err {
            DataError::ShapeMismatch {
                cols, expected_cols, ..
            } => {
                assert_eq!(cols, 2);
                assert_eq!(expected_cols, 3);
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn row_count_mismatch_is_rejected() {
        let a = dataset("data1.csv", vec![vec![1.0], vec![10.0]]);
        let b = dataset("data2.csv", vec![vec![1.0], vec![10.0], vec![20.0]]);

        assert!(matches!(
            average(&[a, b]).unwrap_err(),
            DataError::ShapeMismatch { .. }
        ));
    }

    #[test]
    fn x_axis_comes_from_the_first_dataset() {
        let a = dataset("data1.csv", vec![vec![1.0, 2.0], vec![5.0, 5.0]]);
        // Deviating X axis downstream of the first dataset is ignored.
        let b = dataset("data2.csv", vec![vec![9.0, 9.0], vec![7.0, 7.0]]);

        let run = average(&[a, b]).unwrap();
        assert_eq!(run.x_axis, vec![1.0, 2.0]);
        assert_eq!(run.rows, vec![vec![6.0, 6.0]]);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            average(&[]).unwrap_err(),
            DataError::Load { .. }
        ));
    }

    #[test]
    fn x_axis_only_dataset_is_an_error() {
        let a = dataset("data1.csv", vec![vec![1.0, 2.0, 3.0]]);
        let err = average(&[a]).unwrap_err();
        match err {
            DataError::Load { reason, .. } => assert!(reason.contains("measurement row")),
            other => panic!("expected Load error, got {other:?}"),
        }
    }

    #[test]
    fn zero_row_dataset_is_an_error() {
        let a = dataset("data1.csv", vec![]);
        assert!(matches!(
            average(&[a]).unwrap_err(),
            DataError::Load { .. }
        ));
    }
}
