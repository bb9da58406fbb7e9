use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dataset – one loaded benchmark file
// ---------------------------------------------------------------------------

/// One benchmark file's numeric table. Row 0 is the shared X axis (bytes of
/// data iterated upon), rows 1.. are timing series, one value per sample
/// point. All rows have identical length; the loader rejects ragged input.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// File the table was read from, kept for diagnostics.
    pub path: PathBuf,
    /// All rows, X axis included.
    pub rows: Vec<Vec<f64>>,
}

impl Dataset {
    /// Shape as (rows, columns). Columns are taken from the first row.
    pub fn shape(&self) -> (usize, usize) {
        let cols = self.rows.first().map(Vec::len).unwrap_or(0);
        (self.rows.len(), cols)
    }

    /// The shared X-axis row.
    pub fn x_axis(&self) -> &[f64] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// All rows except the X axis.
    pub fn measurements(&self) -> &[Vec<f64>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// AveragedRun – element-wise mean across all datasets
// ---------------------------------------------------------------------------

/// The result of averaging N datasets: the shared X axis plus the
/// element-wise mean of every measurement row. Same shape as one dataset
/// minus its X-axis row.
#[derive(Debug, Clone)]
pub struct AveragedRun {
    /// Shared X-axis values, taken from the first dataset.
    pub x_axis: Vec<f64>,
    /// Averaged measurement rows, in file order.
    pub rows: Vec<Vec<f64>>,
    /// How many datasets went into the mean.
    pub dataset_count: usize,
}

impl AveragedRun {
    /// Number of averaged measurement rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the run holds no measurement rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SeriesConfig – which averaged rows get plotted, and how
// ---------------------------------------------------------------------------

/// Maps one averaged row index to a legend label and an on/off switch.
#[derive(Debug, Clone)]
pub struct SeriesConfig {
    pub row: usize,
    pub label: &'static str,
    pub enabled: bool,
}

/// The six series the layout benchmark emits, in row order. Only the two
/// construction rows are plotted by default; the iteration variants can be
/// toggled on from the side panel.
pub fn default_series() -> Vec<SeriesConfig> {
    let entry = |row, label, enabled| SeriesConfig { row, label, enabled };
    vec![
        entry(0, "Array of structs", true),
        entry(1, "Array of structs (single access)", false),
        entry(2, "Array of structs (multiple access)", false),
        entry(3, "Struct of arrays", true),
        entry(4, "Struct of arrays (single access)", false),
        entry(5, "Struct of arrays (multiple access)", false),
    ]
}

// ---------------------------------------------------------------------------
// ReferenceLine – vertical cache-size annotations
// ---------------------------------------------------------------------------

/// A fixed vertical annotation marking a cache-size boundary. Always drawn
/// dashed, independent of the data range.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceLine {
    /// X position in bytes.
    pub x: f64,
    pub label: &'static str,
    /// Line color as (r, g, b); the data layer stays free of egui types.
    pub rgb: (u8, u8, u8),
}

/// The two cache boundaries of the benchmark machine: 256 kB L1 (green) and
/// 1024 kB L2 (magenta).
pub const CACHE_REFERENCE_LINES: [ReferenceLine; 2] = [
    ReferenceLine {
        x: 256_000.0,
        label: "L1 Cache size",
        rgb: (0, 200, 0),
    },
    ReferenceLine {
        x: 1_024_000.0,
        label: "L2 Cache size",
        rgb: (220, 0, 220),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_shape_and_split() {
        let ds = Dataset {
            path: "data1.csv".into(),
            rows: vec![vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]],
        };
        assert_eq!(ds.shape(), (2, 3));
        assert_eq!(ds.x_axis(), &[1.0, 2.0, 3.0]);
        assert_eq!(ds.measurements(), &[vec![10.0, 20.0, 30.0]]);
    }

    #[test]
    fn default_series_plots_both_construction_rows() {
        let series = default_series();
        assert_eq!(series.len(), 6);

        let enabled: Vec<usize> = series
            .iter()
            .filter(|s| s.enabled)
            .map(|s| s.row)
            .collect();
        assert_eq!(enabled, vec![0, 3]);

        assert_eq!(series[0].label, "Array of structs");
        assert_eq!(series[3].label, "Struct of arrays");
    }

    #[test]
    fn reference_lines_sit_on_the_cache_boundaries() {
        assert_eq!(CACHE_REFERENCE_LINES[0].x, 256_000.0);
        assert_eq!(CACHE_REFERENCE_LINES[1].x, 1_024_000.0);
    }
}
