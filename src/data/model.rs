// ---------------------------------------------------------------------------
// SampleTable – one input file, parsed and flattened
// ---------------------------------------------------------------------------

/// A fully parsed input file, ready for encoding.
///
/// Column 0 of the source table is treated as an index/timestamp column and
/// excluded; the remaining columns' cells are flattened row-major (row 0's
/// selected cells, then row 1's, …) into `samples`. Immutable once built and
/// discarded after the file is encoded.
#[derive(Debug, Clone)]
pub struct SampleTable {
    /// Header labels for the selected columns (column 0's label excluded).
    pub column_names: Vec<String>,
    /// Number of data rows in the source table.
    pub data_rows: usize,
    /// Flat row-major sample buffer, `data_rows * column_names.len()` long.
    pub samples: Vec<i16>,
}

impl SampleTable {
    /// Number of samples in the buffer.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the table carried any data rows at all.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
