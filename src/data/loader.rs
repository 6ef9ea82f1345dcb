use std::path::Path;

use crate::error::ConvertError;

use super::model::SampleTable;

/// Parse a CSV capture into a flat sample buffer.
///
/// The first row is the header; column 0 of every data row is the
/// index/timestamp column and is dropped. Every remaining cell must coerce
/// to a sample value, otherwise the whole file fails.
pub fn load_table(path: &Path) -> Result<SampleTable, ConvertError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?;
    if headers.is_empty() {
        return Err(ConvertError::EmptyTable);
    }
    let column_names: Vec<String> = headers.iter().skip(1).map(|h| h.to_string()).collect();

    let mut samples = Vec::new();
    let mut data_rows = 0usize;

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        for (offset, cell) in record.iter().skip(1).enumerate() {
            let value = parse_sample(cell).ok_or_else(|| ConvertError::NonNumeric {
                row,
                column: column_names
                    .get(offset)
                    .cloned()
                    .unwrap_or_else(|| format!("#{}", offset + 1)),
                value: cell.to_string(),
            })?;
            samples.push(value);
        }
        data_rows += 1;
    }

    Ok(SampleTable {
        column_names,
        data_rows,
        samples,
    })
}

/// Coerce one cell to a 16-bit sample.
///
/// Integers wrap to the 16-bit range (two's complement, no clamping);
/// fractional values truncate toward zero first. Source values outside the
/// i16 range therefore alias, which matches the reference behavior of
/// writing raw numeric bytes without range checks.
fn parse_sample(cell: &str) -> Option<i16> {
    let cell = cell.trim();
    if let Ok(i) = cell.parse::<i64>() {
        return Some(i as i16);
    }
    if let Ok(f) = cell.parse::<f64>() {
        if f.is_finite() {
            return Some(f.trunc() as i64 as i16);
        }
    }
    None
}
