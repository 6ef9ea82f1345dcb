use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{AudioFormat, ConvertConfig};
use crate::data::loader::load_table;
use crate::error::ConvertError;
use crate::scan::scan_dir;
use crate::wav::write_wav;

/// Convert one input file: parse the table, encode the WAV.
///
/// Nothing is written unless the table parsed and coerced cleanly, so a
/// loader failure leaves no output file behind.
pub fn convert_file(
    input: &Path,
    output: &Path,
    format: &AudioFormat,
) -> Result<(), ConvertError> {
    let table = load_table(input)?;
    write_wav(output, &table.samples, format)?;
    Ok(())
}

/// Derive the output path for an input: output dir + base name + dest ext.
fn output_path(config: &ConvertConfig, input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    config
        .output_dir
        .join(format!("{stem}.{}", config.dest_extension))
}

/// Run the whole batch: scan, then convert each file sequentially in
/// scanner order. The first failure aborts the remaining batch — there is
/// no per-file isolation. Returns the number of files converted.
pub fn run(config: &ConvertConfig, format: &AudioFormat) -> Result<usize> {
    let inputs = scan_dir(&config.input_dir, &config.source_suffix)
        .with_context(|| format!("scanning {}", config.input_dir.display()))?;

    if inputs.is_empty() {
        log::info!(
            "no '{}' files in {}",
            config.source_suffix,
            config.input_dir.display()
        );
        return Ok(0);
    }

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating output dir {}", config.output_dir.display()))?;

    let mut converted = 0;
    for input in inputs {
        let output = output_path(config, &input);
        convert_file(&input, &output, format)
            .with_context(|| format!("converting {}", input.display()))?;
        log::info!("{} -> {}", input.display(), output.display());
        converted += 1;
    }
    Ok(converted)
}
