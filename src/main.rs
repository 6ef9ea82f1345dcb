mod batch;
mod config;
mod data;
mod error;
mod scan;
mod wav;

use std::path::Path;

use anyhow::Result;
use config::{AudioFormat, ConvertConfig};

/// Optional override file for the folder/extension constants.
const CONFIG_FILE: &str = "csv2wav.json";

fn main() -> Result<()> {
    env_logger::init();

    let config = ConvertConfig::load_or_default(Path::new(CONFIG_FILE))?;
    let format = AudioFormat::default();

    let converted = batch::run(&config, &format)?;
    log::info!(
        "converted {converted} file(s) into {}",
        config.output_dir.display()
    );
    Ok(())
}
