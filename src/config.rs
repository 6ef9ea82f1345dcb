use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Audio output parameters
// ---------------------------------------------------------------------------

/// Parameters declared in every output container header.
///
/// Passed explicitly into the encoder rather than living as module-level
/// constants, so tests can vary them per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    pub channels: u16,
    pub bits_per_sample: u16,
    pub sample_rate: u32,
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self {
            channels: 1,
            bits_per_sample: 16,
            sample_rate: 44_100,
        }
    }
}

// ---------------------------------------------------------------------------
// Conversion job configuration
// ---------------------------------------------------------------------------

/// Where to find inputs and where to put outputs.
///
/// `source_suffix` is matched case-sensitively against the whole file name,
/// so the default `.CSV` matches `run1.CSV` but not `run1.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub source_suffix: String,
    pub dest_extension: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("datafiles"),
            output_dir: PathBuf::from("mp3"),
            source_suffix: ".CSV".to_string(),
            dest_extension: "mp3".to_string(),
        }
    }
}

impl ConvertConfig {
    /// Read overrides from a JSON file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Load `path` if it exists, otherwise use the built-in defaults.
    /// A present-but-malformed file is an error, not a silent fallback.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}
