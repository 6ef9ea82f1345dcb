//! Generate demo sensor captures so the converter can be exercised:
//! `cargo run --bin generate_sample` writes a few `.CSV` files into
//! `datafiles/`, each a time index column plus sine-with-noise channels
//! already in the 16-bit sample range.

use std::fs;
use std::io::Write;
use std::path::Path;

/// Minimal deterministic PRNG (splitmix64) for repeatable noise.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    /// Uniform in [-1.0, 1.0).
    fn next_signed(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 52) as f64 - 1.0
    }
}

fn write_capture(
    path: &Path,
    rows: usize,
    tones_hz: &[f64],
    amplitude: f64,
    noise: f64,
    rng: &mut SimpleRng,
) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;

    write!(file, "t")?;
    for ch in 0..tones_hz.len() {
        write!(file, ",ch{ch}")?;
    }
    writeln!(file)?;

    for t in 0..rows {
        write!(file, "{t}")?;
        for &hz in tones_hz {
            let phase = 2.0 * std::f64::consts::PI * hz * t as f64 / 44_100.0;
            let value = amplitude * phase.sin() + noise * rng.next_signed();
            write!(file, ",{}", value.round() as i64)?;
        }
        writeln!(file)?;
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    let out_dir = Path::new("datafiles");
    fs::create_dir_all(out_dir)?;

    let mut rng = SimpleRng::new(42);

    write_capture(
        &out_dir.join("tone440.CSV"),
        44_100,
        &[440.0],
        12_000.0,
        300.0,
        &mut rng,
    )?;
    write_capture(
        &out_dir.join("chord.CSV"),
        22_050,
        &[261.6, 329.6, 392.0],
        6_000.0,
        150.0,
        &mut rng,
    )?;
    write_capture(
        &out_dir.join("quiet.CSV"),
        4_410,
        &[110.0],
        800.0,
        50.0,
        &mut rng,
    )?;

    println!("wrote 3 captures into {}", out_dir.display());
    Ok(())
}
