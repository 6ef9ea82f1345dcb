use std::path::Path;

use crate::config::AudioFormat;

/// Write `samples` to `path` as an uncompressed PCM WAV container.
///
/// Creates (or overwrites) the file, emits the header declaring the given
/// channel count, bit depth and sample rate, then the samples as consecutive
/// little-endian integers in the order given, with no padding or trailing
/// metadata. `finalize` patches the chunk sizes and flushes before the handle
/// closes; on an error path the writer's drop still releases the handle,
/// though a partial file may be left behind.
pub fn write_wav(
    path: &Path,
    samples: &[i16],
    format: &AudioFormat,
) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: format.channels,
        sample_rate: format.sample_rate,
        bits_per_sample: format.bits_per_sample,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::WavReader;
    use tempfile::tempdir;

    #[test]
    fn header_declares_the_given_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.mp3");
        write_wav(&path, &[0, 1, 2], &AudioFormat::default()).unwrap();

        let reader = WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_rate, 44_100);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    }

    #[test]
    fn payload_round_trips_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.mp3");
        write_wav(&path, &[100, -5], &AudioFormat::default()).unwrap();

        let mut reader = WavReader::open(&path).unwrap();
        let back: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(back, vec![100, -5]);
    }

    #[test]
    fn payload_bytes_are_little_endian() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.mp3");
        write_wav(&path, &[100, -5], &AudioFormat::default()).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // 100 = 0x0064, -5 = 0xFFFB, little-endian after the 44-byte header.
        assert_eq!(&bytes[bytes.len() - 4..], &[0x64, 0x00, 0xFB, 0xFF]);
    }

    #[test]
    fn zero_samples_writes_a_header_only_container() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.mp3");
        write_wav(&path, &[], &AudioFormat::default()).unwrap();

        let reader = WavReader::open(&path).unwrap();
        assert_eq!(reader.len(), 0);
        assert_eq!(reader.spec().sample_rate, 44_100);
    }

    #[test]
    fn declared_payload_length_matches_sample_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.mp3");
        let samples = vec![7i16; 123];
        write_wav(&path, &samples, &AudioFormat::default()).unwrap();

        let reader = WavReader::open(&path).unwrap();
        assert_eq!(reader.len() as usize, samples.len());
    }

    #[test]
    fn custom_format_parameters_are_honoured() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.mp3");
        let format = AudioFormat {
            channels: 1,
            bits_per_sample: 16,
            sample_rate: 8_000,
        };
        write_wav(&path, &[1], &format).unwrap();
        assert_eq!(WavReader::open(&path).unwrap().spec().sample_rate, 8_000);
    }

    #[test]
    fn existing_output_is_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.mp3");
        write_wav(&path, &[1, 2, 3, 4], &AudioFormat::default()).unwrap();
        write_wav(&path, &[9], &AudioFormat::default()).unwrap();

        let mut reader = WavReader::open(&path).unwrap();
        let back: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(back, vec![9]);
    }
}
