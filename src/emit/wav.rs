//! WAV preview of a bank.
//!
//! All frames are written back to back as one mono 32-bit float stream, the
//! layout wavetable synths expect when importing a table from audio. Values
//! are narrowed to single precision, as in the header table.

use std::io::Cursor;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use super::artifact::write_atomic;
use crate::bank::WavetableBank;
use crate::error::BankError;

/// Nominal rate stamped on the file. Frames carry no real-time meaning.
pub const PREVIEW_SAMPLE_RATE: u32 = 48_000;

/// Encode `bank` as WAV bytes.
pub fn encode_wav(bank: &WavetableBank, sample_rate: u32) -> Result<Vec<u8>, BankError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut cursor = Cursor::new(Vec::with_capacity(44 + bank.as_slice().len() * 4));
    let mut writer = WavWriter::new(&mut cursor, spec)?;
    for &sample in bank.as_slice() {
        writer.write_sample(sample as f32)?;
    }
    writer.finalize()?;

    Ok(cursor.into_inner())
}

/// Encode and atomically write `bank` to `path`.
pub fn write_wav(
    bank: &WavetableBank,
    path: impl AsRef<Path>,
    sample_rate: u32,
) -> Result<(), BankError> {
    let bytes = encode_wav(bank, sample_rate)?;
    write_atomic(path, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BankConfig;
    use hound::WavReader;

    #[test]
    fn frames_concatenated_in_order() {
        let bank = WavetableBank::generate(&BankConfig::with_shape(4, 64)).unwrap();
        let bytes = encode_wav(&bank, PREVIEW_SAMPLE_RATE).unwrap();

        let mut reader = WavReader::new(Cursor::new(bytes)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, PREVIEW_SAMPLE_RATE);
        assert_eq!(spec.sample_format, SampleFormat::Float);

        let samples: Vec<f32> = reader.samples::<f32>().map(|s| s.unwrap()).collect();
        assert_eq!(samples.len(), 4 * 64);
        let narrowed: Vec<f32> = bank.as_slice().iter().map(|&s| s as f32).collect();
        assert_eq!(samples, narrowed);
        assert_eq!(samples[64], bank.get(1, 0).unwrap());
        assert_eq!(samples[64 + 63], bank.get(1, 63).unwrap());
    }

    #[test]
    fn written_file_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.wav");
        let bank = WavetableBank::generate(&BankConfig::with_shape(2, 32)).unwrap();
        write_wav(&bank, &path, 44_100).unwrap();

        let reader = WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_rate, 44_100);
        assert_eq!(reader.len(), 64);
    }
}
