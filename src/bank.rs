//! Wavetable bank — the generated, immutable `[frames][samples]` table.

use log::debug;

use crate::config::BankConfig;
use crate::dsp::morph::MorphParams;
use crate::dsp::synth::render_frame;
use crate::error::{BankError, ConfigError};

/// Fixed-shape table of single-cycle frames, stored row-major.
///
/// Frame index encodes morph position, sample index encodes phase. Values are
/// kept at synthesis precision; the emitted table and [`get`](Self::get) are
/// single precision. There is no way to mutate a bank after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct WavetableBank {
    frames: usize,
    samples: usize,
    data: Vec<f64>,
}

/// Level summary of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub peak: f32,
    pub rms: f32,
}

impl WavetableBank {
    /// Synthesize the full bank. Constants are checked before any frame is
    /// rendered.
    pub fn generate(config: &BankConfig) -> Result<Self, BankError> {
        let len = config.validate()?;
        let (frames, samples) = (config.frames, config.samples);

        let mut data = Vec::with_capacity(len);
        for frame in 0..frames {
            let params = MorphParams::for_frame(frame, frames);
            debug!(
                "frame {frame}: t={:.4} harmonics={} fm_index={:.4} formant_shift={:.4}",
                params.t, params.num_harmonics, params.fm_index, params.formant_shift
            );
            data.extend(render_frame(&params, samples));
        }

        Ok(WavetableBank {
            frames,
            samples,
            data,
        })
    }

    /// Wrap precomputed row-major data. The shape follows the same rules as
    /// [`BankConfig::validate`] and the length must match it.
    pub fn from_raw(frames: usize, samples: usize, data: Vec<f64>) -> Result<Self, ConfigError> {
        let expected = checked_len(frames, samples)?;
        if data.len() != expected {
            return Err(ConfigError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(WavetableBank {
            frames,
            samples,
            data,
        })
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn frame(&self, frame: usize) -> Option<&[f64]> {
        if frame >= self.frames {
            return None;
        }
        let start = frame * self.samples;
        Some(&self.data[start..start + self.samples])
    }

    /// A value as the engine reads it from the emitted `float` table.
    pub fn get(&self, frame: usize, sample: usize) -> Option<f32> {
        if sample >= self.samples {
            return None;
        }
        self.frame(frame).map(|f| f[sample] as f32)
    }

    pub fn iter_frames(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.samples)
    }

    /// All samples, frame after frame.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Peak and RMS of a frame. Informational; the bank is never rescaled.
    pub fn frame_stats(&self, frame: usize) -> Option<FrameStats> {
        let samples = self.frame(frame)?;
        let peak = samples.iter().fold(0.0f64, |m, s| m.max(s.abs()));
        let sum_sq: f64 = samples.iter().map(|s| s * s).sum();
        let rms = (sum_sq / samples.len() as f64).sqrt();
        Some(FrameStats {
            peak: peak as f32,
            rms: rms as f32,
        })
    }
}

/// Number of values in a `frames × samples` bank, if that shape is valid.
pub(crate) fn checked_len(frames: usize, samples: usize) -> Result<usize, ConfigError> {
    if frames < 2 {
        return Err(ConfigError::TooFewFrames { frames });
    }
    if samples == 0 {
        return Err(ConfigError::NoSamples);
    }
    frames
        .checked_mul(samples)
        .filter(|len| {
            len.checked_mul(std::mem::size_of::<f64>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(ConfigError::ShapeOverflow { frames, samples })
}
