//! Additive synthesis folded through an FM-style phase warp.
//!
//! For phase `φ`:
//!
//! ```text
//! acc = Σ_{k=1..n} amp(k) · sin(k · φ · formant_shift)
//! out = 0.4 · sin(φ + sin(2φ) · fm_index + 0.2 · acc)
//! ```
//!
//! The additive sum is never output directly; it only bends the phase of
//! the carrier. `amp(k) = 1/k`, with even harmonics scaled down toward the
//! middle of the morph.

use std::f64::consts::PI;

use super::morph::MorphParams;
use crate::config::BankConfig;

/// Fixed output scale. Not a peak normalization: frames keep whatever peak
/// level the warp produces below it.
pub const HEADROOM: f64 = 0.4;

/// How strongly the additive sum bends the carrier phase.
pub const WARP_DEPTH: f64 = 0.2;

/// Phase in radians of `sample` within a cycle of `samples` points.
pub fn phase_of(sample: usize, samples: usize) -> f64 {
    (sample as f64 / samples as f64) * 2.0 * PI
}

/// Additive layer at `phase`. Summed in ascending harmonic order.
pub fn additive(params: &MorphParams, phase: f64) -> f64 {
    let even_gain = params.even_harmonic_gain();
    (1..=params.num_harmonics).fold(0.0, |acc, k| {
        let mut amp = 1.0 / k as f64;
        if k % 2 == 0 {
            amp *= even_gain;
        }
        acc + amp * (k as f64 * phase * params.formant_shift).sin()
    })
}

/// Final (scaled) output at `phase`.
pub fn synthesize_sample(params: &MorphParams, phase: f64) -> f64 {
    let acc = additive(params, phase);
    let modulator = (phase * 2.0).sin() * params.fm_index;
    (phase + modulator + acc * WARP_DEPTH).sin() * HEADROOM
}

/// One bank value, evaluated from its coordinates alone.
///
/// # Panics
///
/// If `config.frames < 2`; run `BankConfig::validate` first.
pub fn sample_at(frame: usize, sample: usize, config: &BankConfig) -> f64 {
    let params = MorphParams::for_frame(frame, config.frames);
    synthesize_sample(&params, phase_of(sample, config.samples))
}

/// A full single-cycle frame.
pub fn render_frame(params: &MorphParams, samples: usize) -> Vec<f64> {
    (0..samples)
        .map(|i| synthesize_sample(params, phase_of(i, samples)))
        .collect()
}
