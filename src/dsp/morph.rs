//! Per-frame morph parameters.

use std::f64::consts::PI;

/// Synthesis parameters derived from a frame's morph position `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphParams {
    /// Morph position.
    pub t: f64,
    /// Harmonics summed by the additive layer (always ≥ 1).
    pub num_harmonics: u32,
    /// Depth of the second-harmonic phase warp.
    pub fm_index: f64,
    /// Multiplier applied to every harmonic's frequency, 1.0 to 1.5.
    pub formant_shift: f64,
}

impl MorphParams {
    pub fn at(t: f64) -> Self {
        let bump = (t * PI).sin();
        MorphParams {
            t,
            num_harmonics: 1 + (t * 30.0 + bump * 20.0).floor() as u32,
            fm_index: t * 2.5 * bump,
            formant_shift: 1.0 + t * 0.5,
        }
    }

    /// Parameters for `frame` out of `frames`.
    ///
    /// # Panics
    ///
    /// If `frames < 2`. Check the shape with `BankConfig::validate` first.
    pub fn for_frame(frame: usize, frames: usize) -> Self {
        assert!(frames >= 2, "morph position needs at least 2 frames, got {frames}");
        Self::at(morph_position(frame, frames))
    }

    /// Gain on even harmonics: 1 at both ends, 0 at the midpoint.
    pub fn even_harmonic_gain(&self) -> f64 {
        1.0 - (self.t * PI).sin()
    }
}

/// Morph position of a frame: `frame / (frames - 1)`.
pub(crate) fn morph_position(frame: usize, frames: usize) -> f64 {
    frame as f64 / (frames - 1) as f64
}
