//! JSON sidecar describing a generated bank.
//!
//! Records the shape, the per-frame morph parameters and the SHA-256 of the
//! emitted header. Two runs with the same constants produce the same digest.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::bank::WavetableBank;
use crate::config::BankConfig;
use crate::dsp::morph::MorphParams;
use crate::dsp::synth::HEADROOM;
use crate::error::BankError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankManifest {
    /// Version of the generator that produced the artifact.
    pub generator: String,
    pub frames: usize,
    pub samples: usize,
    pub headroom: f64,
    pub symbol: String,
    pub guard: String,
    /// Hex SHA-256 of the header bytes.
    pub sha256: String,
    pub frame_info: Vec<FrameInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameInfo {
    pub index: usize,
    pub t: f64,
    pub num_harmonics: u32,
    pub fm_index: f64,
    pub formant_shift: f64,
    pub peak: f32,
    pub rms: f32,
}

impl BankManifest {
    pub fn describe(bank: &WavetableBank, config: &BankConfig, header: &[u8]) -> Self {
        let frame_info = (0..bank.frames())
            .filter_map(|index| {
                let params = MorphParams::for_frame(index, bank.frames());
                let stats = bank.frame_stats(index)?;
                Some(FrameInfo {
                    index,
                    t: params.t,
                    num_harmonics: params.num_harmonics,
                    fm_index: params.fm_index,
                    formant_shift: params.formant_shift,
                    peak: stats.peak,
                    rms: stats.rms,
                })
            })
            .collect();

        BankManifest {
            generator: crate::VERSION.to_string(),
            frames: bank.frames(),
            samples: bank.samples(),
            headroom: HEADROOM,
            symbol: config.symbol.clone(),
            guard: config.guard.clone(),
            sha256: sha256_hex(header),
            frame_info,
        }
    }

    pub fn to_json(&self) -> Result<String, BankError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
