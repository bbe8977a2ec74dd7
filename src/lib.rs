pub mod bank;
pub mod config;
pub mod dsp;
pub mod emit;
pub mod error;

use crate::bank::WavetableBank;
use crate::config::BankConfig;
use crate::error::BankError;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate a bank and render it straight to header text.
pub fn generate_header(config: &BankConfig) -> Result<String, BankError> {
    let bank = WavetableBank::generate(config)?;
    Ok(emit::header::render_header(&bank, config))
}

/// Generate a bank and atomically write its header to `path`.
pub fn write_header(
    config: &BankConfig,
    path: impl AsRef<std::path::Path>,
) -> Result<(), BankError> {
    let text = generate_header(config)?;
    emit::artifact::write_atomic(path, text.as_bytes())
}
