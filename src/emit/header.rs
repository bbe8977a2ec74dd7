//! C header rendering.
//!
//! Produces an include-guarded `const float NAME[FRAMES][SAMPLES]`
//! declaration. Lines are joined with `\n`, with no trailing newline after
//! `#endif`.

use crate::bank::WavetableBank;
use crate::config::BankConfig;

/// Render `bank` as a C header declaring `config.symbol`, guarded by
/// `config.guard`. The declared shape is the bank's own.
pub fn render_header(bank: &WavetableBank, config: &BankConfig) -> String {
    let guard = &config.guard;
    // "-0.123456f, " is 12 bytes per value
    let mut out = String::with_capacity(bank.as_slice().len() * 12 + 256);

    out.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));
    out.push_str(&format!(
        "const float {}[{}][{}] = {{\n",
        config.symbol,
        bank.frames(),
        bank.samples()
    ));

    for frame in bank.iter_frames() {
        out.push_str("    { ");
        for (i, value) in frame.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&format_value(*value));
        }
        out.push_str(" },\n");
    }

    out.push_str("};\n");
    out.push('\n');
    out.push_str("#endif");
    out
}

/// Six fractional digits plus the single-precision suffix, rounded once
/// from the full-precision value.
fn format_value(value: f64) -> String {
    format!("{value:.6}f")
}
