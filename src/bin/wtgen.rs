//! wtgen: generate the morphing wavetable bank as a C header.
//!
//! Renders every artifact in memory first, then writes each one atomically.
//! With `--check`, nothing is written; the command fails if the existing
//! header differs from what would be generated.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{LevelFilter, info};

use wavetable_bank::bank::WavetableBank;
use wavetable_bank::config::BankConfig;
use wavetable_bank::emit::artifact::{is_up_to_date, write_atomic};
use wavetable_bank::emit::header::render_header;
use wavetable_bank::emit::manifest::BankManifest;

#[derive(Parser)]
#[command(name = "wtgen")]
#[command(about = "Generate the morphing wavetable bank header")]
#[command(version)]
struct Cli {
    /// JSON config file (frames, samples, symbol, guard)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of frames
    #[arg(long)]
    frames: Option<usize>,

    /// Override the samples per frame
    #[arg(long)]
    samples: Option<usize>,

    /// Header output path
    #[arg(short, long, default_value = "src/wavetables.h")]
    output: PathBuf,

    /// Also write a WAV preview of all frames
    #[cfg(feature = "wav")]
    #[arg(long)]
    wav: Option<PathBuf>,

    /// Also write a JSON manifest with per-frame parameters and the header digest
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Verify the existing header is current instead of writing
    #[arg(long)]
    check: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn resolve_config(cli: &Cli) -> Result<BankConfig> {
    let mut config = match &cli.config {
        Some(path) => BankConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => BankConfig::default(),
    };
    if let Some(frames) = cli.frames {
        config.frames = frames;
    }
    if let Some(samples) = cli.samples {
        config.samples = samples;
    }
    config.validate().context("invalid bank configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;
    info!(
        "Generating {} frames of {} samples...",
        config.frames, config.samples
    );

    let bank = WavetableBank::generate(&config)?;
    let header = render_header(&bank, &config);

    if cli.check {
        let current = is_up_to_date(&cli.output, header.as_bytes())
            .with_context(|| format!("failed to read {}", cli.output.display()))?;
        if !current {
            bail!("{} is out of date", cli.output.display());
        }
        info!("{} is up to date", cli.output.display());
        return Ok(());
    }

    let manifest_json = match &cli.manifest {
        Some(_) => Some(BankManifest::describe(&bank, &config, header.as_bytes()).to_json()?),
        None => None,
    };
    #[cfg(feature = "wav")]
    let wav_bytes = match &cli.wav {
        Some(_) => Some(wavetable_bank::emit::wav::encode_wav(
            &bank,
            wavetable_bank::emit::wav::PREVIEW_SAMPLE_RATE,
        )?),
        None => None,
    };

    write_atomic(&cli.output, header.as_bytes())
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    if let (Some(path), Some(json)) = (&cli.manifest, manifest_json) {
        write_atomic(path, json.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    #[cfg(feature = "wav")]
    if let (Some(path), Some(bytes)) = (&cli.wav, wav_bytes) {
        write_atomic(path, &bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    info!("Done! Written to {}", cli.output.display());
    Ok(())
}
