//! Sounds command implementation
//!
//! Generates the four stock notification sounds as 16 kHz, 16-bit mono WAV
//! files and prints the embed invocations to run next.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use pomosfx_audio::effects::Effect;
use pomosfx_audio::tone::DEFAULT_SAMPLE_RATE;
use pomosfx_audio::wav::write_wav_file;

/// Output directory for generated WAV files, relative to the working
/// directory.
pub const OUTPUT_DIR: &str = "data/audio";

/// Run the sounds command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run() -> Result<ExitCode> {
    let out_dir = Path::new(OUTPUT_DIR);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    println!("Generating audio files (16 kHz, 16-bit mono WAV)...\n");

    for effect in Effect::ALL {
        write_effect(out_dir, effect)?;
    }

    println!("\nAll files saved to: {}", out_dir.display());
    println!("\n{}", "Next step: convert to C arrays using:".cyan().bold());
    for effect in Effect::ALL {
        println!(
            "  pomosfx embed {}/{} {}",
            OUTPUT_DIR,
            effect.file_name(),
            effect.var_name()
        );
    }
    println!("\nThen combine the generated parts into audio_data.cpp");

    Ok(ExitCode::SUCCESS)
}

fn write_effect(out_dir: &Path, effect: Effect) -> Result<()> {
    let samples = effect.samples();
    let path = out_dir.join(effect.file_name());

    write_wav_file(&path, &samples, DEFAULT_SAMPLE_RATE)
        .with_context(|| format!("failed to write {}", path.display()))?;

    let file_size = fs::metadata(&path)
        .with_context(|| format!("failed to stat {}", path.display()))?
        .len();
    let duration = samples.len() as f64 / DEFAULT_SAMPLE_RATE as f64;

    println!(
        "{} {} ({} bytes, {} samples, {:.2}s)",
        "Generated:".green().bold(),
        path.display(),
        file_size,
        samples.len(),
        duration
    );

    Ok(())
}
