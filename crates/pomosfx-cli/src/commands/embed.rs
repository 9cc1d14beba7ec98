//! Embed command implementation
//!
//! Converts a WAV file to C array source text on stdout.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use pomosfx_embed::wav_to_c_array;

/// Run the embed command
///
/// # Arguments
/// * `input` - Path to the input WAV file
/// * `var_name` - C identifier for the generated array
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(input: &str, var_name: &str) -> Result<ExitCode> {
    execute(input, var_name).map(ExitCode::from)
}

/// Returns the process exit status value: 0 on success, 1 on any documented
/// failure condition.
fn execute(input: &str, var_name: &str) -> Result<u8> {
    let path = Path::new(input);

    if !path.exists() {
        eprintln!("{} file '{}' not found", "error:".red().bold(), input);
        return Ok(1);
    }

    if !has_wav_extension(input) {
        eprintln!(
            "{} file doesn't have a .wav extension",
            "warning:".yellow().bold()
        );
    }

    let data = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let source_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string());

    match wav_to_c_array(&data, &source_name, var_name) {
        Ok(text) => {
            print!("{text}");
            Ok(0)
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            Ok(1)
        }
    }
}

fn has_wav_extension(input: &str) -> bool {
    input.to_ascii_lowercase().ends_with(".wav")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pomosfx_audio::wav::write_wav_file;

    #[test]
    fn test_wav_extension_check_is_case_insensitive() {
        assert!(has_wav_extension("warning.wav"));
        assert!(has_wav_extension("WARNING.WAV"));
        assert!(!has_wav_extension("warning.mp3"));
        assert!(!has_wav_extension("warning"));
    }

    #[test]
    fn embed_valid_wav_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("beep.wav");
        write_wav_file(&path, &[0i16; 16], 16_000).unwrap();

        let status = execute(path.to_str().unwrap(), "wav_beep").unwrap();
        assert_eq!(status, 0);
    }

    #[test]
    fn embed_without_wav_extension_still_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("beep.raw");
        write_wav_file(&path, &[0i16; 16], 16_000).unwrap();

        let status = execute(path.to_str().unwrap(), "wav_beep").unwrap();
        assert_eq!(status, 0);
    }

    #[test]
    fn embed_missing_file_exits_nonzero() {
        let status = execute("/nonexistent/beep.wav", "wav_beep").unwrap();
        assert_eq!(status, 1);
    }

    #[test]
    fn embed_garbage_input_exits_nonzero() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("junk.wav");
        fs::write(&path, b"definitely not RIFF").unwrap();

        let status = execute(path.to_str().unwrap(), "wav_junk").unwrap();
        assert_eq!(status, 1);
    }
}
