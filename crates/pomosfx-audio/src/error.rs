//! Error types for audio asset preparation.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while producing or parsing WAV data.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Input does not start with a RIFF container marker.
    #[error("not a valid WAV file (missing RIFF header)")]
    MissingRiff,

    /// RIFF container does not carry the WAVE form type.
    #[error("not a valid WAV file (missing WAVE marker)")]
    MissingWave,

    /// Chunk scan exhausted the buffer without locating a `fmt ` chunk.
    #[error("no fmt chunk found in WAV file")]
    MissingFmtChunk,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
