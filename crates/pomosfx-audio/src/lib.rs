//! PomoSFX Audio
//!
//! This crate produces the Pomodoro timer's notification sounds and gives the
//! asset tools byte-exact access to the WAV container they travel in.
//!
//! # Overview
//!
//! Sounds are short sequences of sine tones and silence, rendered as signed
//! 16-bit mono PCM at 16 kHz and serialized into the canonical uncompressed
//! RIFF/WAVE layout. The same crate parses that layout back out of existing
//! files so the array converter can describe what it is embedding.
//!
//! # Determinism
//!
//! All synthesis is deterministic: the same frequency, duration, and rate
//! produce byte-identical samples across runs, which keeps the flashed
//! firmware assets stable from build to build.
//!
//! # Crate Structure
//!
//! - [`tone`] - sine tone and silence generation
//! - [`effects`] - the four stock notification sounds
//! - [`wav`] - WAV serialization and header parsing
//! - [`error`] - shared error type

pub mod effects;
pub mod error;
pub mod tone;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use wav::{read_wav_header, WavFormat, WavHeader};
