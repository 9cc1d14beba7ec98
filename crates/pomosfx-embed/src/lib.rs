//! PomoSFX Embed
//!
//! Renders a WAV file's bytes as a C `PROGMEM` array plus a paired length
//! constant, ready to paste into the firmware's audio data source file.
//!
//! The byte emission itself is format-agnostic, but the surrounding comment
//! block describes the audio format, so input that fails WAV header parsing
//! is rejected rather than encoded blind.

mod carray;

pub use carray::{render_array, wav_to_c_array};
