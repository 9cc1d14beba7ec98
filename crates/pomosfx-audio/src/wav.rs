//! WAV container encode/decode.
//!
//! Byte-exact construction and parsing of the canonical uncompressed PCM
//! RIFF/WAVE layout: 12-byte RIFF header, `fmt ` chunk, `data` chunk. This
//! layout is the interchange contract between the sound generator and the
//! array converter, so every field is written and read with explicit
//! little-endian routines rather than any struct-packing shortcut.

mod format;
mod reader;
mod writer;


pub use format::WavFormat;
pub use reader::{read_wav_header, WavHeader};
pub use writer::{pcm16_bytes, write_wav, write_wav_file, write_wav_to_vec};
