//! WAV serialization.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::AudioResult;

use super::WavFormat;

/// Writes a complete WAV stream to a writer.
///
/// Emits the RIFF header, the 16-byte PCM `fmt ` chunk, and the `data`
/// chunk, every field little-endian. The declared RIFF size is
/// `36 + data_size` per the container invariant.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk (16-byte payload for uncompressed PCM)
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV stream to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Serializes samples as little-endian 16-bit PCM bytes, in order.
pub fn pcm16_bytes(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}

/// Writes a mono 16-bit WAV file.
///
/// Creates or overwrites the file at `path` in a single write. Filesystem
/// errors propagate to the caller; there is no retry.
pub fn write_wav_file(path: &Path, samples: &[i16], sample_rate: u32) -> AudioResult<()> {
    let format = WavFormat::mono(sample_rate);
    let wav = write_wav_to_vec(&format, &pcm16_bytes(samples));
    fs::write(path, wav)?;
    Ok(())
}
