//! WAV encoder: float PCM buffers to 16-bit RIFF/WAVE bytes.
//!
//! Output is fully deterministic: a fixed 44-byte header (PCM format tag 1,
//! 16 bits per sample, little-endian) followed by interleaved sample data.

use crate::audio::AudioBuffer;
use crate::error::ToolError;

const HEADER_LEN: usize = 44;
const BITS_PER_SAMPLE: u16 = 16;

/// Encode a buffer as a complete WAV file.
///
/// Samples are clamped to [-1.0, 1.0] and quantized asymmetrically so both
/// endpoints of the signed 16-bit range are reachable: negative samples
/// scale by 32768, non-negative by 32767. Frames are interleaved with one
/// sample per channel, channel order preserved.
pub fn encode(buffer: &AudioBuffer) -> Result<Vec<u8>, ToolError> {
    buffer.validate()?;

    let channels = buffer.channels.len() as u16;
    let frames = buffer.frames();
    let bytes_per_sample = (BITS_PER_SAMPLE / 8) as u32;
    let block_align = channels * (BITS_PER_SAMPLE / 8);
    let byte_rate = buffer.sample_rate * block_align as u32;
    let data_size = (frames as u32) * (channels as u32) * bytes_per_sample;
    let riff_size = 36 + data_size;

    let mut out = Vec::with_capacity(HEADER_LEN + data_size as usize);

    // RIFF header
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&riff_size.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&buffer.sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());
    for frame in 0..frames {
        for channel in &buffer.channels {
            out.extend_from_slice(&quantize(channel[frame]).to_le_bytes());
        }
    }

    Ok(out)
}

/// Clamp and scale one float sample to a signed 16-bit value.
fn quantize(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0) as f64;
    let scaled = if clamped < 0.0 {
        (clamped * 32768.0).round()
    } else {
        (clamped * 32767.0).round()
    };
    scaled as i16
}
