//! Multi-channel floating-point PCM buffer.

use crate::error::ToolError;

/// Decoded audio: one sample vector per channel, samples nominally in
/// [-1.0, 1.0]. Out-of-range samples are tolerated here and clamped at
/// encode time.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel data, all vectors the same length.
    pub channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    /// Build a buffer, rejecting malformed shapes up front.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> Result<Self, ToolError> {
        let buffer = AudioBuffer {
            sample_rate,
            channels,
        };
        buffer.validate()?;
        Ok(buffer)
    }

    /// Check the shape invariants: at least one channel, equal channel
    /// lengths, nonzero sample rate.
    pub fn validate(&self) -> Result<(), ToolError> {
        if self.sample_rate == 0 {
            return Err(ToolError::InvalidBuffer(
                "sample rate must be nonzero".to_string(),
            ));
        }
        let first = match self.channels.first() {
            Some(channel) => channel.len(),
            None => {
                return Err(ToolError::InvalidBuffer(
                    "buffer has no channels".to_string(),
                ));
            }
        };
        for (i, channel) in self.channels.iter().enumerate() {
            if channel.len() != first {
                return Err(ToolError::InvalidBuffer(format!(
                    "channel {i} has {} samples, expected {first}",
                    channel.len()
                )));
            }
        }
        Ok(())
    }

    /// Samples per channel.
    pub fn frames(&self) -> usize {
        self.channels.first().map_or(0, |c| c.len())
    }

    /// Playback length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }
}
