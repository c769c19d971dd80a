//! Trim an audio buffer to a time window.

use crate::audio::AudioBuffer;
use crate::error::ToolError;

/// Copy the `[start_seconds, end_seconds)` window out of `buffer`.
///
/// Sample indices are floored, matching how the widget maps times to
/// samples; `end_seconds` past the end of the buffer is clamped rather
/// than rejected, since players routinely report a duration a hair short
/// of the decoded length.
pub fn trim(
    buffer: &AudioBuffer,
    start_seconds: f64,
    end_seconds: f64,
) -> Result<AudioBuffer, ToolError> {
    buffer.validate()?;

    if !start_seconds.is_finite() || start_seconds < 0.0 {
        return Err(ToolError::invalid_input(
            "start time",
            "must be zero or greater",
        ));
    }
    if !end_seconds.is_finite() || start_seconds >= end_seconds {
        return Err(ToolError::invalid_input(
            "end time",
            "must be greater than start time",
        ));
    }

    let rate = buffer.sample_rate as f64;
    let frames = buffer.frames();
    let start_frame = (start_seconds * rate).floor() as usize;
    let end_frame = ((end_seconds * rate).floor() as usize).min(frames);

    if start_frame >= frames {
        return Err(ToolError::invalid_input(
            "start time",
            "is past the end of the audio",
        ));
    }

    let channels = buffer
        .channels
        .iter()
        .map(|channel| channel[start_frame..end_frame].to_vec())
        .collect();

    AudioBuffer::new(buffer.sample_rate, channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(frames: usize) -> AudioBuffer {
        let samples: Vec<f32> = (0..frames).map(|i| i as f32 / frames as f32).collect();
        AudioBuffer::new(1000, vec![samples]).unwrap()
    }

    #[test]
    fn keeps_the_requested_window() {
        let trimmed = trim(&ramp(1000), 0.25, 0.75).unwrap();
        assert_eq!(trimmed.frames(), 500);
        assert_eq!(trimmed.channels[0][0], 0.25);
        assert_eq!(trimmed.sample_rate, 1000);
    }

    #[test]
    fn clamps_end_past_the_buffer() {
        let trimmed = trim(&ramp(1000), 0.5, 99.0).unwrap();
        assert_eq!(trimmed.frames(), 500);
    }

    #[test]
    fn preserves_every_channel() {
        let buffer =
            AudioBuffer::new(100, vec![vec![0.1; 100], vec![0.2; 100], vec![0.3; 100]]).unwrap();
        let trimmed = trim(&buffer, 0.0, 0.1).unwrap();
        assert_eq!(trimmed.channels.len(), 3);
        assert_eq!(trimmed.frames(), 10);
        assert_eq!(trimmed.channels[2][0], 0.3);
    }

    #[test]
    fn rejects_inverted_window() {
        let err = trim(&ramp(100), 0.5, 0.25).unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput { field, .. } if field == "end time"));
    }

    #[test]
    fn rejects_negative_start() {
        assert!(trim(&ramp(100), -0.1, 0.05).is_err());
    }

    #[test]
    fn rejects_start_past_the_end() {
        let err = trim(&ramp(100), 5.0, 6.0).unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput { field, .. } if field == "start time"));
    }
}
