//! Audio windowing: decode, trim, and normalize an input file.
//!
//! This is the front half of the transcription pipeline. Everything after it
//! operates on a mono 16 kHz buffer and never needs to know where the audio
//! came from or what the original rate and channel layout were.

use std::path::Path;

use crate::buffer::{AudioBuffer, TARGET_SAMPLE_RATE};
use crate::decode::decode_file;
use crate::error::{Error, Result};
use crate::time;

/// Decode `path`, trim to the `[start, end)` window, and normalize to mono
/// 16 kHz.
///
/// `start` and `end` are human time strings (`SS`, `MM:SS`, `HH:MM:SS`);
/// `None` means the beginning and the end of the audio respectively. An
/// inverted or out-of-range window yields an empty buffer rather than an
/// error, which downstream chunking turns into an empty transcript.
pub fn load(path: &Path, start: Option<&str>, end: Option<&str>) -> Result<AudioBuffer> {
    // Validate both offsets before the (expensive) decode so a typo in either
    // flag fails immediately.
    let start_ms = time::parse_offset(start)?;
    let end_override = end.map(|v| time::parse_offset(Some(v))).transpose()?;

    let decoded =
        decode_file(path).map_err(|err| Error::audio_load(path.display().to_string(), err))?;

    let end_ms = end_override.unwrap_or_else(|| decoded.len_ms());

    decoded
        .slice_ms(start_ms, end_ms)
        .downmix_to_mono()
        .resample(TARGET_SAMPLE_RATE)
        .map_err(|err| Error::audio_load(path.display().to_string(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_wav(path: &Path, channels: u16, sample_rate: u32, frames: usize) {
        let spec = hound::WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for _ in 0..frames {
            for _ in 0..channels {
                writer.write_sample(1000i16).unwrap();
            }
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn load_normalizes_stereo_to_mono_16k() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        write_wav(&path, 2, 16_000, 16_000); // 1 second of stereo

        let buffer = load(&path, None, None)?;
        assert_eq!(buffer.channels(), 1);
        assert_eq!(buffer.sample_rate(), TARGET_SAMPLE_RATE);
        assert_eq!(buffer.len_ms(), 1_000);
        Ok(())
    }

    #[test]
    fn load_applies_time_window() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.wav");
        write_wav(&path, 1, 16_000, 32_000); // 2 seconds

        let buffer = load(&path, Some("0.5"), Some("1.5"))?;
        assert_eq!(buffer.len_ms(), 1_000);
        Ok(())
    }

    #[test]
    fn inverted_window_yields_empty_buffer() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.wav");
        write_wav(&path, 1, 16_000, 16_000);

        // start="10", end="5" must produce silence-free emptiness, not an error.
        let buffer = load(&path, Some("10"), Some("5"))?;
        assert!(buffer.is_empty());
        Ok(())
    }

    #[test]
    fn load_resamples_to_target_rate() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hi-rate.wav");
        write_wav(&path, 1, 44_100, 44_100); // 1 second at 44.1 kHz

        let buffer = load(&path, None, None)?;
        assert_eq!(buffer.sample_rate(), TARGET_SAMPLE_RATE);
        assert_eq!(buffer.frames(), 16_000);
        Ok(())
    }

    #[test]
    fn bad_time_string_surfaces_invalid_time_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.wav");
        write_wav(&path, 1, 16_000, 16_000);

        let err = load(&path, Some("1:2:3:4"), None).unwrap_err();
        assert!(matches!(err, Error::InvalidTimeFormat(_)));
    }

    #[test]
    fn time_strings_are_validated_before_decoding() {
        // A bad --end must fail as a time-format error even when the file
        // itself would not decode.
        let err = load(Path::new("/nonexistent/audio.wav"), None, Some("1:2:3:4")).unwrap_err();
        assert!(matches!(err, Error::InvalidTimeFormat(_)));
    }

    #[test]
    fn astronomical_end_offset_clamps_to_audio_length() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.wav");
        write_wav(&path, 1, 16_000, 16_000);

        // Saturates to a near-u64::MAX offset in parsing; the window must
        // clamp it to the buffer length instead of overflowing.
        let buffer = load(&path, None, Some("99999999999999999999"))?;
        assert_eq!(buffer.len_ms(), 1_000);
        Ok(())
    }

    #[test]
    fn missing_file_surfaces_audio_load_error() {
        let err = load(Path::new("/nonexistent/audio.flac"), None, None).unwrap_err();
        assert!(matches!(err, Error::AudioLoad { .. }));
    }
}
