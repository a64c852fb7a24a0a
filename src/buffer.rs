//! Decoded-audio buffer and its normalization transforms.
//!
//! Responsibilities:
//! - Hold interleaved integer PCM with its sample rate and channel count
//! - Trim to a millisecond window
//! - Downmix to mono
//! - Resample to the engine's target rate (when needed)
//!
//! Each transform consumes the buffer and returns the next state; the
//! pre-transform samples are dropped, matching the one-way trim → downmix →
//! resample flow of the transcription pipeline.

use anyhow::{Context, Result, anyhow, bail};
use rubato::{Resampler, SincFixedIn, WindowFunction};

/// The engine's required mono sample rate (Hz).
pub const TARGET_SAMPLE_RATE: u32 = 16_000;

/// Interleaved signed 16-bit PCM plus the metadata needed to slice it by time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
    channels: u16,
}

impl AudioBuffer {
    /// Wrap interleaved PCM samples.
    ///
    /// `samples.len()` must be a multiple of `channels`; the constructor trims
    /// any trailing partial frame rather than erroring, since decoders can
    /// emit one at end-of-stream.
    pub fn new(mut samples: Vec<i16>, sample_rate: u32, channels: u16) -> Self {
        let channels = channels.max(1);
        let rem = samples.len() % channels as usize;
        if rem != 0 {
            samples.truncate(samples.len() - rem);
        }

        Self {
            samples,
            sample_rate: sample_rate.max(1),
            channels,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in whole milliseconds, truncated.
    pub fn len_ms(&self) -> u64 {
        self.frames() as u64 * 1000 / self.sample_rate as u64
    }

    /// Trim to the `[start_ms, end_ms)` window.
    ///
    /// Out-of-range windows are not errors: `end_ms` is clamped to the buffer
    /// length, and `start_ms >= end_ms` (including a start past end-of-audio)
    /// yields an empty buffer, which downstream chunking turns into zero
    /// chunks and an empty transcript.
    pub fn slice_ms(self, start_ms: u64, end_ms: u64) -> Self {
        let start_frame = self.ms_to_frame(start_ms).min(self.frames());
        let end_frame = self.ms_to_frame(end_ms).min(self.frames());

        let channels = self.channels as usize;
        let samples = if start_frame >= end_frame {
            Vec::new()
        } else {
            self.samples[start_frame * channels..end_frame * channels].to_vec()
        };

        Self {
            samples,
            sample_rate: self.sample_rate,
            channels: self.channels,
        }
    }

    /// Downmix to one channel.
    ///
    /// Policy: equal-weight average across channels (simple, predictable).
    /// Already-mono buffers pass through untouched.
    pub fn downmix_to_mono(self) -> Self {
        if self.channels == 1 {
            return self;
        }

        let channels = self.channels as usize;
        let mut mono = Vec::with_capacity(self.frames());
        for frame in self.samples.chunks_exact(channels) {
            let acc: i32 = frame.iter().map(|&s| s as i32).sum();
            mono.push((acc / channels as i32) as i16);
        }

        Self {
            samples: mono,
            sample_rate: self.sample_rate,
            channels: 1,
        }
    }

    /// Resample a mono buffer to `target_rate`.
    ///
    /// No-op when already at the target rate. The input is fed through rubato
    /// in fixed blocks with a zero-padded flush block at the end (the sinc
    /// filter is stateful and would otherwise swallow its delay), then the
    /// output is truncated to the duration-exact frame count.
    pub fn resample(self, target_rate: u32) -> Result<Self> {
        if self.sample_rate == target_rate {
            return Ok(self);
        }
        if self.channels != 1 {
            bail!("resample requires a mono buffer, got {} channels", self.channels);
        }
        if self.samples.is_empty() {
            return Ok(Self {
                samples: Vec::new(),
                sample_rate: target_rate,
                channels: 1,
            });
        }

        let expected_frames =
            (self.frames() as u64 * target_rate as u64 / self.sample_rate as u64) as usize;

        // How many source frames we feed rubato per `process()` call.
        let in_block_frames = 2048;

        let mut resampler = SincFixedIn::<f32>::new(
            target_rate as f64 / self.sample_rate as f64,
            2.0,
            rubato::SincInterpolationParameters {
                sinc_len: 256,
                f_cutoff: 0.95,
                interpolation: rubato::SincInterpolationType::Linear,
                oversampling_factor: 256,
                window: WindowFunction::BlackmanHarris2,
            },
            in_block_frames,
            1, // mono
        )
        .map_err(|e| anyhow!(e))
        .context("failed to init resampler")?;

        // rubato expects exact block sizes; pad to a multiple and append one
        // extra silent block so the filter delay is fully flushed.
        let mut src: Vec<f32> = self.samples.iter().map(|&s| s as f32 / 32768.0).collect();
        let padded = src.len().div_ceil(in_block_frames) * in_block_frames + in_block_frames;
        src.resize(padded, 0.0);

        let mut out = Vec::with_capacity(expected_frames);
        for block in src.chunks_exact(in_block_frames) {
            let processed = resampler
                .process(&[block.to_vec()], None)
                .map_err(|e| anyhow!(e))
                .context("resampler process failed")?;
            if processed.len() != 1 {
                bail!("expected mono output from resampler");
            }

            out.extend(
                processed[0]
                    .iter()
                    .map(|&s| (s * 32768.0).clamp(i16::MIN as f32, i16::MAX as f32) as i16),
            );
        }

        out.truncate(expected_frames);

        Ok(Self {
            samples: out,
            sample_rate: target_rate,
            channels: 1,
        })
    }

    fn ms_to_frame(&self, ms: u64) -> usize {
        // Widen before multiplying: offsets come from user time strings and can
        // be arbitrarily large, and callers clamp the result to the frame count.
        (ms as u128 * self.sample_rate as u128 / 1000).min(usize::MAX as u128) as usize
    }
}
