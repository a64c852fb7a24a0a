//! Fixed-duration chunking of a normalized audio buffer.
//!
//! A [`Chunk`] is the unit of work handed to the transcription engine:
//! a contiguous run of normalized `f32` samples covering `chunk_length_s`
//! seconds of audio (the final chunk may be shorter). Normalization from
//! integer PCM (`sample / 32768`) happens here, when the chunk is produced,
//! so the engine always sees amplitudes in `[-1.0, 1.0]`.

use crate::buffer::AudioBuffer;

/// An immutable slice of normalized audio, ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    samples: Vec<f32>,
}

impl Chunk {
    /// Mono samples in `[-1.0, 1.0]` at the buffer's sample rate.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Partition `buffer` into consecutive chunks of `chunk_length_s` seconds.
///
/// Chunks are returned in chronological order. A buffer of `L` ms yields
/// `ceil(L / chunk_length_ms)` chunks: all but the last span exactly
/// `chunk_length_s`, the last carries the remainder. An empty buffer yields
/// no chunks.
///
/// `chunk_length_s == 0` is clamped to 1 second. The CLI rejects zero before
/// it gets here; the clamp keeps the library call total for other frontends.
pub fn split(buffer: &AudioBuffer, chunk_length_s: u32) -> Vec<Chunk> {
    if buffer.is_empty() {
        return Vec::new();
    }

    let chunk_length_ms = chunk_length_s.max(1) as u64 * 1000;
    let frames_per_chunk = (chunk_length_ms * buffer.sample_rate() as u64 / 1000) as usize;
    let samples_per_chunk = frames_per_chunk * buffer.channels() as usize;

    buffer
        .samples()
        .chunks(samples_per_chunk)
        .map(|window| Chunk {
            samples: window.iter().map(|&s| s as f32 / 32768.0).collect(),
        })
        .collect()
}
