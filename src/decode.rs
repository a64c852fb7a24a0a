//! Container/codec decoding built on Symphonia.
//!
//! This module isolates codec-level concerns:
//! - probing a file and selecting a default audio track
//! - decoding packets into interleaved integer PCM
//! - handling Symphonia's error model in a predictable way
//!
//! The rest of the crate only sees [`decode_file`], which returns a fully
//! decoded [`AudioBuffer`]; windowing, downmix, and resampling live elsewhere.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, Decoder, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader, Packet, Track};
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::buffer::AudioBuffer;

/// Decode an entire audio file into an interleaved PCM buffer.
///
/// The whole file is decoded eagerly; the window trim happens afterwards on
/// the buffer, which keeps millisecond slicing exact instead of approximating
/// it with container-level seeks.
pub fn decode_file(path: &Path) -> Result<AudioBuffer> {
    let (mut format, track) = probe_file(path)?;
    let mut decoder = make_decoder_for_track(&track)?;
    let track_id = track.id;

    let mut samples: Vec<i16> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<i16>> = None;
    let mut sample_rate = 0u32;
    let mut channels = 0u16;

    loop {
        let Some(packet) = next_packet(&mut format)? else {
            break;
        };

        // Ignore packets from non-audio tracks.
        if packet.track_id() != track_id {
            continue;
        }

        decode_packet_and_then(&mut decoder, &packet, |decoded| {
            let spec = *decoded.spec();
            if sample_rate == 0 {
                sample_rate = spec.rate;
                channels = spec.channels.count() as u16;
                if channels == 0 {
                    bail!("decoded audio had zero channels");
                }
            }

            // Copy decoded PCM into our interleaved scratch buffer.
            let buf = sample_buf.get_or_insert_with(|| {
                SampleBuffer::<i16>::new(decoded.capacity() as u64, spec)
            });
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
            Ok(())
        })?;
    }

    if sample_rate == 0 {
        bail!("no decodable audio packets found");
    }

    Ok(AudioBuffer::new(samples, sample_rate, channels))
}

/// Probe the container and pick a default audio track.
///
/// Track selection policy:
/// - choose the first track that looks decodable (codec != NULL)
/// - and has a known sample rate (required for resampling decisions downstream)
fn probe_file(path: &Path) -> Result<(Box<dyn FormatReader>, Track)> {
    let file =
        File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;

    let mss_opts = MediaSourceStreamOptions {
        // Symphonia expects a power-of-two buffer > 32KiB for good probing behavior.
        buffer_len: 256 * 1024,
    };
    let mss = MediaSourceStream::new(Box::new(file), mss_opts);

    // The file extension improves probe accuracy for ambiguous containers.
    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let format_opts: FormatOptions = Default::default();
    let metadata_opts: MetadataOptions = Default::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &format_opts, &metadata_opts)
        .map_err(|e| anyhow!(e))
        .context("failed to probe media file")?;

    let format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL && t.codec_params.sample_rate.is_some())
        .cloned()
        .ok_or_else(|| anyhow!("no audio track found"))?;

    Ok((format, track))
}

/// Create a decoder for the given audio track using Symphonia's default
/// codec registry.
fn make_decoder_for_track(track: &Track) -> Result<Box<dyn Decoder>> {
    let decoder_opts: DecoderOptions = Default::default();

    symphonia::default::get_codecs()
        .make(&track.codec_params, &decoder_opts)
        .map_err(|e| anyhow!(e))
        .context("failed to create decoder for audio track")
}

/// Read the next packet, treating IO errors as "end of stream".
fn next_packet(format: &mut Box<dyn FormatReader>) -> Result<Option<Packet>> {
    match format.next_packet() {
        Ok(p) => Ok(Some(p)),
        Err(SymphoniaError::IoError(_)) => Ok(None),
        Err(e) => Err(anyhow!(e)).context("failed reading packet"),
    }
}

/// Decode a packet and hand the decoded buffer to a callback.
///
/// Return value semantics:
/// - `Ok(true)`  → a decoded audio buffer was produced and `on_decoded` ran
/// - `Ok(false)` → packet was skipped (recoverable condition)
/// - `Err(_)`    → fatal decoder error
///
/// Error handling policy:
/// - `DecodeError` → skip bad frame (common with some codecs)
/// - `IoError`     → treat as end-of-stream
/// - other errors  → bubble up with context
fn decode_packet_and_then(
    decoder: &mut Box<dyn Decoder>,
    packet: &Packet,
    mut on_decoded: impl FnMut(symphonia::core::audio::AudioBufferRef<'_>) -> Result<()>,
) -> Result<bool> {
    match decoder.decode(packet) {
        Ok(buf) => {
            on_decoded(buf)?;
            Ok(true)
        }

        // Recoverable: corrupted frame, but decoding can continue.
        Err(SymphoniaError::DecodeError(_)) => Ok(false),

        // Treat IO errors as graceful end-of-stream.
        Err(SymphoniaError::IoError(_)) => Ok(false),

        // Anything else is considered fatal.
        Err(e) => Err(anyhow!(e)).context("decoder failure"),
    }
}
