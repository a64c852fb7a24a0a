//! The chunk → engine → transcript loop.
//!
//! Chunks are processed strictly sequentially: the engine's loaded model is
//! shared across calls but never used concurrently, and an engine failure on
//! any chunk aborts the whole run with no partial output. Per-chunk texts are
//! joined with a single space and the final string is trimmed at its outer
//! boundary only; whatever whitespace the engine produces inside a chunk's
//! text is preserved verbatim.

use tracing::info;

use crate::chunk::Chunk;
use crate::engine::TranscriptionEngine;
use crate::error::Result;
use crate::opts::Opts;

/// Transcribe `chunks` in order and assemble the final transcript.
///
/// An empty chunk list yields an empty transcript. Verbosity is threaded
/// through `opts` explicitly; nothing here touches global streams.
pub fn run<E: TranscriptionEngine>(engine: &mut E, chunks: &[Chunk], opts: &Opts) -> Result<String> {
    let total = chunks.len();
    let mut transcript = String::new();

    for (i, chunk) in chunks.iter().enumerate() {
        if opts.verbose {
            info!("chunk {}/{}", i + 1, total);
        }

        let text = engine.transcribe(chunk.samples(), opts.language)?;
        transcript.push_str(&text);
        transcript.push(' ');
    }

    Ok(transcript.trim().to_owned())
}
