//! The transcription engine seam and the built-in Whisper implementation.
//!
//! The pipeline only ever talks to [`TranscriptionEngine`], so tests can swap
//! in a mock that returns canned text, and the Whisper specifics (context
//! loading, `FullParams` configuration, segment iteration) stay in one place.

use std::path::Path;

use anyhow::{Context, anyhow};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::error::{Error, Result};
use crate::language::Language;
use crate::logging::silence_whisper_logs;

/// Maps one chunk of mono 16 kHz samples to text.
///
/// Implementations own whatever long-lived state they need (a loaded model);
/// the pipeline calls `transcribe` once per chunk, strictly sequentially.
pub trait TranscriptionEngine {
    /// Transcribe one chunk of normalized mono samples.
    ///
    /// `language` is a hint; `None` lets the engine auto-detect.
    fn transcribe(&mut self, samples: &[f32], language: Option<Language>) -> Result<String>;
}

/// Built-in engine powered by `whisper-rs` / whisper.cpp.
pub struct WhisperEngine {
    ctx: WhisperContext,
}

impl WhisperEngine {
    /// Load a whisper.cpp ggml model from disk.
    ///
    /// We fail fast with a `ModelLoad` error when the file is missing so the
    /// user gets a pointer to `model-downloader` instead of a C-side crash.
    pub fn load(model_path: &Path) -> Result<Self> {
        // whisper.cpp is very chatty during model loading; keep it quiet.
        // This function is idempotent (safe to call multiple times).
        silence_whisper_logs();

        let display = model_path.display().to_string();
        if !model_path.is_file() {
            return Err(Error::model_load(
                display,
                anyhow!("model file not found (fetch it with `model-downloader`)"),
            ));
        }

        let ctx = WhisperContext::new_with_params(&display, WhisperContextParameters::default())
            .context("failed to initialize whisper context")
            .map_err(|err| Error::model_load(display.clone(), err))?;

        Ok(Self { ctx })
    }

    fn full_params(language: Option<Language>) -> FullParams<'static, 'static> {
        let mut params = FullParams::new(SamplingStrategy::BeamSearch {
            beam_size: 5,
            patience: 1.0,
        });

        params.set_n_threads(num_cpus::get() as i32);
        params.set_translate(false);
        params.set_language(language.map(|l| l.code()));
        params.set_no_context(true);
        params.set_single_segment(false);

        params.set_print_progress(false);
        params.set_print_special(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);

        params
    }
}

impl TranscriptionEngine for WhisperEngine {
    fn transcribe(&mut self, samples: &[f32], language: Option<Language>) -> Result<String> {
        let params = Self::full_params(language);

        let mut state = self
            .ctx
            .create_state()
            .context("failed to create whisper state")
            .map_err(Error::transcription)?;

        state
            .full(params, samples)
            .context("failed to run whisper full()")
            .map_err(Error::transcription)?;

        let mut text = String::new();
        for segment in state.as_iter() {
            let segment_text = segment
                .to_str()
                .context("failed to get segment text")
                .map_err(Error::transcription)?;
            text.push_str(segment_text);
        }

        Ok(text)
    }
}
