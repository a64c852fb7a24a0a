use thiserror::Error;

/// Dictate's crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Dictate's crate-wide error type.
///
/// Every failure here is fatal: nothing in the pipeline retries, and a failed
/// chunk aborts the whole run without emitting partial output. Internal
/// symphonia/rubato plumbing uses `anyhow` and is converted at the boundary
/// into the variant that names the failing stage.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid time format: '{0}' (expected SS, MM:SS, or HH:MM:SS)")]
    InvalidTimeFormat(String),

    #[error("failed to load audio from '{path}': {message}")]
    AudioLoad { path: String, message: String },

    #[error("failed to load model from '{path}': {message}")]
    ModelLoad { path: String, message: String },

    #[error("transcription failed: {message}")]
    Transcription { message: String },

    #[error("failed to write transcript to '{path}': {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown language code: '{0}'")]
    UnknownLanguage(String),
}

impl Error {
    /// Build an `AudioLoad` error from any underlying decode failure.
    ///
    /// We flatten the `anyhow` chain into a single message (`{:#}`) so the
    /// variant stays `Send + Sync` without boxing the original error.
    pub(crate) fn audio_load(path: impl Into<String>, err: anyhow::Error) -> Self {
        Self::AudioLoad {
            path: path.into(),
            message: format!("{err:#}"),
        }
    }

    pub(crate) fn model_load(path: impl Into<String>, err: anyhow::Error) -> Self {
        Self::ModelLoad {
            path: path.into(),
            message: format!("{err:#}"),
        }
    }

    pub(crate) fn transcription(err: anyhow::Error) -> Self {
        Self::Transcription {
            message: format!("{err:#}"),
        }
    }
}
