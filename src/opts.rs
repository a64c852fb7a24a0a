use crate::language::Language;

/// Default chunk duration fed to the engine, in seconds.
pub const DEFAULT_CHUNK_LENGTH_S: u32 = 30;

/// Options that control how a transcription is performed.
///
/// This struct represents *library-level configuration*, not CLI flags directly.
/// The CLI is responsible for mapping user input into this type so that:
/// - the library remains reusable outside of a CLI context
/// - other frontends (tests, batch jobs) can construct options programmatically
#[derive(Debug, Clone, Default)]
pub struct Opts {
    /// Optional language hint, validated against the whisper language set.
    ///
    /// When `None`, the engine auto-detects the spoken language.
    pub language: Option<Language>,

    /// Whether to emit progress diagnostics (`chunk i/N`) while transcribing.
    ///
    /// Verbosity only affects diagnostic visibility, never error handling or
    /// the transcript itself.
    pub verbose: bool,
}
