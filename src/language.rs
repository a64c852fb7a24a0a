//! Language hints for the engine.
//!
//! Whisper accepts a closed set of ISO 639-1-style language codes. We validate
//! user input against that set at the boundary instead of passing free-form
//! strings to the engine, so a typo fails with a clear error before any model
//! is loaded.

use crate::error::{Error, Result};

/// The language codes understood by whisper.cpp.
///
/// This mirrors the `g_lang` table shipped with whisper.cpp's tokenizer.
const LANGUAGE_CODES: &[&str] = &[
    "en", "zh", "de", "es", "ru", "ko", "fr", "ja", "pt", "tr", "pl", "ca", "nl", "ar", "sv",
    "it", "id", "hi", "fi", "vi", "he", "uk", "el", "ms", "cs", "ro", "da", "hu", "ta", "no",
    "th", "ur", "hr", "bg", "lt", "la", "mi", "ml", "cy", "sk", "te", "fa", "lv", "bn", "sr",
    "az", "sl", "kn", "et", "mk", "br", "eu", "is", "hy", "ne", "mn", "bs", "kk", "sq", "sw",
    "gl", "mr", "pa", "si", "km", "sn", "yo", "so", "af", "oc", "ka", "be", "tg", "sd", "gu",
    "am", "yi", "lo", "uz", "fo", "ht", "ps", "tk", "nn", "mt", "sa", "lb", "my", "bo", "tl",
    "mg", "as", "tt", "haw", "ln", "ha", "ba", "jw", "su", "yue",
];

/// A validated language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language(&'static str);

impl Language {
    /// Validate `code` against the known whisper language codes.
    ///
    /// Matching is case-insensitive; the canonical lowercase code is stored.
    pub fn parse(code: &str) -> Result<Self> {
        let normalized = code.trim().to_ascii_lowercase();
        LANGUAGE_CODES
            .iter()
            .find(|&&known| known == normalized)
            .map(|&known| Self(known))
            .ok_or_else(|| Error::UnknownLanguage(code.to_string()))
    }

    pub fn code(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
