//! Model-size selection and model-file resolution.
//!
//! The CLI selects a model by size, not by path. Sizes form a closed set and
//! map onto whisper.cpp's standard ggml file names; the files themselves are
//! expected in a model directory (see `resolve_model_dir`) and can be fetched
//! with the bundled `model-downloader` binary.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the default model directory.
pub const MODEL_DIR_ENV: &str = "DICTATE_MODEL_DIR";

/// Default model directory when neither flag nor env var is set.
pub const DEFAULT_MODEL_DIR: &str = "./models";

/// The supported Whisper model sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ModelSize {
    Tiny,
    #[default]
    Base,
    Small,
    Medium,
    Large,
}

impl ModelSize {
    /// Friendly name users type (e.g. "base").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Base => "base",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Filename of the ggml artifact for this size (e.g. "ggml-base.bin").
    ///
    /// "large" maps to large-v3, the current whisper.cpp release of that size.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Tiny => "ggml-tiny.bin",
            Self::Base => "ggml-base.bin",
            Self::Small => "ggml-small.bin",
            Self::Medium => "ggml-medium.bin",
            Self::Large => "ggml-large-v3.bin",
        }
    }

    /// Path of this model inside `dir`.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

impl std::fmt::Display for ModelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the model directory: explicit flag > `DICTATE_MODEL_DIR` > `./models`.
pub fn resolve_model_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = std::env::var(MODEL_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    PathBuf::from(DEFAULT_MODEL_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_size_is_base() {
        assert_eq!(ModelSize::default(), ModelSize::Base);
    }

    #[test]
    fn file_names_follow_ggml_convention() {
        assert_eq!(ModelSize::Tiny.file_name(), "ggml-tiny.bin");
        assert_eq!(ModelSize::Base.file_name(), "ggml-base.bin");
        assert_eq!(ModelSize::Large.file_name(), "ggml-large-v3.bin");
    }

    #[test]
    fn path_in_joins_dir_and_file_name() {
        let path = ModelSize::Small.path_in(Path::new("/opt/models"));
        assert_eq!(path, PathBuf::from("/opt/models/ggml-small.bin"));
    }

    #[test]
    fn resolve_model_dir_prefers_explicit_flag() {
        let dir = resolve_model_dir(Some(PathBuf::from("/tmp/m")));
        assert_eq!(dir, PathBuf::from("/tmp/m"));
    }
}
