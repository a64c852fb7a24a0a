use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use dictate::chunk;
use dictate::engine::WhisperEngine;
use dictate::language::Language;
use dictate::logging;
use dictate::model::{ModelSize, resolve_model_dir};
use dictate::opts::{DEFAULT_CHUNK_LENGTH_S, Opts};
use dictate::output;
use dictate::pipeline;
use dictate::window;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);
    logging::silence_whisper_logs();

    let language = args
        .language
        .as_deref()
        .map(Language::parse)
        .transpose()?;

    let buffer = window::load(&args.name, args.start.as_deref(), args.end.as_deref())?;
    let chunks = chunk::split(&buffer, args.chunk_length);

    let model_path = args.model.path_in(&resolve_model_dir(args.model_dir));
    let mut engine = WhisperEngine::load(&model_path)?;

    let opts = Opts {
        language,
        verbose: args.verbose,
    };
    let transcript = pipeline::run(&mut engine, &chunks, &opts)?;

    output::emit(&transcript, args.output.as_deref(), args.verbose)?;
    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "dictate")]
#[command(about = "Transcribe an audio file to plain text with Whisper")]
struct Args {
    /// Input audio file path.
    #[arg(short = 'n', long = "name")]
    name: PathBuf,

    /// Start time (SS, MM:SS, or HH:MM:SS; fractional seconds allowed).
    #[arg(short = 's', long = "start")]
    start: Option<String>,

    /// End time, same format as --start.
    #[arg(short = 'e', long = "end")]
    end: Option<String>,

    /// Expected language of the audio (e.g. 'ru'); auto-detected if omitted.
    #[arg(short = 'l', long = "language")]
    language: Option<String>,

    /// Whisper model size.
    #[arg(short = 'm', long = "model", value_enum, default_value_t = ModelSize::Base)]
    model: ModelSize,

    /// Output file for the transcript; stdout if omitted.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Print progress and diagnostics.
    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    verbose: bool,

    /// Directory holding ggml model files (overrides DICTATE_MODEL_DIR).
    #[arg(long = "model-dir")]
    model_dir: Option<PathBuf>,

    /// Chunk duration in seconds.
    #[arg(long = "chunk-length", default_value_t = DEFAULT_CHUNK_LENGTH_S, value_parser = clap::value_parser!(u32).range(1..))]
    chunk_length: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_require_an_input_file() {
        let err = Args::try_parse_from(["dictate"])
            .err()
            .expect("expected missing-args error");
        assert!(err.to_string().contains("--name"));
    }

    #[test]
    fn args_parse_full_flag_set() {
        let args = Args::try_parse_from([
            "dictate",
            "-n",
            "talk.mp3",
            "-s",
            "1:30",
            "-e",
            "1:01:30",
            "-l",
            "ru",
            "-m",
            "small",
            "-o",
            "out.txt",
            "-v",
            "--chunk-length",
            "20",
        ])
        .expect("parse full flag set");

        assert_eq!(args.name, PathBuf::from("talk.mp3"));
        assert_eq!(args.start.as_deref(), Some("1:30"));
        assert_eq!(args.end.as_deref(), Some("1:01:30"));
        assert_eq!(args.language.as_deref(), Some("ru"));
        assert_eq!(args.model, ModelSize::Small);
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert!(args.verbose);
        assert_eq!(args.chunk_length, 20);
    }

    #[test]
    fn args_default_to_base_model_and_30s_chunks() {
        let args = Args::try_parse_from(["dictate", "-n", "talk.wav"]).expect("parse defaults");
        assert_eq!(args.model, ModelSize::Base);
        assert_eq!(args.chunk_length, 30);
        assert!(!args.verbose);
        assert!(args.output.is_none());
    }

    #[test]
    fn zero_chunk_length_is_rejected() {
        assert!(Args::try_parse_from(["dictate", "-n", "a.wav", "--chunk-length", "0"]).is_err());
    }
}
