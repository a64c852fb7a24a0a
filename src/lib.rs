//! `dictate` — a small, focused speech-to-text library built on top of Whisper.
//!
//! This crate provides:
//! - Time-offset parsing (`SS`, `MM:SS`, `HH:MM:SS`)
//! - Audio windowing and normalization (trim, downmix, resample to 16 kHz)
//! - Fixed-duration chunking of normalized audio
//! - A sequential chunk → transcript pipeline over a pluggable engine
//!
//! The library is designed to be driven by the `dictate-cli` binary, but keeps
//! the engine behind a trait so tests and other frontends can supply their own.

// High-level API (most consumers should start here).
pub mod opts;
pub mod pipeline;

// Time-offset parsing.
pub mod time;

// Audio decoding, windowing, and chunking.
pub mod buffer;
pub mod chunk;
pub mod decode;
pub mod window;

// Engine abstraction and the built-in Whisper implementation.
pub mod engine;
pub mod language;
pub mod model;

// Transcript output.
pub mod output;

// Logging configuration and control.
pub mod logging;

pub mod error;

pub use error::{Error, Result};
