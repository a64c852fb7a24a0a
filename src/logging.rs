//! Logging configuration and control.
//!
//! Verbosity is an explicit parameter threaded from the CLI down to the
//! subscriber level; nothing here swaps process streams. The one process-wide
//! piece of state is whisper.cpp's C-side log callback, which is installed
//! exactly once and simply discards everything — our own diagnostics go
//! through `tracing`.

use std::os::raw::{c_char, c_void};
use std::sync::Once;

/// A no-op log callback used to silence logs emitted by whisper.cpp.
unsafe extern "C" fn whisper_log_callback(
    _level: u32,
    _c_msg: *const c_char,
    _user_data: *mut c_void,
) {
    // Intentionally left empty.
}

/// Ensure whisper.cpp logging is configured exactly once for the lifetime of
/// the process.
pub fn silence_whisper_logs() {
    static INIT: Once = Once::new();

    INIT.call_once(|| unsafe {
        whisper_rs::set_log_callback(Some(whisper_log_callback), std::ptr::null_mut());
    });
}

/// Initialize stderr diagnostics for the binaries.
///
/// Defaults to `error` level (quiet) or `info` when `verbose`, unless
/// overridden by `DICTATE_LOG`. Logs go to stderr so stdout stays clean for
/// the transcript. Safe to call more than once; later calls are no-ops.
#[cfg(feature = "logging")]
pub fn init(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let default_level = if verbose {
        tracing::level_filters::LevelFilter::INFO
    } else {
        tracing::level_filters::LevelFilter::ERROR
    };

    let filter = EnvFilter::builder()
        .with_env_var("DICTATE_LOG")
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_whisper_logs_is_idempotent() {
        silence_whisper_logs();
        silence_whisper_logs();
    }

    #[cfg(feature = "logging")]
    #[test]
    fn init_is_idempotent() {
        init(false);
        init(true);
    }
}
