use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Build the level filter. Debug logging lets `RUST_LOG` override the level;
/// otherwise `info` is forced so a stray `RUST_LOG` in the environment does not
/// turn on verbose output.
pub fn filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    }
}

/// Initialise logging to stderr, or to `log_file` when one is given.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    let builder = tracing_subscriber::fmt().with_env_filter(filter(debug));

    let Some(path) = log_file else {
        let _ = builder.try_init();
        return;
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let Some(name) = path.file_name() else {
        let _ = builder.try_init();
        return;
    };
    let appender = tracing_appender::rolling::never(dir, name);
    let _ = builder.with_writer(appender).with_ansi(false).try_init();
}

