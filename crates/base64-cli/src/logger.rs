use std::io;

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "WOLF_BASE64_LOG";

fn parse_level(value: Option<&str>) -> LevelFilter {
    match value {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("info") => LevelFilter::Info,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        Some("off") => LevelFilter::Off,
        _ => LevelFilter::Info, // default if unset or unknown
    }
}

fn logging_level() -> LevelFilter {
    // `trace` or `debug` marker files next to the executable win over the env var
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(dir) = exe_path.parent() {
            if dir.join("trace").exists() {
                return LevelFilter::Trace;
            }
            if dir.join("debug").exists() {
                return LevelFilter::Debug;
            }
        }
    }
    parse_level(std::env::var(LOG_ENV).ok().as_deref())
}

/// Installs the global logger. Output goes to stderr so it never mixes with
/// the status line on stdout.
pub fn setup_logger() {
    let level_filter = logging_level();

    if let Err(e) = Dispatch::new()
        .format(move |out, message, record| {
            let file = record.file().unwrap_or("unknown_file");
            let line = record.line().unwrap_or(0);

            if level_filter >= LevelFilter::Debug {
                out.finish(format_args!(
                    "[{}][{}]: {} <{}:{}>",
                    Local::now().format("%b-%d-%Y %H:%M:%S.%f"),
                    record.level(),
                    message,
                    file,
                    line,
                ));
            } else {
                out.finish(format_args!("[{}]: {}", record.level(), message));
            }
        })
        .level(level_filter)
        .chain(io::stderr())
        .apply()
    {
        eprintln!("Logger initialization failed: {e}");
    }
    log::debug!("Enabled log {level_filter}.");
}
