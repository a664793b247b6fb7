use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Arguments;
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Initialize the global logger.
///
/// `log_file: None` writes to stdout (colored if `colored`); `Some` appends
/// plain lines to that file.
pub fn initialize(
    log_level: sf_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = *log_level;

    let output = match log_file {
        Some(ref path) => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, None))
            .chain(open_log_file(path)?),
        None => {
            let colors = colored.then(|| {
                ColoredLevelConfig::new()
                    .trace(Color::Magenta)
                    .debug(Color::Blue)
                    .info(Color::Green)
                    .warn(Color::Yellow)
                    .error(Color::Red)
            });
            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.as_ref())
                })
                .chain(std::io::stdout())
        }
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    let target = log_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());
    info!("Logger initialized: level={:?}, output={}", level_filter, target);

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn open_log_file(path: &PathBuf) -> ServerErrorResult<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ServerError::Logger {
            message: format!("Failed to create log directory {}: {}", parent.display(), e),
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}

/// `[timestamp LEVEL target] message [file:line]`
fn write_line(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    colors: Option<&ColoredLevelConfig>,
) {
    let level = match colors {
        Some(colors) => colors.color(record.level()).to_string(),
        None => record.level().to_string(),
    };

    out.finish(format_args!(
        "[{} {} {}] {} [{}:{}]",
        humantime::format_rfc3339_seconds(SystemTime::now()),
        level,
        record.target(),
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}
