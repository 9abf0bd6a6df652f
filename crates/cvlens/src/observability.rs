//! Logging setup for the CLI.
//!
//! Logs always go to stderr so stdout stays clean for command output and the
//! MCP stdio transport. A file sink is added when a log location is known:
//!
//! 1. `CVLENS_LOG_PATH`: append to exactly this file
//! 2. `CVLENS_LOG_DIR`: daily-rotated `cvlens.log` in this directory
//! 3. `log_dir` from the loaded configuration, same as above

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE_NAME: &str = "cvlens.log";
const ENV_LOG_PATH: &str = "CVLENS_LOG_PATH";
const ENV_LOG_DIR: &str = "CVLENS_LOG_DIR";

/// Where log files go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogSink {
    /// Stderr only.
    #[default]
    Stderr,
    /// A single file that is appended to.
    File(PathBuf),
    /// A directory with daily rotation.
    RollingDir(PathBuf),
}

/// Resolved logging configuration.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// File sink in addition to stderr.
    pub sink: LogSink,
}

impl ObservabilityConfig {
    /// Resolve the sink from the environment, falling back to the configured
    /// log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
            std::env::var_os(ENV_LOG_DIR).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let sink = match (env_path, env_dir.or(config_dir)) {
            (Some(path), _) if !path.as_os_str().is_empty() => LogSink::File(path),
            (_, Some(dir)) if !dir.as_os_str().is_empty() => LogSink::RollingDir(dir),
            _ => LogSink::Stderr,
        };
        Self { sink }
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` means errors only, each `-v`
/// raises verbosity one step, and the configured level applies by default.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_for(quiet, verbose, default_level))
}

fn level_for(quiet: bool, verbose: u8, default_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => default_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file sink on drop; hold it until exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match &config.sink {
        LogSink::Stderr => (None, None),
        LogSink::File(path) => {
            let (dir, name) = split_log_path(path)?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        LogSink::RollingDir(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn split_log_path(path: &Path) -> anyhow::Result<(PathBuf, PathBuf)> {
    let name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, PathBuf::from(name)))
}
