//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入缓存目录下的文件

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "country-dashboard.log";

/// 日志文件路径：`<cache_dir>/country-dashboard/country-dashboard.log`
pub fn log_path() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .or_else(dirs::data_local_dir)
        .context("no cache directory available for the log file")?;
    Ok(dir.join("country-dashboard").join(LOG_FILE))
}

/// 初始化 tracing，`log` 宏的记录也会转发到这里
///
/// 级别由 `RUST_LOG` 控制，默认 info
pub fn init_logging() -> Result<PathBuf> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = File::create(&path).with_context(|| format!("failed to open {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(tracing::Level::INFO.into()));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .context("failed to install the log subscriber")?;

    Ok(path)
}
