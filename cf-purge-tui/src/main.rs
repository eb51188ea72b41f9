//! cf-purge：在终端里清除 Cloudflare 边缘缓存
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新，返回副作用 `Command` (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 在 tokio 上执行 `Command`，结果经 channel 回到主循环 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()                // 命令行参数：--config / --log-file / 起始页面
//!     init_logging()              // 日志写入文件，stdout 留给终端界面
//!     FileConfigService::load()   // 配置文件 + 环境变量
//!     PurgeService::from_config() // 核心服务
//!     Backend::new()              // tokio 运行时 + 结果 channel
//!     init_terminal()             // 进入原始模式与备用屏幕
//!     app::run()                  // 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }
//!
//! 启动阶段（进入终端界面之前）的错误打印到 stderr，退出码非零。
//! 进入界面之后的网络与校验错误都以通知或弹窗展示，不会导致退出。

mod app;
mod backend;
mod cli;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use cf_purge_core::PurgeService;
use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use backend::{AppConfig, Backend, ConfigService, FileConfigService, SystemClipboard};
use cli::Cli;
use i18n::Language;
use model::App;
use util::{init_terminal, restore_terminal};
use view::theme::{self, Theme};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("cf-purge exited with error: {err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // 1. 日志（失败不影响使用）
    if let Err(err) = init_logging(cli.log_file.clone()) {
        eprintln!("Warning: logging disabled: {err:#}");
    }

    // 2. 配置
    let config_service = cli
        .config
        .clone()
        .map_or_else(FileConfigService::default, FileConfigService::new);
    let config = config_service.load()?.with_env_overrides();
    apply_preferences(&config);

    let purge_config = config.to_purge_config(config_service.path())?;
    let service = Arc::new(PurgeService::from_config(&purge_config)?);

    // 3. 后台执行器
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let backend = Backend::new(
        runtime.handle().clone(),
        service,
        Arc::new(SystemClipboard::detect()),
        tx,
    );

    let mut app = App::new(cli.start_page(), purge_config.default_zone_id.clone());
    log::info!(
        "Starting cf-purge {} on {:?}",
        env!("CARGO_PKG_VERSION"),
        app.current_page
    );

    // 4. 终端与主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &backend, &mut rx);
    restore_terminal(&mut terminal)?;

    // 未完成的请求直接丢弃
    runtime.shutdown_background();
    result
}

/// 语言与主题，未知取值回退到默认
fn apply_preferences(config: &AppConfig) {
    match Language::from_code(&config.language) {
        Some(language) => i18n::set_language(language),
        None => log::warn!("Unknown language '{}', using en-US", config.language),
    }
    match Theme::from_name(&config.theme) {
        Some(selected) => theme::set_theme(selected),
        None => log::warn!("Unknown theme '{}', using dark", config.theme),
    }
}

fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("cf-purge")
        .join("cf-purge.log")
}

/// 日志写入文件：`RUST_LOG` 控制级别（默认 info），`log` 记录一并转入
fn init_logging(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_env_filter(filter)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    tracing::debug!(path = %path.display(), "Logging initialised");
    Ok(())
}
