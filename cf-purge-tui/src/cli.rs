//! 命令行参数

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::Page;

#[derive(Debug, Parser)]
#[command(name = "cf-purge", version)]
#[command(about = "Purge the Cloudflare edge cache from the terminal", long_about = None)]
pub struct Cli {
    /// 配置文件路径（默认 <config_dir>/cf-purge/config.json）
    #[arg(long, value_name = "PATH", env = "CF_PURGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// 日志文件路径（默认 <cache_dir>/cf-purge/cf-purge.log）
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// 启动时打开的页面
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// 清除整个 Zone 的缓存
    PurgeAll,
    /// 按 URL 列表清除
    PurgeUrls,
    /// 清除单个 URL，Zone 自动识别
    QuickPurge,
    /// 按 Cache Tag 或 URL 前缀清除
    PurgeTags,
}

impl Cli {
    /// 起始页面
    pub fn start_page(&self) -> Page {
        match self.command {
            None | Some(Commands::PurgeAll) => Page::PurgeAll,
            Some(Commands::PurgeUrls) => Page::PurgeUrls,
            Some(Commands::QuickPurge) => Page::QuickPurge,
            Some(Commands::PurgeTags) => Page::PurgeTags,
        }
    }
}
