//! Command 执行器

use std::sync::Arc;

use cf_purge_core::{PurgeRequest, PurgeService};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use super::clipboard::{ClipboardError, ClipboardProvider};
use super::command::Command;
use crate::message::{AppMessage, BackendMessage};

/// 后台执行器
///
/// 每条 Command 在 tokio 运行时上独立执行，结果通过 channel 回送给主循环。
pub struct Backend {
    handle: Handle,
    service: Arc<PurgeService>,
    clipboard: Arc<dyn ClipboardProvider>,
    tx: UnboundedSender<AppMessage>,
}

impl Backend {
    pub fn new(
        handle: Handle,
        service: Arc<PurgeService>,
        clipboard: Arc<dyn ClipboardProvider>,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            handle,
            service,
            clipboard,
            tx,
        }
    }

    /// 在后台执行命令（不阻塞 UI）
    pub fn dispatch(&self, command: Command) {
        log::debug!("Dispatching {}", command_name(&command));

        let service = Arc::clone(&self.service);
        let clipboard = Arc::clone(&self.clipboard);
        let tx = self.tx.clone();

        self.handle.spawn(async move {
            let message = execute(command, &service, clipboard).await;
            if tx.send(AppMessage::Backend(message)).is_err() {
                log::debug!("UI loop has exited, dropping backend result");
            }
        });
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::LoadZones => "LoadZones",
        Command::InitQuickPurge => "InitQuickPurge",
        Command::Purge { request, .. } => match request {
            PurgeRequest::Everything => "Purge(everything)",
            PurgeRequest::Files(_) => "Purge(files)",
            PurgeRequest::Tags(_) => "Purge(tags)",
            PurgeRequest::Prefixes(_) => "Purge(prefixes)",
        },
        Command::ReadClipboard => "ReadClipboard",
        Command::CopyToClipboard { .. } => "CopyToClipboard",
    }
}

/// 执行一条命令并生成结果消息
pub async fn execute(
    command: Command,
    service: &PurgeService,
    clipboard: Arc<dyn ClipboardProvider>,
) -> BackendMessage {
    match command {
        Command::LoadZones => {
            BackendMessage::ZonesLoaded(service.list_zones().await.map_err(|e| e.to_string()))
        }

        Command::InitQuickPurge => match service.list_zones().await {
            Ok(zones) => {
                // 剪贴板读取失败不影响初始化
                let clipboard = match read_clipboard(clipboard).await {
                    Ok(text) => Some(text),
                    Err(e) => {
                        log::debug!("Clipboard not readable: {e}");
                        None
                    }
                };
                BackendMessage::QuickPurgeReady { zones, clipboard }
            }
            Err(e) => BackendMessage::QuickPurgeFailed(e.to_string()),
        },

        Command::Purge {
            zone_id,
            request,
            origin,
        } => {
            let result = match request {
                PurgeRequest::Everything => service.purge_everything(&zone_id).await,
                PurgeRequest::Files(urls) => service.purge_urls(&zone_id, urls).await,
                PurgeRequest::Tags(tags) => service.purge_tags(&zone_id, tags).await,
                PurgeRequest::Prefixes(prefixes) => {
                    service.purge_prefixes(&zone_id, prefixes).await
                }
            };
            BackendMessage::PurgeFinished {
                origin,
                result: result.map(|_| ()).map_err(|e| e.to_string()),
            }
        }

        Command::ReadClipboard => BackendMessage::ClipboardRead(read_clipboard(clipboard).await),

        Command::CopyToClipboard { text, label } => {
            let result = run_blocking(move || clipboard.write_text(&text)).await;
            BackendMessage::ClipboardWritten { label, result }
        }
    }
}

async fn read_clipboard(clipboard: Arc<dyn ClipboardProvider>) -> Result<String, String> {
    run_blocking(move || clipboard.read_text()).await
}

/// 剪贴板工具是同步子进程，放到阻塞线程池执行
async fn run_blocking<T, F>(f: F) -> Result<T, String>
where
    F: FnOnce() -> Result<T, ClipboardError> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(e) => Err(format!("Clipboard task failed: {e}")),
    }
}
