//! 系统剪贴板
//!
//! 通过平台自带的命令行工具读写剪贴板：
//! - macOS: `pbpaste` / `pbcopy`
//! - Windows: `powershell Get-Clipboard` / `clip`
//! - Linux (Wayland): `wl-paste` / `wl-copy`
//! - Linux (X11): `xclip`，其次 `xsel`

use std::io::Write;
use std::process::{Command, Stdio};

/// 剪贴板错误
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// 找不到任何可用的剪贴板工具
    #[error("No clipboard tool available (tried: {0})")]
    Unavailable(String),

    /// 工具执行失败
    #[error("Clipboard command '{program}' failed: {detail}")]
    CommandFailed { program: String, detail: String },

    /// 剪贴板内容不是 UTF-8 文本
    #[error("Clipboard does not contain text")]
    NotText,
}

/// 剪贴板读写接口
pub trait ClipboardProvider: Send + Sync {
    /// 读取剪贴板文本
    fn read_text(&self) -> Result<String, ClipboardError>;

    /// 写入剪贴板文本
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// 一条剪贴板命令（程序 + 参数）
#[derive(Debug, Clone, PartialEq, Eq)]
struct ToolCommand {
    program: &'static str,
    args: &'static [&'static str],
}

const fn tool(program: &'static str, args: &'static [&'static str]) -> ToolCommand {
    ToolCommand { program, args }
}

/// 基于系统命令的剪贴板
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    read: Vec<ToolCommand>,
    write: Vec<ToolCommand>,
}

impl SystemClipboard {
    /// 按当前平台选择候选命令
    pub fn detect() -> Self {
        let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
        let (read, write) = Self::candidates(std::env::consts::OS, wayland);
        Self { read, write }
    }

    fn candidates(os: &str, wayland: bool) -> (Vec<ToolCommand>, Vec<ToolCommand>) {
        match os {
            "macos" => (vec![tool("pbpaste", &[])], vec![tool("pbcopy", &[])]),
            "windows" => (
                vec![tool(
                    "powershell",
                    &["-NoProfile", "-Command", "Get-Clipboard"],
                )],
                vec![tool("clip", &[])],
            ),
            _ => {
                let mut read = vec![
                    tool("xclip", &["-selection", "clipboard", "-o"]),
                    tool("xsel", &["--clipboard", "--output"]),
                ];
                let mut write = vec![
                    tool("xclip", &["-selection", "clipboard"]),
                    tool("xsel", &["--clipboard", "--input"]),
                ];
                if wayland {
                    read.insert(0, tool("wl-paste", &["--no-newline"]));
                    write.insert(0, tool("wl-copy", &[]));
                }
                (read, write)
            }
        }
    }

    fn tried(commands: &[ToolCommand]) -> String {
        commands
            .iter()
            .map(|c| c.program)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn command_failed(program: &str, detail: impl ToString) -> ClipboardError {
    ClipboardError::CommandFailed {
        program: program.to_string(),
        detail: detail.to_string(),
    }
}

impl ClipboardProvider for SystemClipboard {
    fn read_text(&self) -> Result<String, ClipboardError> {
        for cmd in &self.read {
            let output = match Command::new(cmd.program)
                .args(cmd.args)
                .stdin(Stdio::null())
                .stderr(Stdio::null())
                .output()
            {
                Ok(output) => output,
                // 工具不存在，尝试下一个
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(command_failed(cmd.program, e)),
            };

            if !output.status.success() {
                return Err(command_failed(cmd.program, output.status));
            }
            return String::from_utf8(output.stdout).map_err(|_| ClipboardError::NotText);
        }

        Err(ClipboardError::Unavailable(Self::tried(&self.read)))
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        for cmd in &self.write {
            let mut child = match Command::new(cmd.program)
                .args(cmd.args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                Ok(child) => child,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(command_failed(cmd.program, e)),
            };

            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(text.as_bytes())
                    .map_err(|e| command_failed(cmd.program, e))?;
            }

            let status = child.wait().map_err(|e| command_failed(cmd.program, e))?;
            if !status.success() {
                return Err(command_failed(cmd.program, status));
            }
            return Ok(());
        }

        Err(ClipboardError::Unavailable(Self::tried(&self.write)))
    }
}
