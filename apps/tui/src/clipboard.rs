// Two-tier clipboard copy: system clipboard tool, then the terminal's own
// selection buffer (OSC 52). When both fail the caller shows the text instead.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::Write;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Many terminals drop OSC 52 payloads above this size.
const OSC52_MAX_ENCODED: usize = 100_000;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard tool found")]
    NoBackend,
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write to {program}: {source}")]
    Write {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {code:?}")]
    Status {
        program: &'static str,
        code: Option<i32>,
    },
    #[error("terminal selection unavailable: {0}")]
    Terminal(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    SystemClipboard,
    TerminalSelection,
    /// Both strategies failed; the text must be copied by hand.
    Manual,
}

#[allow(async_fn_in_trait)]
pub trait CopyStrategy {
    fn name(&self) -> &'static str;
    async fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

type ToolList = &'static [(&'static str, &'static [&'static str])];

const CLIPBOARD_TOOLS: ToolList = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip.exe", &[]),
];

/// Pipes the text into the first clipboard tool that accepts it.
#[derive(Debug, Clone, Copy)]
pub struct SystemClipboard {
    tools: ToolList,
}

impl SystemClipboard {
    pub const fn new() -> Self {
        Self {
            tools: CLIPBOARD_TOOLS,
        }
    }

    async fn pipe_into(
        program: &'static str,
        args: &[&str],
        text: &str,
    ) -> Result<(), ClipboardError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ClipboardError::Spawn { program, source })?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(source) = stdin.write_all(text.as_bytes()).await {
                drop(stdin);
                // Reap the tool so it does not linger as a zombie.
                if let Err(e) = child.kill().await {
                    tracing::debug!(program, error = %e, "failed to stop clipboard tool");
                }
                return Err(ClipboardError::Write { program, source });
            }
        }

        let status = child
            .wait()
            .await
            .map_err(|source| ClipboardError::Spawn { program, source })?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Status {
                program,
                code: status.code(),
            })
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyStrategy for SystemClipboard {
    fn name(&self) -> &'static str {
        "system clipboard"
    }

    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut last_error = ClipboardError::NoBackend;
        for &(program, args) in self.tools {
            match Self::pipe_into(program, args, text).await {
                Ok(()) => {
                    tracing::debug!(program, "copied with clipboard tool");
                    return Ok(());
                }
                Err(ClipboardError::Spawn { source, .. })
                    if source.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::debug!(program, error = %e, "clipboard tool failed");
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }
}

/// Writes an OSC 52 sequence so the terminal puts the text in its selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSelection;

impl TerminalSelection {
    pub fn sequence(text: &str) -> Result<String, ClipboardError> {
        let encoded = STANDARD.encode(text);
        if encoded.len() > OSC52_MAX_ENCODED {
            return Err(ClipboardError::Terminal(format!(
                "payload too large ({} bytes)",
                encoded.len()
            )));
        }
        Ok(format!("\x1b]52;c;{encoded}\x07"))
    }
}

impl CopyStrategy for TerminalSelection {
    fn name(&self) -> &'static str {
        "terminal selection"
    }

    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if !atty::is(atty::Stream::Stdout) {
            return Err(ClipboardError::Terminal("stdout is not a terminal".to_string()));
        }
        let sequence = Self::sequence(text)?;
        let mut stdout = std::io::stdout();
        stdout
            .write_all(sequence.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| ClipboardError::Terminal(e.to_string()))
    }
}

/// Try `primary`, then `fallback`. Never fails: the last resort is manual copy.
pub async fn copy_with_fallback<P, F>(primary: &P, fallback: &F, text: &str) -> CopyOutcome
where
    P: CopyStrategy,
    F: CopyStrategy,
{
    match primary.copy(text).await {
        Ok(()) => return CopyOutcome::SystemClipboard,
        Err(e) => tracing::warn!(strategy = primary.name(), error = %e, "copy failed, falling back"),
    }

    match fallback.copy(text).await {
        Ok(()) => CopyOutcome::TerminalSelection,
        Err(e) => {
            tracing::warn!(strategy = fallback.name(), error = %e, "copy failed, showing text for manual copy");
            CopyOutcome::Manual
        }
    }
}
