//! `wofi`-backed [`Picker`] implementation.
//!
//! Candidates are streamed to the picker subprocess as one line per window:
//!
//! ```text
//! 1: Firefox (monitor eDP-1)
//! 2: Terminal (monitor eDP-1)
//! ```
//!
//! The picker prints the selected line back on its stdout; only the text
//! before the first `:` is used as the workspace identifier.
//!
//! # Concurrency
//!
//! Candidate lines are written from a dedicated thread while the calling
//! thread waits for the subprocess output.  Writing everything up front and
//! only then waiting would deadlock once the candidate set outgrows the pipe
//! buffer: the picker blocks writing its (unread) output, we block writing
//! its (unconsumed) input.  The writer thread owns the stdin handle
//! exclusively and closes it by dropping it, which is the picker's
//! end-of-input signal.

use crate::clients::Window;
use crate::traits::Picker;
use log::debug;
use std::io::Write;
use std::process::{Command, Stdio};

/// A [`Picker`] that drives a dmenu-style subprocess, `wofi` by default.
pub struct WofiPicker {
    program: String,
    args: Vec<String>,
}

/// Errors produced by the wofi picker.
#[derive(Debug, thiserror::Error)]
pub enum WofiPickerError {
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("picker stdin was not piped")]
    Stdin,
    #[error("failed to collect picker output: {0}")]
    Io(std::io::Error),
    #[error("picker exited with {status}")]
    Exited { status: std::process::ExitStatus },
    #[error("picker reply is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("picker produced no selection")]
    NoSelection,
}

impl WofiPicker {
    /// Create a picker that runs `wofi --show dmenu -i` (line-oriented,
    /// case-insensitive selection).
    pub fn new() -> Self {
        Self::with_command("wofi", ["--show", "dmenu", "-i"].map(String::from))
    }

    /// Create a picker that runs an arbitrary program.
    ///
    /// The program must read candidate lines on stdin and print the selected
    /// line on stdout.  Tests substitute `cat`, `true`, and friends here.
    pub fn with_command(program: impl Into<String>, args: impl IntoIterator<Item = String>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().collect(),
        }
    }
}

impl Default for WofiPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker for WofiPicker {
    type Error = WofiPickerError;

    fn pick(&self, windows: &[Window]) -> Result<String, WofiPickerError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| WofiPickerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let mut stdin = child.stdin.take().ok_or(WofiPickerError::Stdin)?;
        let lines: Vec<String> = windows.iter().map(candidate_line).collect();
        debug!("streaming {} candidate(s) to {}", lines.len(), self.program);

        // Must run concurrently with the wait below; see the module docs.
        let writer = std::thread::spawn(move || {
            for line in &lines {
                // The picker may exit before draining its input; a write
                // error just ends the stream early.
                if writeln!(stdin, "{}", line).is_err() {
                    break;
                }
            }
            // stdin drops here, closing the pipe: end of input.
        });

        let output = child.wait_with_output().map_err(WofiPickerError::Io)?;
        let _ = writer.join();

        if !output.status.success() {
            return Err(WofiPickerError::Exited {
                status: output.status,
            });
        }

        let reply = String::from_utf8(output.stdout)?;
        let line = reply.lines().next().unwrap_or("");
        if line.trim().is_empty() {
            return Err(WofiPickerError::NoSelection);
        }
        Ok(workspace_from_reply(line))
    }
}

/// Format one candidate line for the picker.
pub fn candidate_line(window: &Window) -> String {
    format!(
        "{}: {} (monitor {})",
        window.workspace, window.title, window.monitor
    )
}

/// Extract the workspace identifier from the picker's reply line.
///
/// The part before the first `:`, trimmed of surrounding whitespace.  A
/// reply with no `:` at all yields the whole trimmed line; the picker may
/// allow free text, and a bare workspace id is a perfectly good reply.
pub fn workspace_from_reply(reply: &str) -> String {
    reply.split(':').next().unwrap_or(reply).trim().to_string()
}

//  Tests
