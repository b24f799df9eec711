//! [`WindowManager`] implementation backed by the `hyprctl` command-line
//! interface.
//!
//! Two invocations define the boundary: `hyprctl clients` (stdout is the
//! client-list text) and `hyprctl dispatch workspace <id>` (fire-and-forget,
//! only the exit status matters).  Availability is probed by resolving the
//! program on `PATH` before anything is spawned.

use crate::traits::WindowManager;
use std::process::Command;

/// Hyprland-backed window manager.
///
/// Each method call spawns a short-lived `hyprctl` process; no state is held
/// between calls.
pub struct HyprctlWm {
    program: String,
}

/// Errors from invoking `hyprctl`.
#[derive(Debug, thiserror::Error)]
pub enum HyprctlError {
    #[error("failed to run `{command}`: {source}")]
    Invoke {
        command: String,
        source: std::io::Error,
    },
    #[error("`{command}` exited with {status}")]
    Exited {
        command: String,
        status: std::process::ExitStatus,
    },
    #[error("`{command}` produced invalid UTF-8: {source}")]
    Utf8 {
        command: String,
        source: std::string::FromUtf8Error,
    },
}

impl HyprctlWm {
    /// Create a handle that invokes `hyprctl` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("hyprctl")
    }

    /// Create a handle that invokes an arbitrary program in `hyprctl`'s
    /// place.  Tests point this at shell-script stand-ins.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command_label(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }
}

impl Default for HyprctlWm {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager for HyprctlWm {
    type Error = HyprctlError;

    fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    fn list_clients(&self) -> Result<String, HyprctlError> {
        let command = self.command_label(&["clients"]);
        let output = Command::new(&self.program)
            .arg("clients")
            .output()
            .map_err(|source| HyprctlError::Invoke {
                command: command.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(HyprctlError::Exited {
                command,
                status: output.status,
            });
        }
        String::from_utf8(output.stdout)
            .map_err(|source| HyprctlError::Utf8 { command, source })
    }

    fn switch_workspace(&self, workspace: &str) -> Result<(), HyprctlError> {
        let command = self.command_label(&["dispatch", "workspace", workspace]);
        let status = Command::new(&self.program)
            .args(["dispatch", "workspace", workspace])
            .status()
            .map_err(|source| HyprctlError::Invoke {
                command: command.clone(),
                source,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(HyprctlError::Exited { command, status })
        }
    }
}

//  Tests
