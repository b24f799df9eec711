//! The main orchestrator that ties the client list, the picker, and the
//! window manager together.
//!
//! [`WindowSwitcher`] runs the whole pipeline once: check that the window
//! manager is reachable, fetch and parse its client list, order the windows
//! by workspace, let the user pick one, and dispatch the workspace switch.

use crate::clients::{parse_clients, sort_by_workspace, ClientParseError};
use crate::traits::{Picker, WindowManager};
use log::{debug, info};

/// Possible errors from the switcher.
#[derive(Debug, thiserror::Error)]
pub enum SwitcherError {
    /// The window manager returned an error.
    #[error("window manager error: {0}")]
    WindowManager(String),

    /// The client-list text did not match the expected record shape.
    #[error(transparent)]
    Parse(#[from] ClientParseError),

    /// The picker failed or the user made no usable choice.
    #[error("picker error: {0}")]
    Picker(String),
}

/// How a run ended, short of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user picked a window and the switch was dispatched.
    Switched { workspace: String },

    /// The window manager's command-line interface is not installed.
    ///
    /// An expected "nothing to do" state, not a failure.
    Unavailable,
}

/// Orchestrates one list → parse → sort → pick → switch run.
///
/// The switcher is generic over any [`WindowManager`] and [`Picker`]
/// implementation, making it completely independent of Hyprland, wofi, or
/// any other concrete backend.
///
/// # Typical usage
///
/// ```ignore
/// let switcher = WindowSwitcher::new(HyprctlWm::new(), WofiPicker::new());
/// match switcher.run()? {
///     Outcome::Switched { workspace } => info!("switched to {}", workspace),
///     Outcome::Unavailable => println!("hyprctl is not installed"),
/// }
/// ```
pub struct WindowSwitcher<W: WindowManager, P: Picker> {
    wm: W,
    picker: P,
}

impl<W: WindowManager, P: Picker> WindowSwitcher<W, P> {
    /// Create a new switcher over the given backends.
    pub fn new(wm: W, picker: P) -> Self {
        Self { wm, picker }
    }

    /// Run the pipeline once.
    ///
    /// Every failure is terminal for the run: there are no retries and no
    /// fallback workspace.  A failed run leaves the window manager state
    /// unchanged.
    pub fn run(&self) -> Result<Outcome, SwitcherError> {
        if !self.wm.is_available() {
            return Ok(Outcome::Unavailable);
        }

        let raw = self
            .wm
            .list_clients()
            .map_err(|e| SwitcherError::WindowManager(e.to_string()))?;

        let mut windows = parse_clients(&raw)?;
        sort_by_workspace(&mut windows);
        debug!("presenting {} window(s)", windows.len());

        let workspace = self
            .picker
            .pick(&windows)
            .map_err(|e| SwitcherError::Picker(e.to_string()))?;
        info!("user picked workspace {}", workspace);

        self.wm
            .switch_workspace(&workspace)
            .map_err(|e| SwitcherError::WindowManager(e.to_string()))?;

        Ok(Outcome::Switched { workspace })
    }
}

//  Tests
