//! Core traits that decouple hyprpick from any specific window manager or
//! picker program.
//!
//! Every concrete backend (the `hyprctl` command-line interface, `wofi`, a
//! test harness, …) implements one of these traits.  The
//! [`WindowSwitcher`](crate::switcher::WindowSwitcher) only depends on these
//! abstractions.

use crate::clients::Window;

/// Abstraction over a window manager that can report its open windows and
/// switch workspaces.
///
/// An implementation might shell out to `hyprctl`, or it might be an
/// in-memory stub used in tests.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    /// Whether the window manager's command-line interface is reachable at
    /// all.
    ///
    /// Returning `false` is an expected "feature unavailable" state, not an
    /// error; the caller reports it and performs no further invocations.
    fn is_available(&self) -> bool;

    /// Return the raw client-list text: blank-line-separated records of
    /// `key: value` lines (see [`clients::parse_clients`](crate::clients::parse_clients)).
    fn list_clients(&self) -> Result<String, Self::Error>;

    /// Switch the active display to `workspace`.
    ///
    /// The identifier is passed through verbatim; it came out of the picker
    /// and is meaningful only to the window manager.
    fn switch_workspace(&self, workspace: &str) -> Result<(), Self::Error>;
}

/// Abstraction over an interactive picker that lets the user choose one
/// window from an ordered candidate list.
///
/// Implementations present the windows however they like (a dmenu-style
/// subprocess, a canned reply in tests, …) and return the chosen workspace
/// identifier as text.
pub trait Picker {
    /// The error type produced by this picker.
    type Error: std::error::Error + Send + 'static;

    /// Present `windows` and block until the user picks one.
    ///
    /// Returns the workspace identifier of the chosen window.  Whatever the
    /// user selected is trusted as-is; no validation against the candidate
    /// set is performed.
    fn pick(&self, windows: &[Window]) -> Result<String, Self::Error>;
}

//  Tests
