//! **hyprpick** — a fuzzy-menu window picker and workspace jumper.
//!
//! One run of the pipeline: fetch the window manager's client list, parse
//! the blank-line-separated `key: value` records into [`clients::Window`]
//! entities, order them by workspace, hand them to a dmenu-style picker,
//! and switch the active display to the workspace of whatever the user
//! picked.
//!
//! # Architecture
//!
//! The crate is organised around two core traits:
//!
//! * [`traits::WindowManager`] — abstracts client-list fetching and
//!   workspace switching so the pipeline is not coupled to any specific
//!   compositor.
//! * [`traits::Picker`] — abstracts the interactive selection step so the
//!   pipeline is not coupled to any specific menu program.
//!
//! Concrete implementations live in [`hyprland`] (the `hyprctl`
//! command-line interface) and [`picker`] (`wofi` in dmenu mode).  The
//! [`switcher::WindowSwitcher`] only depends on the abstractions.

pub mod clients;
pub mod hyprland;
pub mod picker;
pub mod switcher;
pub mod traits;
