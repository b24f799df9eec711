//! Entry point for the **hyprpick** binary.
//!
//! Wires the `hyprctl`-backed window manager and the `wofi`-backed picker
//! into a [`WindowSwitcher`](hyprpick::switcher::WindowSwitcher) and runs
//! the pipeline once.  Every failure is reported as a single log line; a
//! failed run leaves the window manager state unchanged.

use hyprpick::hyprland::wm::HyprctlWm;
use hyprpick::picker::WofiPicker;
use hyprpick::switcher::{Outcome, WindowSwitcher};
use log::{error, info};

fn main() {
    env_logger::init();

    let switcher = WindowSwitcher::new(HyprctlWm::new(), WofiPicker::new());
    match switcher.run() {
        Ok(Outcome::Switched { workspace }) => {
            info!("switched to workspace {}", workspace);
        }
        Ok(Outcome::Unavailable) => {
            // Expected state, not a failure: nothing to do without hyprctl.
            println!("hyprctl is not installed");
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
