//! Console banners printed around a dashboard session.

use crate::environment::Environment;

// ANSI color codes
const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
const COLOR_RESET: &str = "\x1b[0m";

fn print_info(msg: &str) {
    println!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg);
}

/// Announce which mode is starting and which backend it polls.
pub fn print_session_starting(mode: &str, environment: &Environment) {
    print_info(&format!(
        "Starting {} mode against {}",
        mode,
        environment.api_base_url()
    ));
}

pub fn print_session_shutdown() {
    print_info("Shutting down...");
}

pub fn print_session_exit_success() {
    println!(
        "{}[SUCCESS]{} adwatch exited successfully",
        COLOR_SUCCESS, COLOR_RESET
    );
}
