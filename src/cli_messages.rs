//! Colored status lines for one-shot CLI commands such as `check`.

pub fn print_info(title: &str, details: &str) {
    println!("\x1b[1;33m[INFO]\x1b[0m {}\t {}", title, details);
}

pub fn print_error(title: &str, details: &str) {
    println!("\x1b[1;31m[ERROR]\x1b[0m {}", title);
    println!("\x1b[1;31m[ERROR]\x1b[0m Details: {}", details);
}

pub fn print_success(title: &str, details: &str) {
    println!("\x1b[1;32m[SUCCESS]\x1b[0m {}\t {}", title, details);
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, $details)
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
