/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey placeholder for empty values ("--").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

/// Share colour for the stats view: big contributors in green.
pub fn color_for_share(percentage: u32) -> &'static str {
    if percentage >= 25 {
        GREEN
    } else if percentage >= 10 {
        YELLOW
    } else {
        RESET
    }
}
