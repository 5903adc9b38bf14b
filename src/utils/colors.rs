/// ANSI color helper utilities for terminal output.
use crate::models::driving_status::DrivingStatus;
use crate::models::status::Status;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// normal → green, caution → yellow, danger → magenta, critical → red
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Normal => GREEN,
        Status::Caution => YELLOW,
        Status::Danger => MAGENTA,
        Status::Critical => RED,
    }
}

pub fn color_for_driving(status: DrivingStatus) -> &'static str {
    match status {
        DrivingStatus::Driving => CYAN,
        DrivingStatus::Resting => GREY,
    }
}

/// Risk level colour, using the same bands as the status scale.
pub fn color_for_risk_level(level: u8) -> &'static str {
    match level {
        85..=u8::MAX => RED,
        70..=84 => MAGENTA,
        50..=69 => YELLOW,
        _ => GREEN,
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
