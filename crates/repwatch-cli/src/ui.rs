//! UI helpers for CLI display.

use console::{style, StyledObject};

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Whether stdout output should be colored.
#[must_use]
pub fn use_color() -> bool {
    !is_color_disabled() && console::colors_enabled()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print a warning message.
pub fn print_warning(text: &str) {
    if is_color_disabled() {
        eprintln!("[WARN] {text}");
    } else {
        eprintln!("{} {text}", style("[WARN]").yellow().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Style a feedback tag by the server's feedback type.
///
/// Unknown types are left unstyled.
#[must_use]
pub fn style_feedback_tag(feedback_type: &str) -> StyledObject<String> {
    let tag = style(format!("[{feedback_type}]"));
    match feedback_type {
        "CORRETO" => tag.green().bold(),
        "ATENCAO" => tag.yellow().bold(),
        "ERRO_CRITICO" => tag.red().bold(),
        "INFO" => tag.white(),
        _ => tag,
    }
}
