//! Colored status lines on stdout.
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::style::{style, StyledContent, Stylize};

static COLOR: AtomicBool = AtomicBool::new(true);

/// Turn styling on or off for every printer below.
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

/// Styling only when configured on and stdout is a terminal.
pub fn should_color(configured: bool, stdout_is_terminal: bool) -> bool {
    configured && stdout_is_terminal
}

fn paint<D: Display>(styled: StyledContent<D>) -> String {
    if COLOR.load(Ordering::Relaxed) {
        styled.to_string()
    } else {
        styled.content().to_string()
    }
}

pub fn bold(text: &str) -> String {
    paint(style(text).bold())
}

pub fn header(text: &str) {
    println!("\n{}", paint(style(text).magenta().bold()));
}

pub fn success(text: &str) {
    println!("{}", paint(style(format!("✓ {text}")).green()));
}

pub fn warning(text: &str) {
    println!("{}", paint(style(format!("⚠ {text}")).yellow()));
}

pub fn error(text: &str) {
    println!("{}", paint(style(format!("✗ {text}")).red()));
}

pub fn info(text: &str) {
    println!("{}", paint(style(format!("ℹ {text}")).cyan()));
}

pub fn rule() {
    println!("{}", "=".repeat(70));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piped_output_is_never_colored() {
        assert!(should_color(true, true));
        assert!(!should_color(true, false));
        assert!(!should_color(false, true));
    }

    #[test]
    fn plain_text_when_color_is_off() {
        set_color(false);
        assert_eq!(bold("Next Steps:"), "Next Steps:");
        set_color(true);
        assert_ne!(bold("Next Steps:"), "Next Steps:");
    }
}
