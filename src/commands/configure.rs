use std::path::Path;

use crate::env_file::{update, Update};
use crate::error::EditError;
use crate::models::{UpdateOutcome, KEY_NAME};
use crate::prompt::{prompt, LineSource};
use crate::term;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Updated,
    Cancelled,
    Failed,
}

impl Status {
    pub fn exit_code(self) -> u8 {
        match self {
            Status::Updated => 0,
            Status::Cancelled | Status::Failed => 1,
        }
    }
}

/// Prompt for a key and write it into `target`.
pub fn configure(target: &Path, input: &mut dyn LineSource) -> Status {
    print_intro(target);

    let Some(key) = prompt(input) else {
        println!("\nNo changes made.");
        return Status::Cancelled;
    };

    term::header("Updating Configuration...");
    match update(target, &key) {
        Ok(done) => {
            report_update(target, &done);
            print_summary();
            Status::Updated
        }
        Err(e) => {
            report_error(&e);
            term::error("Failed to update configuration");
            Status::Failed
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_intro(target: &Path) {
    term::header("Flowise API Key Configuration");
    println!("\nThis will configure the Flowise API key in {}", target.display());
    println!();
    term::rule();
    term::info("How to get your Flowise API key:");
    println!("  1. Make sure Flowise is running (cd flowise && start-with-postgres.bat)");
    println!("  2. Open http://localhost:3002 in your browser");
    println!("  3. Go to Settings (gear icon)");
    println!("  4. Navigate to 'API Keys' section");
    println!("  5. Click 'Create New Key'");
    println!("  6. Copy the generated key");
    term::rule();
    println!();
}

fn report_update(target: &Path, done: &Update) {
    term::info(&format!("Backup created: {}", file_name(&done.backup)));
    match done.outcome {
        UpdateOutcome::Appended => {
            term::warning(&format!("{KEY_NAME} not found in {}, added it", file_name(target)));
        }
        UpdateOutcome::Replaced { duplicates_removed: 0 } => {}
        UpdateOutcome::Replaced { duplicates_removed } => {
            term::warning(&format!("Removed {duplicates_removed} duplicate {KEY_NAME} line(s)"));
        }
    }
    term::success(&format!("{KEY_NAME} updated in {}", file_name(target)));
}

fn report_error(e: &EditError) {
    term::error(&e.to_string());
    if let EditError::TargetMissing { .. } = e {
        term::info("Please run setup_env_files.bat first");
    }
}

fn print_summary() {
    println!();
    term::rule();
    term::header("Configuration Complete!");
    term::rule();
    term::success("Flowise API key has been configured");

    println!("\n{}", term::bold("Next Steps:"));
    println!("  1. Restart flowise-proxy-service-py:");
    println!("     cd flowise-proxy-service-py");
    println!("     docker compose down");
    println!("     docker compose up -d");
    println!("\n  2. Verify the service is working:");
    println!("     docker logs flowise-proxy --tail=50");
    term::rule();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_updates_exit_zero() {
        assert_eq!(Status::Updated.exit_code(), 0);
        assert_eq!(Status::Cancelled.exit_code(), 1);
        assert_eq!(Status::Failed.exit_code(), 1);
    }
}
