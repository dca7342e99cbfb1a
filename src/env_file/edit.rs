use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::backup::backup;
use crate::error::EditError;
use crate::models::{UpdateOutcome, ValidKey, APPENDED_COMMENT, KEY_NAME};

static KEY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}=", regex::escape(KEY_NAME))).expect("static regex")
});

/// Result of a full [`update`]: where the backup went and what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub backup: PathBuf,
    pub outcome: UpdateOutcome,
}

/// Back up the target, then write the key into it.
pub fn update(path: &Path, key: &ValidKey) -> Result<Update, EditError> {
    if !path.is_file() {
        return Err(EditError::TargetMissing { path: path.to_path_buf() });
    }
    let backup = backup(path)?;
    let outcome = apply(path, key)?;
    Ok(Update { backup, outcome })
}

/// Rewrite the key line of `path` in place, or append one.
///
/// Nothing is written when the file does not exist. Callers are
/// expected to [`backup`] first; [`update`] does both.
pub fn apply(path: &Path, key: &ValidKey) -> Result<UpdateOutcome, EditError> {
    if !path.is_file() {
        return Err(EditError::TargetMissing { path: path.to_path_buf() });
    }

    let content = fs::read_to_string(path).map_err(|e| EditError::io(path, e))?;
    let (new_content, outcome) = rewrite(&content, key);
    fs::write(path, new_content).map_err(|e| EditError::io(path, e))?;

    match outcome {
        UpdateOutcome::Replaced { duplicates_removed } => {
            if duplicates_removed > 0 {
                tracing::debug!(path = %path.display(), duplicates_removed, "dropped duplicate key lines");
            }
            tracing::info!(path = %path.display(), "key line replaced");
        }
        UpdateOutcome::Appended => tracing::info!(path = %path.display(), "key line appended"),
    }
    Ok(outcome)
}

/// Pure text transform behind [`apply`].
///
/// The first line starting with `FLOWISE_API_KEY=` is replaced and keeps
/// its line ending; any later key lines are dropped. Without a key line,
/// a blank line, a comment and the key line go at the end.
pub fn rewrite(content: &str, key: &ValidKey) -> (String, UpdateOutcome) {
    let key_line = key.key_line();
    let mut out = String::with_capacity(content.len() + key_line.len());
    let mut found = false;
    let mut duplicates_removed = 0usize;

    for line in content.split_inclusive('\n') {
        let (body, ending) = split_line_ending(line);
        if !KEY_LINE.is_match(body) {
            out.push_str(line);
            continue;
        }
        if found {
            duplicates_removed += 1;
            continue;
        }
        found = true;
        out.push_str(&key_line);
        out.push_str(ending);
    }

    if found {
        return (out, UpdateOutcome::Replaced { duplicates_removed });
    }

    let eol = if content.contains("\r\n") { "\r\n" } else { "\n" };
    let mut out = content.to_string();
    if !out.is_empty() {
        if !out.ends_with('\n') {
            out.push_str(eol);
        }
        out.push_str(eol);
    }
    out.push_str(APPENDED_COMMENT);
    out.push_str(eol);
    out.push_str(&key_line);
    out.push_str(eol);
    (out, UpdateOutcome::Appended)
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
