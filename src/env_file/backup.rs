use std::fs::{self, File, Metadata, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::EditError;

/// Timestamp suffix format; sorts lexically in time order.
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Copy `path` to a sibling `<name>.backup.<UTC timestamp>` file.
pub fn backup(path: &Path) -> Result<PathBuf, EditError> {
    backup_at(path, Utc::now())
}

/// Same as [`backup`] with an explicit clock reading.
///
/// An existing backup is never overwritten: a second backup within the
/// same second fails with [`EditError::BackupExists`].
pub fn backup_at(path: &Path, now: DateTime<Utc>) -> Result<PathBuf, EditError> {
    if !path.is_file() {
        return Err(EditError::SourceMissing { path: path.to_path_buf() });
    }

    let source = fs::metadata(path).map_err(|e| EditError::io(path, e))?;
    let content = fs::read(path).map_err(|e| EditError::io(path, e))?;
    let dest = backup_path(path, now);

    let mut out = match open_backup(&dest, &source) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(EditError::BackupExists { path: dest });
        }
        Err(e) => return Err(EditError::io(&dest, e)),
    };
    out.write_all(&content).map_err(|e| EditError::io(&dest, e))?;
    out.sync_all().map_err(|e| EditError::io(&dest, e))?;
    drop(out);

    // the umask may have narrowed the mode at creation
    if let Err(e) = fs::set_permissions(&dest, source.permissions()) {
        tracing::debug!(backup = %dest.display(), error = %e, "could not copy permissions to backup");
    }

    tracing::info!(source = %path.display(), backup = %dest.display(), bytes = content.len(), "backup written");
    Ok(dest)
}

/// Create the backup file, never more permissive than the source.
#[cfg_attr(not(unix), allow(unused_variables))]
fn open_backup(dest: &Path, source: &Metadata) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        options.mode(source.permissions().mode() & 0o777);
    }
    options.open(dest)
}

/// `<dir>/<file name>.backup.<stamp>`
pub fn backup_path(path: &Path, now: DateTime<Utc>) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config".to_string());
    path.with_file_name(format!("{name}.backup.{}", now.format(STAMP_FORMAT)))
}
