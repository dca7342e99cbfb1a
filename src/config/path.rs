use std::io;
use std::path::{Path, PathBuf};

/// Target file, relative to the program directory.
pub const DEFAULT_ENV_FILE: &str = "flowise-proxy-service-py/.env";

pub fn settings_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
    });
    base.join("flowise-key/config.toml")
}

/// Directory holding the running executable.
pub fn program_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| io::Error::other(format!("{} has no parent directory", exe.display())))
}

/// Full path of the `.env` file to edit: always under the program directory.
pub fn resolve_target() -> io::Result<PathBuf> {
    Ok(target_in(&program_dir()?))
}

pub fn target_in(base: &Path) -> PathBuf {
    base.join(DEFAULT_ENV_FILE)
}
