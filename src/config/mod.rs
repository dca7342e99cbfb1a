//! Settings file and location of the target `.env`.
pub mod path;
pub mod settings;

pub use path::{resolve_target, settings_path, DEFAULT_ENV_FILE};
pub use settings::{load, Settings};
