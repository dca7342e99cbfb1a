//! The target `.env` file: timestamped backups and key-line rewriting.
pub mod backup;
pub mod edit;

pub use backup::{backup, backup_path};
pub use edit::{apply, rewrite, update, Update};
