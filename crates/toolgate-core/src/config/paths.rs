//! Secrets file path resolution helpers.

use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = "toolgate";
pub const SECRETS_FILE_NAME: &str = "secrets.toml";

pub fn secrets_path_in(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_DIR_NAME).join(SECRETS_FILE_NAME)
}

/// `<config_dir>/toolgate/secrets.toml`, if the platform has a config dir.
pub fn default_secrets_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| secrets_path_in(&dir))
}
