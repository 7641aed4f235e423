//! Secrets file configuration
//!
//! The CLI (and any embedding runtime) may keep credentials in a TOML file
//! instead of the environment:
//!
//! ```toml
//! [secrets]
//! SUPABASE_ACCESS_TOKEN = "sbp_..."
//! Z_AI_API_KEY = "..."
//! ```

pub mod parser;
pub mod paths;

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::secrets::{KNOWN_SECRETS, Secrets};

pub use parser::{parse_secrets_toml, parse_secrets_toml_str};
pub use paths::{CONFIG_DIR_NAME, SECRETS_FILE_NAME, default_secrets_path, secrets_path_in};

/// Root structure of the secrets file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SecretsFile {
    #[serde(default)]
    pub secrets: HashMap<String, String>,
}

impl SecretsFile {
    /// Names in the file that no server ever interpolates, sorted.
    pub fn unknown_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self
            .secrets
            .keys()
            .map(String::as_str)
            .filter(|name| !KNOWN_SECRETS.contains(name))
            .collect();
        names.sort_unstable();
        names
    }
}

impl From<SecretsFile> for Secrets {
    fn from(file: SecretsFile) -> Self {
        Secrets::from_map(file.secrets)
    }
}

/// Resolve the effective secrets: file values (if any) overlaid by env.
///
/// An explicit `path` must exist. Without one, the default location is used
/// only when the file is present.
pub fn load_secrets(path: Option<&Path>, env: Secrets) -> anyhow::Result<Secrets> {
    let file_path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => default_secrets_path().filter(|p| p.exists()),
    };

    let mut secrets = match file_path {
        Some(ref path) => {
            tracing::debug!(path = %path.display(), "Loading secrets file");
            let file = parse_secrets_toml(path)?;
            for name in file.unknown_names() {
                tracing::warn!(
                    secret = name,
                    path = %path.display(),
                    "Unknown secret name in secrets file, ignoring"
                );
            }
            Secrets::from(file)
        }
        None => Secrets::new(),
    };

    secrets.merge(env);
    Ok(secrets)
}
