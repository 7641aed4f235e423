//! Credentials the registry interpolates into server descriptors.
//!
//! The registry never reads the process environment itself; callers build a
//! [`Secrets`] (usually via [`Secrets::from_env`]) and pass it in.

use std::collections::HashMap;

/// Bearer token for the Supabase MCP server.
pub const SUPABASE_ACCESS_TOKEN: &str = "SUPABASE_ACCESS_TOKEN";

/// Z.ai API key, used by both the Z.ai HTTP servers and the vision server.
pub const Z_AI_API_KEY: &str = "Z_AI_API_KEY";

/// Every secret name the catalog interpolates.
pub const KNOWN_SECRETS: [&str; 2] = [SUPABASE_ACCESS_TOKEN, Z_AI_API_KEY];

/// Name → value map of credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Secrets {
    values: HashMap<String, String>,
}

impl Secrets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Read every known secret from the process environment.
    ///
    /// Unset, empty, or non-unicode variables are skipped.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Collect known secrets through an arbitrary lookup function.
    ///
    /// Empty values count as unset and are skipped.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let values = KNOWN_SECRETS
            .iter()
            .filter_map(|name| {
                lookup(*name)
                    .filter(|value| !value.is_empty())
                    .map(|value| (name.to_string(), value))
            })
            .collect();
        Self { values }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Overlay `other` on top of `self`; values in `other` win.
    pub fn merge(&mut self, other: Secrets) {
        for (key, value) in other.values {
            self.values.insert(key, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Value for `name`, or the empty string when missing.
    pub fn get_or_empty(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }

    /// Known secret names that are missing or empty.
    pub fn missing(&self) -> Vec<&'static str> {
        KNOWN_SECRETS
            .iter()
            .copied()
            .filter(|name| self.get(name).is_none_or(str::is_empty))
            .collect()
    }
}
