//! Provider identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ToolgateError;

/// Upstream model vendor whose agent session selects servers and tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provider {
    Anthropic,
    #[serde(rename = "z-ai")]
    ZAi,
    Moonshot,
}

impl Provider {
    /// Every known provider, in display order.
    pub const ALL: [Provider; 3] = [Provider::Anthropic, Provider::ZAi, Provider::Moonshot];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Anthropic => "anthropic",
            Provider::ZAi => "z-ai",
            Provider::Moonshot => "moonshot",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ToolgateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "anthropic" => Ok(Provider::Anthropic),
            "z-ai" => Ok(Provider::ZAi),
            "moonshot" => Ok(Provider::Moonshot),
            _ => Err(ToolgateError::UnknownProvider(value.to_string())),
        }
    }
}
