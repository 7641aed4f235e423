//! Namespaced tool identifiers (`mcp__<server>__<tool>`).

use std::fmt;
use std::str::FromStr;

use crate::error::ToolgateError;

const PREFIX: &str = "mcp__";
const SEPARATOR: &str = "__";

/// A tool exposed by one MCP server, as the agent runtime names it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToolId {
    server: String,
    tool: String,
}

impl ToolId {
    pub fn new(server: impl Into<String>, tool: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            tool: tool.into(),
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{}{SEPARATOR}{}", self.server, self.tool)
    }
}

impl FromStr for ToolId {
    type Err = ToolgateError;

    /// Server names may contain single `-`/`_` characters, so the split
    /// happens on the first `__` after the prefix.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ToolgateError::InvalidToolId(value.to_string());

        let rest = value.strip_prefix(PREFIX).ok_or_else(invalid)?;
        let (server, tool) = rest.split_once(SEPARATOR).ok_or_else(invalid)?;
        if server.is_empty() || tool.is_empty() {
            return Err(invalid());
        }

        Ok(Self::new(server, tool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let id = ToolId::new("sequential-thinking", "sequentialthinking");
        assert_eq!(id.to_string(), "mcp__sequential-thinking__sequentialthinking");
    }

    #[test]
    fn test_parse_keeps_underscored_tool_name() {
        let id: ToolId = "mcp__supabase__list_edge_functions".parse().unwrap();
        assert_eq!(id.server(), "supabase");
        assert_eq!(id.tool(), "list_edge_functions");
    }

    #[test]
    fn test_catalog_tools_parse_back() {
        use crate::catalog::CatalogServer;

        for server in CatalogServer::ALL {
            for id in server.tool_ids() {
                let parsed: ToolId = id.to_string().parse().unwrap();
                assert_eq!(parsed, id);
                assert_eq!(parsed.server(), server.name());
            }
        }
    }

    #[test]
    fn test_parse_rejects_missing_prefix() {
        assert_eq!(
            "grep__searchGitHub".parse::<ToolId>(),
            Err(ToolgateError::InvalidToolId("grep__searchGitHub".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_missing_tool() {
        assert!("mcp__grep".parse::<ToolId>().is_err());
        assert!("mcp__grep__".parse::<ToolId>().is_err());
        assert!("mcp____searchGitHub".parse::<ToolId>().is_err());
    }
}
