//! Connection descriptors for MCP servers.
//!
//! A descriptor says how the agent runtime reaches one server: either an
//! HTTP endpoint or a subprocess speaking MCP over stdio.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ToolgateError;

/// How to reach one MCP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
pub enum ServerDescriptor {
    /// HTTP-based MCP server
    Http {
        url: String,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        headers: BTreeMap<String, String>,
    },
    /// Subprocess launched by the runtime, spoken to over stdio
    Stdio {
        command: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        args: Vec<String>,
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        env: BTreeMap<String, String>,
    },
}

impl ServerDescriptor {
    pub fn http(url: impl Into<String>, headers: BTreeMap<String, String>) -> Self {
        ServerDescriptor::Http {
            url: url.into(),
            headers,
        }
    }

    pub fn stdio(
        command: impl Into<String>,
        args: Vec<String>,
        env: BTreeMap<String, String>,
    ) -> Self {
        ServerDescriptor::Stdio {
            command: command.into(),
            args,
            env,
        }
    }

    /// Transport name as it appears in the serialized `type` tag.
    pub fn transport(&self) -> &'static str {
        match self {
            ServerDescriptor::Http { .. } => "http",
            ServerDescriptor::Stdio { .. } => "stdio",
        }
    }

    /// Validate the descriptor.
    ///
    /// HTTP descriptors need an absolute http(s) URL, process descriptors a
    /// non-empty command. Credential values are not inspected.
    pub fn validate(&self, server: &str) -> Result<(), ToolgateError> {
        let invalid = |reason: String| ToolgateError::InvalidDescriptor {
            server: server.to_string(),
            reason,
        };

        match self {
            ServerDescriptor::Http { url, .. } => {
                let parsed = url::Url::parse(url)
                    .map_err(|e| invalid(format!("invalid url '{url}': {e}")))?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(invalid(format!(
                        "unsupported url scheme '{}'",
                        parsed.scheme()
                    )));
                }
            }
            ServerDescriptor::Stdio { command, .. } => {
                if command.trim().is_empty() {
                    return Err(invalid("command is required for stdio transport".to_string()));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_serializes_with_type_tag() {
        let descriptor = ServerDescriptor::http(
            "https://mcp.example.com",
            BTreeMap::from([("Authorization".to_string(), "Bearer token".to_string())]),
        );

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "http",
                "url": "https://mcp.example.com",
                "headers": { "Authorization": "Bearer token" }
            })
        );
    }

    #[test]
    fn test_stdio_omits_empty_collections() {
        let descriptor = ServerDescriptor::stdio("npx", vec![], BTreeMap::new());

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value, serde_json::json!({ "type": "stdio", "command": "npx" }));
    }

    #[test]
    fn test_deserialize_rejects_unknown_tag() {
        let result: Result<ServerDescriptor, _> =
            serde_json::from_str(r#"{"type": "sse", "url": "https://x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_fields_of_other_variant() {
        let result: Result<ServerDescriptor, _> = serde_json::from_str(
            r#"{"type": "http", "url": "https://x", "command": "rm", "args": ["-rf"]}"#,
        );
        assert!(result.is_err());

        let result: Result<ServerDescriptor, _> = serde_json::from_str(
            r#"{"type": "stdio", "command": "npx", "headers": {"Authorization": "Bearer t"}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_stdio_defaults() {
        let descriptor: ServerDescriptor =
            serde_json::from_str(r#"{"type": "stdio", "command": "uvx"}"#).unwrap();
        assert_eq!(
            descriptor,
            ServerDescriptor::stdio("uvx", vec![], BTreeMap::new())
        );
    }

    #[test]
    fn test_validate_http_valid() {
        let descriptor = ServerDescriptor::http("https://mcp.grep.app", BTreeMap::new());
        assert!(descriptor.validate("grep").is_ok());
    }

    #[test]
    fn test_validate_http_relative_url() {
        let descriptor = ServerDescriptor::http("/mcp", BTreeMap::new());
        assert!(matches!(
            descriptor.validate("broken"),
            Err(ToolgateError::InvalidDescriptor { .. })
        ));
    }

    #[test]
    fn test_validate_http_wrong_scheme() {
        let descriptor = ServerDescriptor::http("ftp://mcp.example.com", BTreeMap::new());
        assert!(descriptor.validate("ftp").is_err());
    }

    #[test]
    fn test_validate_stdio_empty_command() {
        let descriptor = ServerDescriptor::stdio("  ", vec![], BTreeMap::new());
        let err = descriptor.validate("empty").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid descriptor for server 'empty': command is required for stdio transport"
        );
    }

    #[test]
    fn test_transport_names() {
        assert_eq!(
            ServerDescriptor::http("https://a.b", BTreeMap::new()).transport(),
            "http"
        );
        assert_eq!(
            ServerDescriptor::stdio("node", vec![], BTreeMap::new()).transport(),
            "stdio"
        );
    }
}
