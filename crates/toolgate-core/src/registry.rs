//! Provider tool registry.
//!
//! Built once from the catalog and a [`Secrets`] map, then read-only. Both
//! lookups degrade to empty results for providers the registry does not
//! hold; neither ever fails.

use std::collections::{BTreeMap, HashMap};

use crate::catalog::CatalogServer;
use crate::mcp::{ServerDescriptor, ToolId};
use crate::provider::Provider;
use crate::secrets::Secrets;

/// Server name → descriptor, ordered by name.
pub type ServerMap = BTreeMap<String, ServerDescriptor>;

/// Frozen per-provider server table.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    servers: HashMap<Provider, ServerMap>,
}

impl ToolRegistry {
    /// Build the registry for every known provider.
    pub fn new(secrets: &Secrets) -> Self {
        for name in secrets.missing() {
            tracing::debug!(secret = name, "Credential not set, using empty value");
        }

        let servers = Provider::ALL
            .into_iter()
            .map(|provider| {
                let map: ServerMap = CatalogServer::ALL
                    .iter()
                    .filter(|server| server.serves(provider))
                    .map(|server| (server.name().to_string(), server.descriptor(secrets)))
                    .collect();
                tracing::debug!(%provider, servers = map.len(), "Registered MCP servers");
                (provider, map)
            })
            .collect();

        Self { servers }
    }

    /// Build the registry from the current process environment.
    pub fn from_env() -> Self {
        Self::new(&Secrets::from_env())
    }

    /// A registry holding no providers.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Servers configured for `provider`.
    ///
    /// Returns an owned copy; a provider the registry does not hold yields
    /// an empty map.
    pub fn servers(&self, provider: Provider) -> ServerMap {
        self.servers.get(&provider).cloned().unwrap_or_default()
    }

    /// Same as [`servers`](Self::servers) for a raw provider identifier.
    pub fn servers_for_id(&self, provider: &str) -> ServerMap {
        match provider.parse::<Provider>() {
            Ok(provider) => self.servers(provider),
            Err(_) => ServerMap::new(),
        }
    }

    /// Providers present in the registry, in display order.
    pub fn providers(&self) -> Vec<Provider> {
        Provider::ALL
            .into_iter()
            .filter(|provider| self.servers.contains_key(provider))
            .collect()
    }

    /// Tool identifiers the agent may invoke for `provider`.
    ///
    /// `model` is accepted so callers can pass it today; the allow-list does
    /// not vary per model yet.
    pub fn allowed_tools(&self, provider: Provider, model: Option<&str>) -> Vec<String> {
        self.allowed_tool_ids(provider, model)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Same as [`allowed_tools`](Self::allowed_tools) for a raw provider identifier.
    pub fn allowed_tools_for_id(&self, provider: &str, model: Option<&str>) -> Vec<String> {
        match provider.parse::<Provider>() {
            Ok(provider) => self.allowed_tools(provider, model),
            Err(_) => Vec::new(),
        }
    }

    /// Typed form of the allow-list, in catalog order.
    pub fn allowed_tool_ids(&self, provider: Provider, _model: Option<&str>) -> Vec<ToolId> {
        let Some(servers) = self.servers.get(&provider) else {
            return Vec::new();
        };

        CatalogServer::ALL
            .iter()
            .filter(|server| servers.contains_key(server.name()))
            .flat_map(|server| server.tool_ids())
            .collect()
    }

    /// Check whether `tool` is on the allow-list for `provider`.
    pub fn is_tool_allowed(&self, provider: Provider, tool: &str) -> bool {
        let Ok(id) = tool.parse::<ToolId>() else {
            return false;
        };
        self.allowed_tool_ids(provider, None).contains(&id)
    }
}
