//! Compiled-in MCP server definitions.
//!
//! Each [`CatalogServer`] carries its connection literal, the fixed set of
//! tools the agent may call on it, and the providers it is offered to.
//! [`CatalogServer::ALL`] is the canonical order allow-lists are built in.

use std::collections::BTreeMap;

use crate::mcp::{ServerDescriptor, ToolId};
use crate::provider::Provider;
use crate::secrets::{SUPABASE_ACCESS_TOKEN, Secrets, Z_AI_API_KEY};

pub const GREP_URL: &str = "https://mcp.grep.app";
pub const SUPABASE_URL: &str = "https://mcp.supabase.com/mcp";
pub const ZAI_WEB_SEARCH_URL: &str = "https://api.z.ai/api/mcp/web_search_prime/mcp";
pub const ZAI_WEB_READER_URL: &str = "https://api.z.ai/api/mcp/web_reader/mcp";

const ALL_PROVIDERS: &[Provider] = &[Provider::Anthropic, Provider::ZAi, Provider::Moonshot];
const ZAI_ONLY: &[Provider] = &[Provider::ZAi];

const SUPABASE_TOOLS: &[&str] = &[
    "search_docs",
    "list_tables",
    "list_extensions",
    "list_migrations",
    "apply_migration",
    "execute_sql",
    "get_logs",
    "get_advisors",
    "get_project_url",
    "get_anon_key",
    "generate_typescript_types",
    "list_edge_functions",
    "get_edge_function",
    "deploy_edge_function",
    "create_branch",
    "list_branches",
    "delete_branch",
    "merge_branch",
];

/// A server known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogServer {
    /// Code search across public GitHub repositories
    Grep,
    WebSearchPrime,
    /// Z.ai vision server (image and video analysis)
    ZaiVision,
    WebReader,
    /// Database operations
    Supabase,
    /// Step-by-step reasoning assistant
    SequentialThinking,
}

impl CatalogServer {
    /// Canonical order: code search, provider extras, database, reasoning.
    pub const ALL: [CatalogServer; 6] = [
        CatalogServer::Grep,
        CatalogServer::WebSearchPrime,
        CatalogServer::ZaiVision,
        CatalogServer::WebReader,
        CatalogServer::Supabase,
        CatalogServer::SequentialThinking,
    ];

    /// Server name used as the registry key and in tool identifiers.
    pub fn name(&self) -> &'static str {
        match self {
            CatalogServer::Grep => "grep",
            CatalogServer::WebSearchPrime => "web-search-prime",
            CatalogServer::ZaiVision => "zai-mcp-server",
            CatalogServer::WebReader => "web-reader",
            CatalogServer::Supabase => "supabase",
            CatalogServer::SequentialThinking => "sequential-thinking",
        }
    }

    /// Tool names the agent may call on this server, in allow-list order.
    pub fn tools(&self) -> &'static [&'static str] {
        match self {
            CatalogServer::Grep => &["searchGitHub"],
            CatalogServer::WebSearchPrime => &["webSearchPrime"],
            CatalogServer::ZaiVision => &["analyze_image", "analyze_video"],
            CatalogServer::WebReader => &["webReader"],
            CatalogServer::Supabase => SUPABASE_TOOLS,
            CatalogServer::SequentialThinking => &["sequentialthinking"],
        }
    }

    pub fn tool_ids(&self) -> impl Iterator<Item = ToolId> + '_ {
        self.tools()
            .iter()
            .map(move |tool| ToolId::new(self.name(), *tool))
    }

    pub fn providers(&self) -> &'static [Provider] {
        match self {
            CatalogServer::Grep | CatalogServer::Supabase | CatalogServer::SequentialThinking => {
                ALL_PROVIDERS
            }
            CatalogServer::WebSearchPrime | CatalogServer::ZaiVision | CatalogServer::WebReader => {
                ZAI_ONLY
            }
        }
    }

    /// Secret names interpolated into this server's descriptor.
    pub fn secret_names(&self) -> &'static [&'static str] {
        match self {
            CatalogServer::Grep | CatalogServer::SequentialThinking => &[],
            CatalogServer::WebSearchPrime | CatalogServer::ZaiVision | CatalogServer::WebReader => {
                &[Z_AI_API_KEY]
            }
            CatalogServer::Supabase => &[SUPABASE_ACCESS_TOKEN],
        }
    }

    pub fn serves(&self, provider: Provider) -> bool {
        self.providers().contains(&provider)
    }

    /// Build the connection descriptor, interpolating credentials.
    ///
    /// Missing credentials become empty strings.
    pub fn descriptor(&self, secrets: &Secrets) -> ServerDescriptor {
        match self {
            CatalogServer::Grep => ServerDescriptor::http(GREP_URL, BTreeMap::new()),
            CatalogServer::WebSearchPrime => {
                ServerDescriptor::http(ZAI_WEB_SEARCH_URL, bearer(secrets, Z_AI_API_KEY))
            }
            CatalogServer::ZaiVision => ServerDescriptor::stdio(
                "npx",
                vec!["-y".to_string(), "@z_ai/mcp-server".to_string()],
                BTreeMap::from([
                    (Z_AI_API_KEY.to_string(), secrets.get_or_empty(Z_AI_API_KEY)),
                    ("Z_AI_MODE".to_string(), "ZAI".to_string()),
                ]),
            ),
            CatalogServer::WebReader => {
                ServerDescriptor::http(ZAI_WEB_READER_URL, bearer(secrets, Z_AI_API_KEY))
            }
            CatalogServer::Supabase => {
                ServerDescriptor::http(SUPABASE_URL, bearer(secrets, SUPABASE_ACCESS_TOKEN))
            }
            CatalogServer::SequentialThinking => ServerDescriptor::stdio(
                "npx",
                vec![
                    "-y".to_string(),
                    "@modelcontextprotocol/server-sequential-thinking".to_string(),
                ],
                BTreeMap::new(),
            ),
        }
    }

    /// Look up a catalog entry by server name.
    pub fn by_name(name: &str) -> Option<CatalogServer> {
        Self::ALL.into_iter().find(|server| server.name() == name)
    }
}

fn bearer(secrets: &Secrets, name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(
        "Authorization".to_string(),
        format!("Bearer {}", secrets.get_or_empty(name)),
    )])
}
