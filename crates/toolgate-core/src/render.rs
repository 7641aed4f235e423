//! Render server tables into the `mcpServers` document agent runtimes load.

use serde_json::{Map, Value, json};

use crate::mcp::ServerDescriptor;
use crate::registry::ServerMap;

/// Render `servers` as `{"mcpServers": {...}}`.
pub fn mcp_servers_json(servers: &ServerMap) -> Value {
    json!({ "mcpServers": build_mcp_entries(servers) })
}

fn build_mcp_entries(servers: &ServerMap) -> Map<String, Value> {
    let mut map = Map::new();
    for (name, descriptor) in servers {
        map.insert(name.clone(), render_server(descriptor));
    }
    map
}

fn render_server(descriptor: &ServerDescriptor) -> Value {
    match descriptor {
        ServerDescriptor::Stdio { command, args, env } => json!({
            "type": "stdio",
            "command": command,
            "args": args,
            "env": env,
        }),
        ServerDescriptor::Http { url, headers } => json!({
            "type": "http",
            "url": url,
            "headers": headers,
        }),
    }
}
