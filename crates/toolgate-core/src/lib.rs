//! Toolgate Core Library
//!
//! Per-provider registry of the MCP servers a chat agent may connect to,
//! and of the tool identifiers it is allowed to invoke on them.

pub mod catalog;
pub mod config;
pub mod error;
pub mod mcp;
pub mod provider;
pub mod registry;
pub mod render;
pub mod secrets;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::error::ToolgateError;
    pub use crate::mcp::{ServerDescriptor, ToolId};
    pub use crate::provider::Provider;
    pub use crate::registry::{ServerMap, ToolRegistry};
    pub use crate::secrets::Secrets;
}
