//! MCP (Model Context Protocol) server descriptors and tool identifiers

pub mod descriptor;
pub mod tool;

pub use descriptor::ServerDescriptor;
pub use tool::ToolId;
