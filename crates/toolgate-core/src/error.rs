//! Typed errors for the parsing surfaces of the crate.
//!
//! Registry lookups never fail; these only come out of `FromStr`
//! implementations and descriptor validation.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolgateError {
    #[error("Unknown provider: '{0}'. Valid values: anthropic, z-ai, moonshot")]
    UnknownProvider(String),

    #[error("Invalid tool identifier: '{0}'. Expected mcp__<server>__<tool>")]
    InvalidToolId(String),

    #[error("Invalid descriptor for server '{server}': {reason}")]
    InvalidDescriptor { server: String, reason: String },
}
