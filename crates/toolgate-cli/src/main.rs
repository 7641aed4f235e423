//! Toolgate - MCP server and tool allow-list inspector
//!
//! Usage:
//!   toolgate providers            # List known providers
//!   toolgate servers <provider>   # Show MCP servers for a provider
//!   toolgate tools <provider>     # Show allowed tool identifiers
//!   toolgate render <provider>    # Print the mcpServers JSON document
//!   toolgate check                # Validate descriptors and credentials

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use toolgate_core::catalog::CatalogServer;
use toolgate_core::config::load_secrets;
use toolgate_core::mcp::ServerDescriptor;
use toolgate_core::provider::Provider;
use toolgate_core::registry::{ServerMap, ToolRegistry};
use toolgate_core::render::mcp_servers_json;
use toolgate_core::secrets::Secrets;

#[derive(Parser)]
#[command(name = "toolgate")]
#[command(about = "MCP server and tool allow-list registry", long_about = None)]
struct Cli {
    /// Secrets file (TOML). Defaults to <config dir>/toolgate/secrets.toml when present
    #[arg(long, global = true)]
    secrets: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List known providers
    Providers,

    /// Show MCP servers configured for a provider
    Servers {
        /// Provider identifier (anthropic, z-ai, moonshot)
        provider: String,
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show tool identifiers the agent may invoke for a provider
    Tools {
        /// Provider identifier (anthropic, z-ai, moonshot)
        provider: String,
        /// Model identifier (accepted, currently does not change the list)
        #[arg(long)]
        model: Option<String>,
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Print the mcpServers JSON document for a provider
    Render {
        /// Provider identifier (anthropic, z-ai, moonshot)
        provider: String,
    },

    /// Validate every descriptor and report missing credentials
    Check,
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toolgate=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let secrets = load_secrets(cli.secrets.as_deref(), Secrets::from_env())?;
    let registry = ToolRegistry::new(&secrets);

    match cli.command {
        Commands::Providers => {
            for provider in registry.providers() {
                println!("{provider}");
            }
        }
        Commands::Servers { provider, format } => {
            warn_if_unknown(&provider);
            run_servers(&registry.servers_for_id(&provider), format)?;
        }
        Commands::Tools {
            provider,
            model,
            format,
        } => {
            warn_if_unknown(&provider);
            let tools = registry.allowed_tools_for_id(&provider, model.as_deref());
            match format {
                OutputFormat::Table => {
                    for tool in &tools {
                        println!("{tool}");
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tools)?),
            }
        }
        Commands::Render { provider } => {
            warn_if_unknown(&provider);
            let document = mcp_servers_json(&registry.servers_for_id(&provider));
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        Commands::Check => run_check(&registry, &secrets)?,
    }

    Ok(())
}

fn warn_if_unknown(provider: &str) {
    if let Err(e) = provider.parse::<Provider>() {
        tracing::warn!("{e}");
    }
}

fn run_servers(servers: &ServerMap, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(servers)?),
        OutputFormat::Table => {
            if servers.is_empty() {
                println!("No MCP servers configured");
                return Ok(());
            }
            println!("{:<22} {:<6} TARGET", "NAME", "TYPE");
            for (name, descriptor) in servers {
                println!(
                    "{:<22} {:<6} {}",
                    name,
                    descriptor.transport(),
                    describe(descriptor)
                );
            }
        }
    }
    Ok(())
}

/// One-line summary with credential values masked.
fn describe(descriptor: &ServerDescriptor) -> String {
    match descriptor {
        ServerDescriptor::Http { url, headers } => {
            if headers.is_empty() {
                url.clone()
            } else {
                let keys: Vec<_> = headers.keys().map(|k| format!("{k}: ***")).collect();
                format!("{url} [{}]", keys.join(", "))
            }
        }
        ServerDescriptor::Stdio { command, args, env } => {
            let mut line = std::iter::once(command.as_str())
                .chain(args.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join(" ");
            if !env.is_empty() {
                let keys: Vec<_> = env.keys().map(|k| format!("{k}=***")).collect();
                line.push_str(&format!(" [{}]", keys.join(", ")));
            }
            line
        }
    }
}

fn run_check(registry: &ToolRegistry, secrets: &Secrets) -> Result<()> {
    let mut invalid = 0;
    for provider in registry.providers() {
        for (name, descriptor) in registry.servers(provider) {
            if let Err(e) = descriptor.validate(&name) {
                println!("✗ {provider}: {e}");
                invalid += 1;
            }
        }
    }

    for name in secrets.missing() {
        let affected: Vec<_> = CatalogServer::ALL
            .iter()
            .filter(|server| server.secret_names().contains(&name))
            .map(|server| server.name())
            .collect();
        tracing::warn!(
            secret = name,
            servers = %affected.join(", "),
            "Credential is empty; authenticated servers will be rejected"
        );
    }

    if invalid > 0 {
        anyhow::bail!("{invalid} invalid server descriptor(s)");
    }
    println!("✓ All server descriptors are valid");
    Ok(())
}
