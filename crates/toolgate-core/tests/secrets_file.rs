use toolgate_core::config::{load_secrets, parse_secrets_toml, secrets_path_in};
use toolgate_core::provider::Provider;
use toolgate_core::registry::ToolRegistry;
use toolgate_core::render::mcp_servers_json;
use toolgate_core::secrets::{SUPABASE_ACCESS_TOKEN, Secrets, Z_AI_API_KEY};
use tempfile::TempDir;

fn write_secrets(temp: &TempDir, content: &str) -> std::path::PathBuf {
    let path = secrets_path_in(temp.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn secrets_path_is_namespaced() {
    let temp = TempDir::new().unwrap();
    let path = secrets_path_in(temp.path());

    assert_eq!(path, temp.path().join("toolgate").join("secrets.toml"));
}

#[test]
fn file_values_feed_the_registry() {
    let temp = TempDir::new().unwrap();
    let path = write_secrets(
        &temp,
        "[secrets]\nSUPABASE_ACCESS_TOKEN = \"sbp_file\"\nZ_AI_API_KEY = \"zai_file\"\n",
    );

    let secrets = load_secrets(Some(&path), Secrets::new()).unwrap();
    let registry = ToolRegistry::new(&secrets);
    let rendered = mcp_servers_json(&registry.servers(Provider::ZAi));

    assert_eq!(
        rendered["mcpServers"]["supabase"]["headers"]["Authorization"],
        "Bearer sbp_file"
    );
    assert_eq!(
        rendered["mcpServers"]["zai-mcp-server"]["env"]["Z_AI_API_KEY"],
        "zai_file"
    );
}

#[test]
fn environment_overrides_file() {
    let temp = TempDir::new().unwrap();
    let path = write_secrets(
        &temp,
        "[secrets]\nSUPABASE_ACCESS_TOKEN = \"sbp_file\"\nZ_AI_API_KEY = \"zai_file\"\n",
    );

    let env = Secrets::new().with(Z_AI_API_KEY, "zai_env");
    let secrets = load_secrets(Some(&path), env).unwrap();

    assert_eq!(secrets.get(SUPABASE_ACCESS_TOKEN), Some("sbp_file"));
    assert_eq!(secrets.get(Z_AI_API_KEY), Some("zai_env"));
}

#[test]
fn empty_environment_value_keeps_file_value() {
    let temp = TempDir::new().unwrap();
    let path = write_secrets(&temp, "[secrets]\nSUPABASE_ACCESS_TOKEN = \"sbp_file\"\n");

    let env = Secrets::from_lookup(|name| match name {
        SUPABASE_ACCESS_TOKEN => Some(String::new()),
        _ => None,
    });
    let secrets = load_secrets(Some(&path), env).unwrap();

    assert_eq!(secrets.get(SUPABASE_ACCESS_TOKEN), Some("sbp_file"));
    assert!(!secrets.missing().contains(&SUPABASE_ACCESS_TOKEN));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.toml");

    let err = load_secrets(Some(&path), Secrets::new()).unwrap_err();
    assert!(err.to_string().contains("Failed to read secrets file"));
}

#[test]
fn malformed_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = write_secrets(&temp, "[secrets\n");

    let err = parse_secrets_toml(&path).unwrap_err();
    let chain = format!("{err:#}");

    assert!(chain.contains("Failed to parse secrets file"), "{chain}");
    assert!(chain.contains("TOML parsing error"), "{chain}");
}
