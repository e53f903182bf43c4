use std::path::{Path, PathBuf};

use anyhow::Context;
use toml::{map::Map, Value};

pub fn workspace_dir() -> anyhow::Result<PathBuf> {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .context("failed to locate workspace manifest")?
        .stdout;

    let cargo_path = Path::new(std::str::from_utf8(&output)?.trim());
    let dir = cargo_path
        .parent()
        .context("workspace manifest has no parent directory")?;

    Ok(dir.to_path_buf())
}

pub fn load_config(config_name: &str) -> anyhow::Result<Map<String, Value>> {
    let workspace_dir = workspace_dir()?;
    let config = std::fs::read_to_string(workspace_dir.join(config_name))
        .with_context(|| format!("failed to read {config_name}"))?;

    let config = toml::from_str::<Map<String, Value>>(&config)
        .with_context(|| format!("failed to parse {config_name}"))?;

    Ok(config)
}
