//! CLI runner - executes commands

use crate::cache::HashCache;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::codegen::generate_declaration;
use crate::config::{load_config, validate_config, Config};
use crate::engine::{declaration_path, resolve_name, EndpointReport, Generator, RunReport};
use crate::error::{Error, Result, ResultExt};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI runner
#[derive(Debug)]
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Generate {
                base_url,
                token,
                type_path,
                no_cache,
            } => {
                self.generate(
                    base_url.as_deref(),
                    token.as_deref(),
                    type_path.as_deref(),
                    *no_cache,
                )
                .await
            }
            Commands::Preview { file, name } => self.preview(file, name),
            Commands::Validate => self.validate(),
        }
    }

    /// Load the config file named on the command line
    fn load_config(&self) -> Result<Config> {
        load_config(&self.cli.config)
    }

    /// Fetch all endpoints and write their declarations
    async fn generate(
        &self,
        base_url: Option<&str>,
        token: Option<&str>,
        type_path: Option<&Path>,
        no_cache: bool,
    ) -> Result<()> {
        let config = apply_overrides(self.load_config()?, base_url, token, type_path)?;

        let mut generator = Generator::from_config(config)?;
        if no_cache {
            generator = generator.with_cache(HashCache::in_memory());
        }

        let report = generator.run().await?;
        self.print_report(&report);

        Ok(())
    }

    /// Print the declaration for a local sample file
    fn preview(&self, file: &Path, name: &str) -> Result<()> {
        let content = fs::read_to_string(file).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: file.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        let sample: Value = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in '{}'", file.display()))?;

        print!("{}", generate_declaration(&sample, name));
        Ok(())
    }

    /// Validate the config and list the endpoints
    fn validate(&self) -> Result<()> {
        let config = self.load_config()?;
        let mut anonymous = 0;

        for endpoint in &config.apis {
            let name = resolve_name(endpoint, &mut anonymous);
            let path = declaration_path(&config.type_path, &name);
            self.output_message(&json!({
                "type": "ENDPOINT",
                "api": endpoint.api(),
                "name": name,
                "path": path.display().to_string(),
            }));
        }

        self.output_message(&json!({
            "type": "LOG",
            "log": {
                "level": "INFO",
                "message": format!("Config is valid with {} apis", config.apis.len())
            }
        }));

        Ok(())
    }

    /// Print one line per endpoint and a summary
    fn print_report(&self, report: &RunReport) {
        for endpoint in &report.endpoints {
            let message = match endpoint {
                EndpointReport::Generated {
                    api,
                    name,
                    path,
                    outcome,
                } => json!({
                    "type": "GENERATED",
                    "api": api,
                    "name": name,
                    "path": path.display().to_string(),
                    "outcome": format!("{outcome:?}").to_lowercase(),
                }),
                EndpointReport::Failed { api, error } => json!({
                    "type": "FAILED",
                    "api": api,
                    "error": error.to_string(),
                }),
            };
            self.output_message(&message);
        }

        self.output_message(&json!({
            "type": "SUMMARY",
            "written": report.written(),
            "unchanged": report.unchanged(),
            "failed": report.failed(),
        }));
    }

    /// Output a message in the selected format
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Text => println!("{}", format_text(msg)),
        }
    }
}

/// Apply command-line overrides on top of the loaded config
fn apply_overrides(
    mut config: Config,
    base_url: Option<&str>,
    token: Option<&str>,
    type_path: Option<&Path>,
) -> Result<Config> {
    if let Some(base_url) = base_url {
        config.base_url = base_url.to_string();
    }
    if let Some(token) = token {
        config.token = Some(token.to_string());
    }
    if let Some(type_path) = type_path {
        config.type_path = PathBuf::from(type_path);
    }

    validate_config(&config)?;
    Ok(config)
}

/// Render a message for humans
fn format_text(msg: &Value) -> String {
    let field = |key: &str| msg.get(key).and_then(Value::as_str).unwrap_or_default();

    match field("type") {
        "GENERATED" => format!("{} {} ({})", field("path"), field("outcome"), field("api")),
        "FAILED" => format!("{} failed: {}", field("api"), field("error")),
        "ENDPOINT" => format!("{} -> {}", field("api"), field("path")),
        "SUMMARY" => format!(
            "{} written, {} unchanged, {} failed",
            msg["written"], msg["unchanged"], msg["failed"]
        ),
        _ => msg
            .pointer("/log/message")
            .and_then(Value::as_str)
            .map_or_else(|| msg.to_string(), ToString::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from_str;

    #[test]
    fn test_apply_overrides() {
        let config = load_config_from_str("base_url: http://a\napis:\n  - /x\n").unwrap();
        let config = apply_overrides(
            config,
            Some("http://b"),
            Some("tok"),
            Some(Path::new("out")),
        )
        .unwrap();

        assert_eq!(config.base_url, "http://b");
        assert_eq!(config.token.as_deref(), Some("tok"));
        assert_eq!(config.type_path, PathBuf::from("out"));
    }

    #[test]
    fn test_apply_no_overrides_keeps_config() {
        let config = load_config_from_str("base_url: http://a\napis:\n  - /x\n").unwrap();
        let config = apply_overrides(config, None, None, None).unwrap();
        assert_eq!(config.base_url, "http://a");
        assert!(config.token.is_none());
    }

    #[test]
    fn test_format_text() {
        let msg = json!({"type": "FAILED", "api": "/x", "error": "HTTP 404: Not Found"});
        assert_eq!(format_text(&msg), "/x failed: HTTP 404: Not Found");

        let msg = json!({"type": "SUMMARY", "written": 2, "unchanged": 1, "failed": 0});
        assert_eq!(format_text(&msg), "2 written, 1 unchanged, 0 failed");

        let msg = json!({"type": "LOG", "log": {"level": "INFO", "message": "ok"}});
        assert_eq!(format_text(&msg), "ok");
    }
}
