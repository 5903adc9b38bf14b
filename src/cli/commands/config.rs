use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;

pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if !path.exists() {
            warning(format!(
                "No configuration file at {}; defaults are in use.",
                path.display()
            ));
            if *print_config {
                print!("{}", serde_yaml::to_string(&Config::default())?);
            }
            return Ok(());
        }

        let content = fs::read_to_string(path)?;

        if *print_config {
            info(format!("Configuration file: {}", path.display()));
            let cfg = Config::parse(&content)?;
            print!("{}", serde_yaml::to_string(&cfg)?);
        }

        if *check {
            let missing = Config::missing_keys(&content)?;
            if missing.is_empty() {
                success("Configuration is complete.");
            } else {
                for key in &missing {
                    warning(format!("Missing key '{key}' (default value in use)"));
                }
            }
        }
    }
    Ok(())
}
