//! CLI command implementations.

pub mod analyze;
pub mod insights;
pub mod missing;
pub mod summary;
pub mod types;

use std::path::{Path, PathBuf};

use autoeda::{EdaConfig, Parser, Table};

/// Fail early with a readable message when the input file is absent.
fn ensure_exists(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }
    Ok(())
}

/// Load configuration from a JSON file, or the defaults.
fn load_config(path: Option<PathBuf>) -> Result<EdaConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => EdaConfig::from_json_file(&path)?,
        None => EdaConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Load a table with the default parser settings.
fn load_table(file: &Path) -> Result<Table, Box<dyn std::error::Error>> {
    ensure_exists(file)?;
    let (table, _) = Parser::new().parse_file(file)?;
    Ok(table)
}
