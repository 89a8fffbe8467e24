mod init;
mod schema;

pub use init::write_starter_config;
pub use schema::{Config, ProfileConfig, DEFAULT_SUPPLEMENTS};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/bioavail/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("bioavail")
}

/// Get the default config file path (~/.config/bioavail/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/bioavail/config.yaml)
///
/// A missing file at the default path yields the built-in defaults; an
/// explicitly given path must exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(config_path) => {
            if !config_path.exists() {
                anyhow::bail!("Config file not found at {}", config_path.display());
            }
            read_config(&config_path)
        }
        None => {
            let config_path = get_config_path();
            if !config_path.exists() {
                return Ok(Config::default());
            }
            read_config(&config_path)
        }
    }
}

fn read_config(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_config_from_explicit_path() {
        let path = env::temp_dir().join("bioavail_test_load_config.yaml");
        fs::write(&path, "supplements: [Curcumin, Zinc]\n").unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.supplements, vec!["Curcumin", "Zinc"]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_config_missing_explicit_path_errors() {
        let path = env::temp_dir().join("bioavail_test_no_such_config.yaml");
        fs::remove_file(&path).ok();

        let result = load_config(Some(path));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_config_rejects_invalid_yaml() {
        let path = env::temp_dir().join("bioavail_test_bad_config.yaml");
        fs::write(&path, "supplements: [unclosed\n").unwrap();

        let result = load_config(Some(path.clone()));
        assert!(result.is_err());

        fs::remove_file(&path).ok();
    }
}
