use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::get_config_path;

/// Starter config written by `bioavail init`. Parses back into the
/// default [`Config`](crate::config::Config).
const STARTER_CONFIG: &str = r#"# bioavail configuration
#
# Supplements analyzed by `bioavail` (or `bioavail batch`).
# An empty list falls back to the built-in priority list below.
supplements:
  - Curcumin
  - Omega-3
  - Vitamin D
  - Magnesium
  - Zinc
  - Iron
  - CoQ10
  - Probiotics
  - Melatonin
  - Vitamin B12
  - Calcium
  - Vitamin C
  - Vitamin E
  - Ashwagandha
  - Rhodiola rosea

# Optional user profile for personalized recommendations.
# Gastro conditions: low-gastric-acid, celiac, crohn-colitis, irritable-bowel
# Lifestyle tags: vegetarian, vegan, athlete, smoker
#profile:
#  age: 35
#  gastro_conditions: []
#  lifestyle: [athlete]

# Where JSON reports are written (default: ~/bioavailability_reports).
#output_dir: /tmp/bioavailability_reports
"#;

/// Write a commented starter config.
///
/// If `path` is None, uses the default config path. Refuses to clobber an
/// existing file unless `force` is set. Returns the path written.
pub fn write_starter_config(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let config_path = path.unwrap_or_else(get_config_path);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (pass --force to overwrite)",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory at {}", parent.display()))?;
    }

    fs::write(&config_path, STARTER_CONFIG)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, DEFAULT_SUPPLEMENTS};
    use std::env;

    #[test]
    fn test_starter_config_parses_to_defaults() {
        let config: Config = serde_saphyr::from_str(STARTER_CONFIG).unwrap();
        assert_eq!(config.supplements, DEFAULT_SUPPLEMENTS.to_vec());
        assert!(config.profile.is_none());
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn test_write_starter_config_refuses_overwrite() {
        let path = env::temp_dir().join("bioavail_test_init_config.yaml");
        fs::remove_file(&path).ok();

        let written = write_starter_config(Some(path.clone()), false).unwrap();
        assert_eq!(written, path);
        assert!(path.exists());

        let result = write_starter_config(Some(path.clone()), false);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already exists"));

        assert!(write_starter_config(Some(path.clone()), true).is_ok());

        fs::remove_file(&path).ok();
    }
}
