use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::utils::verbose_println;

/// Settings file format; every key is optional
///
/// ```json
/// { "iconsDir": "assets/icons", "files": ["icons_l.png"], "radius": 1, "threshold": 245 }
/// ```
#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub icons_dir: Option<PathBuf>,
    pub files: Option<Vec<String>>,
    pub radius: Option<u8>,
    pub threshold: Option<u8>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Args {
    /// Load the `--config` file, if any, and fill in values not given on the command line
    ///
    /// Command-line arguments take precedence over config file values.
    pub fn load_and_merge_config(&mut self) -> Result<()> {
        if let Some(config_path) = self.config_file.clone() {
            let config = ConfigFile::load(&config_path)?;
            self.merge_from_config(config);

            verbose_println(
                self.verbose && !self.json_progress,
                &format!("Loaded configuration from: {}", config_path.display()),
            );
        }
        Ok(())
    }

    fn merge_from_config(&mut self, config: ConfigFile) {
        if self.icons_dir.is_none() {
            self.icons_dir = config.icons_dir;
        }
        if self.files.is_empty() {
            if let Some(files) = config.files {
                self.files = files;
            }
        }
        if self.radius.is_none() {
            self.radius = config.radius;
        }
        if self.threshold.is_none() {
            self.threshold = config.threshold;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_processing::ThickenConfig;
    use clap::Parser;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("thicken.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_full_config() {
        let config: ConfigFile = serde_json::from_str(
            r#"{"iconsDir": "sprites", "files": ["a.png", "b.png"], "radius": 2, "threshold": 200}"#,
        )
        .unwrap();

        assert_eq!(config.icons_dir, Some(PathBuf::from("sprites")));
        assert_eq!(config.files, Some(vec!["a.png".to_string(), "b.png".to_string()]));
        assert_eq!(config.radius, Some(2));
        assert_eq!(config.threshold, Some(200));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: ConfigFile = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_radius_out_of_range_rejected() {
        assert!(serde_json::from_str::<ConfigFile>(r#"{"radius": 300}"#).is_err());
    }

    #[test]
    fn test_cli_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"{"iconsDir": "sprites", "files": ["a.png"], "radius": 4, "threshold": 100}"#,
        );

        let mut args = Args::try_parse_from([
            "icon-thickener",
            "--config",
            path.to_str().unwrap(),
            "--radius",
            "2",
        ])
        .unwrap();
        args.load_and_merge_config().unwrap();

        assert_eq!(
            args.thicken_config(),
            ThickenConfig {
                radius: 2,
                threshold: 100
            }
        );
        assert_eq!(args.icons_dir(), PathBuf::from("sprites"));
        assert_eq!(args.icon_files(), vec!["a.png"]);
    }

    #[test]
    fn test_verbose_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), r#"{"threshold": 200}"#);
        let mut args = Args {
            config_file: Some(path),
            verbose: true,
            ..Args::default()
        };
        args.load_and_merge_config().unwrap();
        assert_eq!(args.thicken_config().threshold, 200);
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = Args {
            config_file: Some(dir.path().join("absent.json")),
            ..Args::default()
        };
        let err = args.load_and_merge_config().unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_malformed_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "{ radius: ");
        let mut args = Args {
            config_file: Some(path),
            ..Args::default()
        };
        assert!(args.load_and_merge_config().is_err());
    }
}
