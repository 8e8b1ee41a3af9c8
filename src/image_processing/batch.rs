use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::thicken::{load_image, thicken_file, thicken_with_stats};
use super::{ThickenConfig, ThickenStats};

/// Icons directory, relative to the working directory
pub const DEFAULT_ICONS_DIR: &str = "assets/icons";

/// Sprite sheets rewritten by a default run, in processing order
pub const DEFAULT_ICON_FILES: [&str; 3] = ["icons_l.png", "icons_t.png", "icons_r.png"];

/// Suffix appended to a file name for the intermediate output
pub const TEMP_SUFFIX: &str = ".tmp";

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Decode and transform but never write anything
    pub dry_run: bool,
}

/// Result of processing one icon sheet
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub stats: ThickenStats,
    pub elapsed: Duration,
    /// False in dry-run mode
    pub written: bool,
}

/// A fixed list of icon sheets rewritten in place
#[derive(Debug, Clone)]
pub struct IconBatch {
    icons_dir: PathBuf,
    files: Vec<String>,
}

impl IconBatch {
    /// Batch over the default sprite sheets in `icons_dir`
    pub fn new(icons_dir: impl Into<PathBuf>) -> Self {
        Self::with_files(icons_dir, DEFAULT_ICON_FILES)
    }

    pub fn with_files<I, S>(icons_dir: impl Into<PathBuf>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            icons_dir: icons_dir.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn icons_dir(&self) -> &Path {
        &self.icons_dir
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Full paths of every sheet, in processing order
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|name| self.icons_dir.join(name)).collect()
    }

    /// Reject empty lists and entries that are not plain file names
    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(anyhow::anyhow!("No icon files specified"));
        }

        for name in &self.files {
            let is_bare = Path::new(name)
                .file_name()
                .map(|f| f == name.as_str())
                .unwrap_or(false);
            if !is_bare {
                return Err(anyhow::anyhow!(
                    "Icon file must be a plain file name, got: '{}'",
                    name
                ));
            }
        }

        Ok(())
    }

    /// Check that every sheet exists before anything is touched
    ///
    /// The first missing file aborts with an `io::ErrorKind::NotFound` error
    /// naming its path.
    pub fn preflight(&self) -> Result<Vec<PathBuf>> {
        let paths = self.paths();
        for path in &paths {
            if !path.exists() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("File not found: {}", path.display()),
                )
                .into());
            }
        }
        Ok(paths)
    }

    /// Intermediate output path: `<file name>.tmp` beside the original
    pub fn temp_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(TEMP_SUFFIX);
        path.with_file_name(name)
    }

    /// Thicken one sheet in place: write to the temp path, then rename over the original
    ///
    /// If the rename fails the temp file is left behind.
    pub fn process_file(
        path: &Path,
        config: &ThickenConfig,
        options: &BatchOptions,
    ) -> Result<FileOutcome> {
        let start = Instant::now();

        let stats = if options.dry_run {
            let (img, _) = load_image(path)?;
            thicken_with_stats(&img, config).1
        } else {
            let tmp = Self::temp_path(path);
            let stats = thicken_file(path, &tmp, config)?;
            fs::rename(&tmp, path).with_context(|| {
                format!(
                    "Failed to replace {} with {}",
                    path.display(),
                    tmp.display()
                )
            })?;
            stats
        };

        Ok(FileOutcome {
            path: path.to_path_buf(),
            stats,
            elapsed: start.elapsed(),
            written: !options.dry_run,
        })
    }

    /// Run the whole batch sequentially
    ///
    /// `on_file` is called after each sheet with its 1-based position, the
    /// total count and the outcome. Any error stops the run.
    pub fn run<F>(
        &self,
        config: &ThickenConfig,
        options: &BatchOptions,
        mut on_file: F,
    ) -> Result<Vec<FileOutcome>>
    where
        F: FnMut(usize, usize, &FileOutcome),
    {
        self.validate()?;
        let paths = self.preflight()?;
        let total = paths.len();

        let mut outcomes = Vec::with_capacity(total);
        for (index, path) in paths.iter().enumerate() {
            let outcome = Self::process_file(path, config, options)?;
            on_file(index + 1, total, &outcome);
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}

impl Default for IconBatch {
    fn default() -> Self {
        Self::new(DEFAULT_ICONS_DIR)
    }
}
