use anyhow::{Context, Result, anyhow};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::locale::Locale;
use crate::marker::{DEFAULT_MARKER_ID, MarkerBlock};

/// Application configuration module
/// This module handles loading and validating the injector settings.
/// Every field has a default so an absent or partial config file still
/// yields the conventional `docs/<locale>` and `demos/<locale>` layout.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Root of the documentation tree, one subdirectory per locale
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,

    /// Root of the presentation tree, one subdirectory per locale
    #[serde(default = "default_demos_dir")]
    pub demos_dir: PathBuf,

    /// Locale codes to process, in order
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,

    /// Extension of documentation files (without the dot)
    #[serde(default = "default_doc_extension")]
    pub doc_extension: String,

    /// Extension of presentation files (without the dot)
    #[serde(default = "default_presentation_extension")]
    pub presentation_extension: String,

    /// Id of the `<script type="text/plain">` marker block
    #[serde(default = "default_marker_id")]
    pub marker_id: String,

    /// Report what would change without writing anything
    #[serde(default)]
    pub dry_run: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_demos_dir() -> PathBuf {
    PathBuf::from("demos")
}

fn default_locales() -> Vec<String> {
    vec!["zh".to_string(), "en".to_string()]
}

fn default_doc_extension() -> String {
    "md".to_string()
}

fn default_presentation_extension() -> String {
    "html".to_string()
}

fn default_marker_id() -> String {
    DEFAULT_MARKER_ID.to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load the config file if it exists, otherwise fall back to defaults.
    /// The file is never created.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Build the effective configuration for a project root.
    ///
    /// `config_path` is resolved against `root` unless absolute. Values from
    /// the command line win over the file: `log_level` when given, and
    /// `dry_run` when set. Relative docs/demos roots are resolved against
    /// `root`.
    pub fn resolve<P1: AsRef<Path>, P2: AsRef<Path>>(
        root: P1,
        config_path: P2,
        log_level: Option<LogLevel>,
        dry_run: bool,
    ) -> Result<Self> {
        let root = root.as_ref();
        let config_path = root.join(config_path.as_ref());

        let mut config = Self::load_or_default(&config_path)?.with_root(root);
        if config_path.exists() {
            debug!("Loaded configuration from {:?}", config_path);
        }

        // Command line overrides
        if let Some(level) = log_level {
            config.log_level = level;
        }
        if dry_run {
            config.dry_run = true;
        }

        Ok(config)
    }

    /// Resolve relative docs/demos roots against a project root
    pub fn with_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        let root = root.as_ref();
        if self.docs_dir.is_relative() {
            self.docs_dir = root.join(&self.docs_dir);
        }
        if self.demos_dir.is_relative() {
            self.demos_dir = root.join(&self.demos_dir);
        }
        self
    }

    /// Parsed locales, in configured order
    pub fn parsed_locales(&self) -> Result<Vec<Locale>> {
        self.locales
            .iter()
            .map(|code| Locale::parse(code))
            .collect()
    }

    /// Marker block built from `marker_id`
    pub fn marker(&self) -> Result<MarkerBlock> {
        Ok(MarkerBlock::new(&self.marker_id)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.locales.is_empty() {
            return Err(anyhow!("At least one locale must be configured"));
        }
        self.parsed_locales()?;

        let doc_ext = self.doc_extension.trim_start_matches('.');
        let presentation_ext = self.presentation_extension.trim_start_matches('.');
        if doc_ext.is_empty() {
            return Err(anyhow!("Documentation extension must not be empty"));
        }
        if presentation_ext.is_empty() {
            return Err(anyhow!("Presentation extension must not be empty"));
        }
        if doc_ext == presentation_ext {
            return Err(anyhow!(
                "Documentation and presentation extensions must differ (both '{}')",
                doc_ext
            ));
        }

        self.marker()?;

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            docs_dir: default_docs_dir(),
            demos_dir: default_demos_dir(),
            locales: default_locales(),
            doc_extension: default_doc_extension(),
            presentation_extension: default_presentation_extension(),
            marker_id: default_marker_id(),
            dry_run: false,
            log_level: LogLevel::default(),
        }
    }
}
