use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::locale::Locale;
use crate::marker::MarkerBlock;

// @module: Documentation-to-demo content injection

/// What happened to a single documentation file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The presentation page was rewritten (or would be, in a dry run)
    Updated {
        /// Presentation page path
        presentation: PathBuf,
        /// False when the page had no marker block and was left as is
        marker_found: bool,
    },
    /// No presentation page with the matching name exists
    SkippedNoPresentation {
        /// Presentation page path that was looked up
        presentation: PathBuf,
    },
}

/// What happened to a locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleOutcome {
    /// Both directories exist and every documentation file was visited
    Processed(Vec<FileOutcome>),
    /// The documentation or presentation directory is missing
    SkippedMissingDir,
}

/// Totals for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub updated: usize,
    pub skipped: usize,
    pub missing_marker: usize,
    pub locales_processed: usize,
    pub locales_skipped: usize,
}

impl RunSummary {
    fn record_locale(&mut self, outcome: &LocaleOutcome) {
        match outcome {
            LocaleOutcome::SkippedMissingDir => self.locales_skipped += 1,
            LocaleOutcome::Processed(files) => {
                self.locales_processed += 1;
                for file in files {
                    match file {
                        FileOutcome::Updated { marker_found, .. } => {
                            self.updated += 1;
                            if !marker_found {
                                self.missing_marker += 1;
                            }
                        }
                        FileOutcome::SkippedNoPresentation { .. } => self.skipped += 1,
                    }
                }
            }
        }
    }
}

/// Copies documentation files into the marker block of same-named
/// presentation pages, locale by locale
pub struct ContentInjector {
    // @field: Validated configuration
    config: Config,
    // @field: Parsed locales, in configured order
    locales: Vec<Locale>,
    // @field: Marker block to replace
    marker: MarkerBlock,
}

impl ContentInjector {
    // @method: Create an injector from a configuration, validating it first
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        let locales = config.parsed_locales()?;
        let marker = config.marker()?;

        Ok(Self {
            config,
            locales,
            marker,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full scan-and-inject pass over every configured locale.
    ///
    /// Missing directories, missing pages and missing marker blocks are
    /// logged and skipped. A read or write failure aborts the run.
    pub fn run(&self) -> Result<RunSummary> {
        info!("Starting build...");
        if self.config.dry_run {
            info!("Dry run: no files will be written");
        }

        let mut summary = RunSummary::default();
        for locale in &self.locales {
            let outcome = self.process_locale(locale)?;
            summary.record_locale(&outcome);
        }

        info!(
            "Build complete: {} updated, {} skipped",
            summary.updated, summary.skipped
        );
        if summary.missing_marker > 0 {
            warn!(
                "{} page(s) had no marker block '{}'",
                summary.missing_marker,
                self.marker.open_tag()
            );
        }

        Ok(summary)
    }

    /// Process every documentation file of one locale
    pub fn process_locale(&self, locale: &Locale) -> Result<LocaleOutcome> {
        let dirs = locale.dirs(&self.config.docs_dir, &self.config.demos_dir);

        if !FileManager::dir_exists(&dirs.docs_dir) || !FileManager::dir_exists(&dirs.demos_dir) {
            debug!(
                "Skipping locale {} ({}): {:?} or {:?} not found",
                locale,
                locale.name(),
                dirs.docs_dir,
                dirs.demos_dir
            );
            return Ok(LocaleOutcome::SkippedMissingDir);
        }

        debug!("Processing locale {} ({})", locale, locale.name());

        let doc_files = FileManager::list_files_with_extension(&dirs.docs_dir, &self.config.doc_extension)?;
        let mut outcomes = Vec::with_capacity(doc_files.len());
        for doc_path in doc_files {
            outcomes.push(self.process_file(&doc_path, &dirs.demos_dir)?);
        }

        Ok(LocaleOutcome::Processed(outcomes))
    }

    /// Inject one documentation file into its presentation page
    pub fn process_file(&self, doc_path: &Path, demos_dir: &Path) -> Result<FileOutcome> {
        let doc_name = doc_path.file_name().unwrap_or_default();
        let page_name = FileManager::swap_extension(doc_name, &self.config.presentation_extension);
        let page_path = demos_dir.join(&page_name);

        if !FileManager::file_exists(&page_path) {
            warn!(
                "Skipped: {} (no matching {} found)",
                doc_name.to_string_lossy(),
                page_name.display()
            );
            return Ok(FileOutcome::SkippedNoPresentation {
                presentation: page_path,
            });
        }

        let content = FileManager::read_to_string(doc_path)?;
        let html = FileManager::read_to_string(&page_path)?;

        let marker_found = self.marker.contains(&html);
        let injected = self.marker.inject(&html, &content);
        if !marker_found {
            debug!("No marker block in {:?}, leaving content unchanged", page_path);
        }

        if self.config.dry_run {
            info!("Would update: {}", page_name.display());
        } else {
            FileManager::write_to_file(&page_path, &injected)?;
            info!("✓ Updated: {}", page_name.display());
        }

        Ok(FileOutcome::Updated {
            presentation: page_path,
            marker_found,
        })
    }
}
