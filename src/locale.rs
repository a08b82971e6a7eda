use anyhow::{Result, anyhow};
use isolang::Language;
use std::fmt;
use std::path::{Path, PathBuf};

/// Locale handling
///
/// A locale is the name of a per-language subdirectory under both the
/// documentation root and the demos root. Codes are validated against
/// ISO 639-1 (2-letter) or ISO 639-3 (3-letter); a region suffix such as
/// `zh-CN` or `pt_BR` is allowed and kept as part of the directory name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    code: String,
    language: Language,
}

impl Locale {
    /// Parse and validate a locale code
    pub fn parse(code: &str) -> Result<Self> {
        let code = code.trim();
        if code.is_empty() {
            return Err(anyhow!("Locale code must not be empty"));
        }

        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();

        let language = match primary.len() {
            2 => Language::from_639_1(&primary),
            3 => Language::from_639_3(&primary),
            _ => None,
        }
        .ok_or_else(|| anyhow!("Invalid locale code: {}", code))?;

        Ok(Self {
            code: code.to_string(),
            language,
        })
    }

    /// The code as configured, also used as the directory name
    pub fn code(&self) -> &str {
        &self.code
    }

    /// English name of the locale's language
    pub fn name(&self) -> &'static str {
        self.language.to_name()
    }

    /// Resolve this locale's directory pair under the two roots
    pub fn dirs<P1: AsRef<Path>, P2: AsRef<Path>>(&self, docs_root: P1, demos_root: P2) -> LocaleDirs {
        LocaleDirs {
            docs_dir: docs_root.as_ref().join(&self.code),
            demos_dir: demos_root.as_ref().join(&self.code),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Documentation and presentation directories of one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDirs {
    /// Directory holding the documentation files
    pub docs_dir: PathBuf,
    /// Directory holding the presentation pages
    pub demos_dir: PathBuf,
}
