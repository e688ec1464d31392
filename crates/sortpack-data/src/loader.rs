//! Configuration loading: format detection, file discovery, deserialization.
//!
//! A configuration may be written as RON, JSON or TOML; the format is taken
//! from the file extension. Given a directory, the loader looks for
//! `sorter.{ron,toml,json}` and refuses to guess when more than one exists.

use sortpack_core::config::Configuration;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Base name searched for when the config path is a directory.
pub const DEFAULT_CONFIG_NAME: &str = "sorter";

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that prevent a configuration from being loaded.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// No config file with the expected base name exists in the directory.
    #[error("no '{base_name}' config file (ron, toml or json) in {dir}")]
    MissingConfig { base_name: String, dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same base name but different formats exist.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Ron, Format::Toml, Format::Json];

    pub fn extension(self) -> &'static str {
        match self {
            Format::Ron => "ron",
            Format::Toml => "toml",
            Format::Json => "json",
        }
    }
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Scan a directory for `{base_name}.{ron,toml,json}`.
///
/// Returns `Ok(None)` if no file is found, or `Err(ConflictingFormats)` if
/// multiple formats exist for the same base name.
pub fn find_config_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let mut found: Option<PathBuf> = None;

    for format in Format::ALL {
        let candidate = dir.join(format!("{base_name}.{}", format.extension()));
        if candidate.exists() {
            if let Some(ref existing) = found {
                return Err(DataLoadError::ConflictingFormats {
                    a: existing.clone(),
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

/// Like [`find_config_file`], but returns an error if no file is found.
pub fn require_config_file(dir: &Path, base_name: &str) -> Result<PathBuf, DataLoadError> {
    find_config_file(dir, base_name)?.ok_or_else(|| DataLoadError::MissingConfig {
        base_name: base_name.to_string(),
        dir: dir.to_path_buf(),
    })
}

// ===========================================================================
// Deserialization
// ===========================================================================

/// Parse configuration text in the given format. `file` is only used in
/// error messages.
pub fn parse_config(content: &str, format: Format, file: &Path) -> Result<Configuration, DataLoadError> {
    let parse_err = |detail: String| DataLoadError::Parse {
        file: file.to_path_buf(),
        detail,
    };

    match format {
        Format::Ron => ron::from_str(content).map_err(|e| parse_err(e.to_string())),
        Format::Json => serde_json::from_str(content).map_err(|e| parse_err(e.to_string())),
        Format::Toml => toml::from_str(content).map_err(|e| parse_err(e.to_string())),
    }
}

/// Load a configuration from a file, or from `sorter.*` inside a directory.
pub fn load_config(path: &Path) -> Result<Configuration, DataLoadError> {
    let file = if path.is_dir() {
        require_config_file(path, DEFAULT_CONFIG_NAME)?
    } else {
        path.to_path_buf()
    };

    let format = detect_format(&file)?;
    let content = std::fs::read_to_string(&file)?;
    let config = parse_config(&content, format, &file)?;
    debug!(file = %file.display(), ?format, groups = config.groups.len(), "loaded configuration");
    Ok(config)
}

// ===========================================================================
// Tests
// ===========================================================================
