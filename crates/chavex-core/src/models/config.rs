//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for a chavex run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChavexConfig {
    /// Input/output folder layout.
    pub folders: FolderConfig,

    /// Key extraction configuration.
    pub extraction: ExtractionConfig,
}

impl Default for ChavexConfig {
    fn default() -> Self {
        Self {
            folders: FolderConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// Folder layout for a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderConfig {
    /// Folder containing the input PDFs.
    pub input: PathBuf,

    /// Destination folder for files with an access key.
    pub with_key: PathBuf,

    /// Destination folder for files without an access key.
    pub without_key: PathBuf,

    /// Report file path.
    pub report_file: PathBuf,
}

impl Default for FolderConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("."),
            with_key: PathBuf::from("PDFs_Com_Chave"),
            without_key: PathBuf::from("PDFs_Sem_Chave"),
            report_file: PathBuf::from("chaves_extraidas_final.txt"),
        }
    }
}

/// Key extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Enable structural plausibility checks (state code, date, model).
    pub validate_structure: bool,

    /// Enable modulo-11 check digit verification.
    pub validate_check_digit: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            validate_structure: true,
            validate_check_digit: true,
        }
    }
}

impl ChavexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli_surface() {
        let config = ChavexConfig::default();
        assert_eq!(config.folders.with_key, PathBuf::from("PDFs_Com_Chave"));
        assert_eq!(config.folders.without_key, PathBuf::from("PDFs_Sem_Chave"));
        assert_eq!(
            config.folders.report_file,
            PathBuf::from("chaves_extraidas_final.txt")
        );
        assert!(config.extraction.validate_check_digit);
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ChavexConfig::default();
        config.folders.input = PathBuf::from("/tmp/faturas");
        config.extraction.validate_structure = false;
        config.save(&path).unwrap();

        let loaded = ChavexConfig::from_file(&path).unwrap();
        assert_eq!(loaded.folders.input, PathBuf::from("/tmp/faturas"));
        assert!(!loaded.extraction.validate_structure);
    }
}
