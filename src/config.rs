// Mon Oct 19 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Map file does not exist: {}", .0.display())]
    MissingMapFile(PathBuf),
    #[error("Source directory does not exist: {}", .0.display())]
    MissingSourceDir(PathBuf),
    #[error("Source file extension must not be empty")]
    EmptyExtension,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub map_file: PathBuf,
    pub source_dir: PathBuf,
    pub git_commit_date: String,
    pub git_commit_id: String,
    pub output_file: Option<PathBuf>,
    pub source_extension: String,
    pub include_timestamp: bool,
    pub indent_size: usize,
}

impl Config {
    pub fn new(
        map_file: impl Into<PathBuf>,
        source_dir: impl Into<PathBuf>,
        git_commit_date: impl Into<String>,
        git_commit_id: impl Into<String>,
    ) -> Self {
        Self {
            map_file: map_file.into(),
            source_dir: source_dir.into(),
            git_commit_date: git_commit_date.into(),
            git_commit_id: git_commit_id.into(),
            output_file: None,
            source_extension: "c".to_string(),
            include_timestamp: true,
            indent_size: 4,
        }
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = Some(output);
        self
    }

    pub fn with_source_extension(mut self, extension: &str) -> Self {
        self.source_extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn with_timestamp(mut self, include: bool) -> Self {
        self.include_timestamp = include;
        self
    }

    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }

    /// Both inputs must exist before any parsing starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.map_file.is_file() {
            return Err(ConfigError::MissingMapFile(self.map_file.clone()));
        }
        if !self.source_dir.exists() {
            return Err(ConfigError::MissingSourceDir(self.source_dir.clone()));
        }
        if self.source_extension.is_empty() {
            return Err(ConfigError::EmptyExtension);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_and_builders() {
        let config = Config::new("firmware.map", "src", "2012-12-20 12:34:56-06:00", "abc123")
            .with_source_extension(".cc")
            .with_timestamp(false)
            .with_output_file(PathBuf::from("ui-info.json"));

        assert_eq!(config.source_extension, "cc");
        assert!(!config.include_timestamp);
        assert_eq!(config.indent_size, 4);
        assert_eq!(config.output_file, Some(PathBuf::from("ui-info.json")));
    }

    #[test]
    fn test_validate_paths() {
        let dir = TempDir::new().unwrap();
        let map = dir.path().join("firmware.map");
        std::fs::write(&map, "").unwrap();

        let missing_map = Config::new(dir.path().join("nope.map"), dir.path(), "d", "i");
        assert!(matches!(missing_map.validate(), Err(ConfigError::MissingMapFile(_))));

        let missing_src = Config::new(&map, dir.path().join("nope"), "d", "i");
        assert!(matches!(missing_src.validate(), Err(ConfigError::MissingSourceDir(_))));

        let empty_ext = Config::new(&map, dir.path(), "d", "i").with_source_extension("");
        assert!(matches!(empty_ext.validate(), Err(ConfigError::EmptyExtension)));

        assert!(Config::new(&map, dir.path(), "d", "i").validate().is_ok());
    }
}
