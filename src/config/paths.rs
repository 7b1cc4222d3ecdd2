//! Path management for freee-receipts
//!
//! Resolves where the settings file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `FREEE_RECEIPTS_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/freee-receipts` or `~/.config/freee-receipts`
//! 3. Windows: `%APPDATA%\freee-receipts`

use std::path::PathBuf;

use crate::error::ReceiptError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "FREEE_RECEIPTS_CONFIG_DIR";

/// Manages the paths used by freee-receipts
#[derive(Debug, Clone)]
pub struct ReceiptPaths {
    /// Base directory for configuration
    base_dir: PathBuf,
}

impl ReceiptPaths {
    /// Create a new ReceiptPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, ReceiptError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ReceiptPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/freee-receipts/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), ReceiptError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ReceiptError::Io(format!("Failed to create config directory: {}", e)))
    }
}

/// Resolve the default config directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ReceiptError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("freee-receipts"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| ReceiptError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("freee-receipts"))
}

/// Resolve the default config directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ReceiptError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ReceiptError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("freee-receipts"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReceiptPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        std::env::set_var(CONFIG_DIR_ENV, custom_path);
        let paths = ReceiptPaths::new().unwrap();
        std::env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReceiptPaths::with_base_dir(temp_dir.path().join("nested").join("config"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
    }
}
