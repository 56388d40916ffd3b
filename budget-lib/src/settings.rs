//! User settings, read from an optional JSON file.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::SettingsError;

/// Most catalogs (and so choice fields) one screen holds.
pub const MAX_CATALOGS: usize = 32;

/// Application settings.
///
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rows the popup list shows at once.
    pub popup_rows: u16,
    /// Width of each entry in cells.
    pub field_width: u16,
    /// Log level name understood by the logger (`error` .. `trace`).
    pub log_level: String,
    /// One choice field per catalog.
    pub catalogs: Vec<Catalog>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            popup_rows: 5,
            field_width: 30,
            log_level: "debug".to_string(),
            catalogs: Catalog::defaults(),
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut settings: Settings =
            serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        for catalog in &mut settings.catalogs {
            catalog.trim_items();
        }
        settings.validate()?;

        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the frontend cannot lay out.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.popup_rows == 0 {
            return Err(SettingsError::Invalid("popup_rows must be at least 1".into()));
        }
        if self.field_width == 0 {
            return Err(SettingsError::Invalid("field_width must be at least 1".into()));
        }
        if self.catalogs.len() > MAX_CATALOGS {
            return Err(SettingsError::Invalid(format!(
                "{} catalogs given, at most {} fit on screen",
                self.catalogs.len(),
                MAX_CATALOGS
            )));
        }
        if let Some(catalog) = self.catalogs.iter().find(|c| c.name.trim().is_empty()) {
            return Err(SettingsError::Invalid(format!(
                "catalog with {} items has no name",
                catalog.items.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_overrides_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{ "popup_rows": 8, "catalogs": [ { "name": "Category", "items": ["Rent", "Food"] } ] }"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.popup_rows, 8);
        assert_eq!(settings.field_width, 30);
        assert_eq!(settings.catalogs, vec![Catalog::new("Category", ["Rent", "Food"])]);
    }

    #[test]
    fn test_padded_items_trimmed_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{ "catalogs": [ { "name": "Category", "items": [" Rent", "Food ", "\tUtilities\n"] } ] }"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.catalogs[0].items, ["Rent", "Food", "Utilities"]);
    }

    #[test]
    fn test_too_many_catalogs_rejected() {
        let settings = Settings {
            catalogs: (0..=MAX_CATALOGS)
                .map(|i| Catalog::new(format!("c{}", i), ["x"]))
                .collect(),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ popup_rows: ").unwrap();

        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn test_zero_rows_rejected() {
        let settings = Settings {
            popup_rows: 0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_unnamed_catalog_rejected() {
        let settings = Settings {
            catalogs: vec![Catalog::new(" ", ["x"])],
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
