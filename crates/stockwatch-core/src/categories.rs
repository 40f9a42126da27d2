use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// Product-type labels used to group the full inventory report.
///
/// A product is listed under every category whose label occurs in its name,
/// so labels may overlap on purpose.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesFile {
    pub categories: Vec<String>,
}

/// Load and validate the category list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_categories(path: &Path) -> Result<CategoriesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CategoriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CategoriesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CategoriesFileParse)?;

    validate_categories(&file)?;

    Ok(file)
}

fn validate_categories(file: &CategoriesFile) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for label in &file.categories {
        if label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "category label must be non-empty".to_string(),
            ));
        }

        if !seen.insert(label.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category label: '{label}'"
            )));
        }
    }

    Ok(())
}
