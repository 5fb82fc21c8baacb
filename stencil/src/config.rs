//! Project configuration loaded from `stencil.toml`.

use std::path::Path;

use eyre::{Context, Result};
use serde::Deserialize;
use stencil_codegen_react::GenerationOptions;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "stencil.toml";

/// Contents of `stencil.toml`.
///
/// ```toml
/// [generation]
/// component_path = "app/components"
/// file_extension = ".tsx"
///
/// [generation.formatter]
/// single_quote = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StencilConfig {
    pub generation: GenerationOptions,
}

impl StencilConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).wrap_err("Invalid stencil configuration")
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("{} not found, using default options", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content).wrap_err_with(|| format!("In {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use stencil_codegen_react::{FileExtension, TrailingComma};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = StencilConfig::load(&temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, StencilConfig::default());
    }

    #[test]
    fn test_generation_table() {
        let config = StencilConfig::from_toml_str(
            r#"
            [generation]
            component_path = "app/ui"
            file_extension = ".tsx"
            include_react_import = false

            [generation.formatter]
            trailing_comma = "all"
            "#,
        )
        .unwrap();

        let generation = &config.generation;
        assert_eq!(generation.component_path, "app/ui");
        assert_eq!(generation.file_extension, FileExtension::Tsx);
        assert!(!generation.include_react_import);
        assert!(generation.include_default_export);
        assert_eq!(
            generation.formatter_config().trailing_comma,
            TrailingComma::All
        );
    }

    #[test]
    fn test_unknown_table_is_rejected() {
        assert!(StencilConfig::from_toml_str("[output]\ndir = \"x\"").is_err());
    }

    #[test]
    fn test_load_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "[generation]\ninclude_default_export = false\n").unwrap();

        let config = StencilConfig::load(&path).unwrap();
        assert!(!config.generation.include_default_export);
    }
}
