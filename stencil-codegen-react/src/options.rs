//! Generation options.

use serde::{Deserialize, Serialize};

/// Options controlling the shape of generated component files.
///
/// Deserializes from the `[generation]` table of `stencil.toml`; every
/// field is optional and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Append `export default Name;` to each component file
    pub include_default_export: bool,
    /// Directory the component files are placed in
    pub component_path: String,
    pub file_extension: FileExtension,
    /// Emit `import React from 'react';`
    pub include_react_import: bool,
    /// Formatter settings merged over [`FormatterConfig::default`]
    pub formatter: FormatterOverrides,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_default_export: true,
            component_path: "src/components".to_string(),
            file_extension: FileExtension::default(),
            include_react_import: true,
            formatter: FormatterOverrides::default(),
        }
    }
}

impl GenerationOptions {
    /// The effective formatter configuration.
    pub fn formatter_config(&self) -> FormatterConfig {
        self.formatter.apply(FormatterConfig::default())
    }
}

/// Extension of generated component files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileExtension {
    #[default]
    #[serde(rename = ".jsx")]
    Jsx,
    #[serde(rename = ".tsx")]
    Tsx,
}

impl FileExtension {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileExtension::Jsx => ".jsx",
            FileExtension::Tsx => ".tsx",
        }
    }
}

impl std::fmt::Display for FileExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trailing comma policy passed to the formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    None,
    #[default]
    Es5,
    All,
}

impl TrailingComma {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrailingComma::None => "none",
            TrailingComma::Es5 => "es5",
            TrailingComma::All => "all",
        }
    }
}

/// Fully resolved formatter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatterConfig {
    pub semi: bool,
    pub single_quote: bool,
    pub tab_width: u8,
    pub trailing_comma: TrailingComma,
    pub print_width: u16,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            semi: true,
            single_quote: false,
            tab_width: 2,
            trailing_comma: TrailingComma::Es5,
            print_width: 80,
        }
    }
}

/// Partial formatter settings as written in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semi: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_quote: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_width: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_comma: Option<TrailingComma>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_width: Option<u16>,
}

impl FormatterOverrides {
    /// Merge these overrides over a base configuration.
    pub fn apply(&self, base: FormatterConfig) -> FormatterConfig {
        FormatterConfig {
            semi: self.semi.unwrap_or(base.semi),
            single_quote: self.single_quote.unwrap_or(base.single_quote),
            tab_width: self.tab_width.unwrap_or(base.tab_width),
            trailing_comma: self.trailing_comma.unwrap_or(base.trailing_comma),
            print_width: self.print_width.unwrap_or(base.print_width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GenerationOptions::default();
        assert!(options.include_default_export);
        assert!(options.include_react_import);
        assert_eq!(options.component_path, "src/components");
        assert_eq!(options.file_extension.as_str(), ".jsx");
        assert_eq!(options.formatter_config(), FormatterConfig::default());
    }

    #[test]
    fn test_partial_toml_merges_over_defaults() {
        let options: GenerationOptions = toml::from_str(
            r#"
            file_extension = ".tsx"
            include_react_import = false

            [formatter]
            single_quote = true
            trailing_comma = "all"
            "#,
        )
        .unwrap();

        assert_eq!(options.file_extension, FileExtension::Tsx);
        assert!(!options.include_react_import);
        assert!(options.include_default_export);

        let config = options.formatter_config();
        assert!(config.single_quote);
        assert!(config.semi);
        assert_eq!(config.trailing_comma, TrailingComma::All);
        assert_eq!(config.print_width, 80);
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let result: Result<GenerationOptions, _> = toml::from_str(r#"file_extension = ".vue""#);
        assert!(result.is_err());
    }
}
