//! Manifest parsing from files and strings.

use std::path::Path;

use super::{Manifest, validate::validate_manifest};
use crate::{Error, Result, error::SourceContext};

/// On-disk encoding of a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Toml,
}

impl ManifestFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(ManifestFormat::Json),
            "toml" => Some(ManifestFormat::Toml),
            _ => None,
        }
    }
}

impl Manifest {
    /// Parse a manifest file; the format is chosen by extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ManifestFormat::from_path(path).ok_or_else(|| {
            Box::new(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        })?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string(), format)
    }

    /// Parse a JSON manifest from a string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        parse_manifest(content, "manifest.json", ManifestFormat::Json)
    }

    /// Parse a TOML manifest from a string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse_manifest(content, "manifest.toml", ManifestFormat::Toml)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str, format: ManifestFormat) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let mut manifest: Manifest = match format {
        ManifestFormat::Json => {
            serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?
        }
        ManifestFormat::Toml => toml::from_str(content).map_err(|e| source_ctx.toml_error(e))?,
    };
    fill_ids(&mut manifest);
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

/// Entries keyed by id may omit the id field itself.
fn fill_ids(manifest: &mut Manifest) {
    for (key, component) in manifest.components.iter_mut() {
        if component.id.is_empty() {
            component.id = key.clone();
        }
    }
    for (key, flow) in manifest.flows.iter_mut() {
        if flow.id.is_empty() {
            flow.id = key.clone();
        }
    }
}
