//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, spans::NameSpans, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

/// Serialization format of a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Toml,
    Json,
}

impl Format {
    /// Pick the format from a file extension (`.json` is JSON, anything else TOML).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "cemit.toml", Format::Toml)
    }
}

impl Manifest {
    /// Parse a manifest file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string(), Format::from_path(path))
    }

    /// Parse a manifest from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str, format: Format) -> Result<Self> {
        parse_manifest(content, filename, format)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str, format: Format) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = match format {
        Format::Toml => toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?,
        Format::Json => serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?,
    };
    let spans = NameSpans::new(content, format, &manifest);
    validate_manifest(&manifest, content, filename, &spans)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(
    manifest: &Manifest,
    src: &str,
    filename: &str,
    spans: &NameSpans,
) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    ctx.validate_header(&manifest.header)?;

    for (i, typedef) in manifest.typedefs.iter().enumerate() {
        let typedef_ctx = ctx.push(&typedef.name);
        typedef_ctx.validate_name_at(&typedef.name, "typedef", spans.typedef(i))?;
        typedef_ctx.validate_type(&typedef.ty)?;
    }

    for (i, structure) in manifest.structs.iter().enumerate() {
        let scope = spans.structure(i);
        ctx.validate_name_at(&structure.name, "struct", scope.name())?;
        let struct_ctx = ctx.push(&structure.name);
        for (j, field) in structure.fields.iter().enumerate() {
            struct_ctx.validate_name_at(&field.name, "field", scope.member(j))?;
            struct_ctx.validate_type(&field.ty)?;
        }
        struct_ctx.check_unique(
            structure
                .fields
                .iter()
                .enumerate()
                .map(|(j, f)| (f.name.as_str(), scope.member(j))),
            "field",
        )?;
    }

    for (i, function) in manifest.functions.iter().enumerate() {
        let scope = spans.function(i);
        ctx.validate_name_at(&function.name, "function", scope.name())?;
        let fn_ctx = ctx.push(&function.name);
        fn_ctx.validate_type(&function.returns)?;
        fn_ctx.validate_params(&function.params, scope.members())?;
        if let Some(import) = &function.import {
            if let Some(name) = &import.name {
                fn_ctx.validate_name(name, "import")?;
            }
            if let Some(module) = &import.module {
                fn_ctx.validate_import_module(module)?;
            }
        }
    }

    // Struct tags live in their own namespace; typedefs and functions share one.
    ctx.check_unique(
        manifest
            .structs
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.as_str(), spans.structure(i).name())),
        "struct",
    )?;
    ctx.check_unique(
        manifest
            .typedefs
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name.as_str(), spans.typedef(i)))
            .chain(
                manifest
                    .functions
                    .iter()
                    .enumerate()
                    .map(|(i, f)| (f.name.as_str(), spans.function(i).name())),
            ),
        "identifier",
    )?;

    Ok(())
}
