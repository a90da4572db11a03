//! Check operation - manifest validation.

use cemit_manifest::HeaderFile;
use eyre::{Context, Result};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Parsing already validated the manifest; this also renders it once
/// so a clean check means `render` will succeed.
pub fn check(header_file: &HeaderFile) -> Result<CheckReport> {
    let manifest = header_file.manifest();
    let rendered = manifest.render().wrap_err("Failed to render manifest")?;

    Ok(CheckReport {
        config_path: header_file.path().to_path_buf(),
        output_name: manifest.header.name.clone(),
        guard: manifest.header.guard.clone(),
        indent: manifest.header.indent.to_string(),
        include_count: manifest.includes.len(),
        typedefs: manifest.typedefs.iter().map(|t| t.name.clone()).collect(),
        structs: manifest.structs.iter().map(|s| s.name.clone()).collect(),
        functions: manifest
            .functions
            .iter()
            .map(|f| (f.name.clone(), f.is_definition()))
            .collect(),
        line_count: rendered.lines().count(),
    })
}
