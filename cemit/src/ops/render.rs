//! Render operation - manifest to C file.

use std::path::Path;

use cemit_core::{File, FileRules, Overwrite, WriteResult};
use cemit_manifest::HeaderFile;
use eyre::{Context, Result};

use crate::reports::{RenderReport, RenderResult};

/// Options for the render operation.
pub struct RenderOptions<'a> {
    /// Destination file.
    pub output: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to keep an existing output file.
    pub if_missing: bool,
}

/// Execute the render operation.
pub fn render(header_file: &HeaderFile, opts: RenderOptions) -> Result<RenderReport> {
    let manifest = header_file.manifest();
    let content = manifest.render().wrap_err("Failed to render manifest")?;

    let banner = format!(
        "Generated by cemit from {}. Do not edit.",
        header_file
            .path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| header_file.path().display().to_string())
    );
    let file = File::new(opts.output, content).rules(FileRules {
        overwrite: if opts.if_missing {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        },
        header: Some(banner),
    });

    let result = if opts.dry_run {
        RenderResult::Preview {
            content: file.content().to_string(),
        }
    } else {
        match file.write().wrap_err("Failed to write output")? {
            WriteResult::Written => RenderResult::Written,
            WriteResult::Skipped => RenderResult::Skipped,
        }
    };

    Ok(RenderReport {
        output: opts.output.to_path_buf(),
        include_count: manifest.includes.len(),
        typedef_count: manifest.typedefs.len(),
        struct_count: manifest.structs.len(),
        function_count: manifest.functions.len(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_file(dir: &Path) -> HeaderFile {
        let path = dir.join("cemit.toml");
        std::fs::write(
            &path,
            "[header]\nname = \"api.h\"\n\n[[functions]]\nname = \"ping\"\nreturns = \"void\"\nparams = [{ type = \"void\" }]\n",
        )
        .unwrap();
        HeaderFile::open(&path).unwrap()
    }

    #[test]
    fn test_render_writes_banner_and_content() {
        let dir = tempfile::tempdir().unwrap();
        let header_file = header_file(dir.path());
        let output = header_file.output_path();

        let report = render(
            &header_file,
            RenderOptions {
                output: &output,
                dry_run: false,
                if_missing: false,
            },
        )
        .unwrap();

        assert!(matches!(report.result, RenderResult::Written));
        assert_eq!(report.function_count, 1);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "/* Generated by cemit from cemit.toml. Do not edit. */\n\nvoid ping(void);\n"
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let header_file = header_file(dir.path());
        let output = dir.path().join("out/api.h");

        let report = render(
            &header_file,
            RenderOptions {
                output: &output,
                dry_run: true,
                if_missing: false,
            },
        )
        .unwrap();

        match report.result {
            RenderResult::Preview { content } => assert_eq!(content, "void ping(void);\n"),
            other => panic!("expected a preview, got {other:?}"),
        }
        assert!(!output.exists());
    }

    #[test]
    fn test_if_missing_skips_existing() {
        let dir = tempfile::tempdir().unwrap();
        let header_file = header_file(dir.path());
        let output = header_file.output_path();
        std::fs::write(&output, "/* hand written */\n").unwrap();

        let report = render(
            &header_file,
            RenderOptions {
                output: &output,
                dry_run: false,
                if_missing: true,
            },
        )
        .unwrap();

        assert!(matches!(report.result, RenderResult::Skipped));
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "/* hand written */\n"
        );
    }
}
