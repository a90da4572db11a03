//! Render command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from rendering a manifest.
#[derive(Debug)]
pub struct RenderReport {
    /// Destination file.
    pub output: PathBuf,
    pub include_count: usize,
    pub typedef_count: usize,
    pub struct_count: usize,
    pub function_count: usize,
    /// What happened to the output.
    pub result: RenderResult,
}

/// Outcome of a render.
#[derive(Debug)]
pub enum RenderResult {
    /// The file was written.
    Written,
    /// The file existed and was left alone.
    Skipped,
    /// Dry-run preview of the rendered content.
    Preview { content: String },
}

impl Report for RenderReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.output.display().to_string();
        match &self.result {
            RenderResult::Preview { content } => {
                out.divider(&path);
                out.preformatted(content.trim_end());
                out.divider("Summary");
                out.preformatted(&format!("{} would be written", self.summary()));
            }
            RenderResult::Written => {
                out.key_value("Rendered", &path);
                out.preformatted(&self.summary());
            }
            RenderResult::Skipped => {
                out.warning(&format!("{} exists, skipped (--if-missing)", path));
            }
        }
    }
}

impl RenderReport {
    fn summary(&self) -> String {
        format!(
            "{} {}, {} {}, {} {}, {} {}",
            self.include_count,
            plural(self.include_count, "include"),
            self.typedef_count,
            plural(self.typedef_count, "typedef"),
            self.struct_count,
            plural(self.struct_count, "struct"),
            self.function_count,
            plural(self.function_count, "function"),
        )
    }
}

pub(crate) fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(result: RenderResult) -> RenderReport {
        RenderReport {
            output: PathBuf::from("api.h"),
            include_count: 1,
            typedef_count: 0,
            struct_count: 2,
            function_count: 1,
            result,
        }
    }

    #[test]
    fn test_written_summary() {
        let mut out = BufferOutput::default();
        report(RenderResult::Written).render(&mut out);
        assert_eq!(
            out.lines,
            ["Rendered: api.h", "1 include, 0 typedefs, 2 structs, 1 function"]
        );
    }

    #[test]
    fn test_preview_shows_content() {
        let mut out = BufferOutput::default();
        report(RenderResult::Preview {
            content: "int x;\n".into(),
        })
        .render(&mut out);
        assert_eq!(out.lines[0], "── api.h ──");
        assert_eq!(out.lines[1], "int x;");
    }
}
