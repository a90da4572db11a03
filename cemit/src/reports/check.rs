//! Check command report data structures.

use std::path::PathBuf;

use super::{
    output::{Output, Report},
    render::plural,
};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// `header.name`.
    pub output_name: String,
    pub guard: Option<String>,
    /// Indentation, as displayed.
    pub indent: String,
    pub include_count: usize,
    pub typedefs: Vec<String>,
    pub structs: Vec<String>,
    /// Function names, with whether each has a body.
    pub functions: Vec<(String, bool)>,
    /// Lines in the rendered output.
    pub line_count: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.key_value("Output", &self.output_name);
        if let Some(guard) = &self.guard {
            out.key_value("Guard", guard);
        }
        out.key_value("Indent", &self.indent);
        out.key_value("Includes", &self.include_count.to_string());

        self.render_names(out, "Typedefs", self.typedefs.iter().cloned());
        self.render_names(out, "Structs", self.structs.iter().cloned());
        self.render_names(
            out,
            "Functions",
            self.functions.iter().map(|(name, defined)| {
                if *defined {
                    format!("{} (defined)", name)
                } else {
                    name.clone()
                }
            }),
        );

        out.newline();
        out.preformatted(&format!(
            "{} {} when rendered",
            self.line_count,
            plural(self.line_count, "line")
        ));
    }
}

impl CheckReport {
    fn render_names(
        &self,
        out: &mut dyn Output,
        heading: &str,
        names: impl Iterator<Item = String>,
    ) {
        let names: Vec<String> = names.collect();
        if names.is_empty() {
            return;
        }
        out.newline();
        out.section(&format!("{} ({})", heading, names.len()));
        for name in &names {
            out.list_item(name);
        }
    }
}
