use std::path::PathBuf;

use cemit_manifest::HeaderFile;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{RenderOptions, render},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RenderCommand {
    /// Path to the manifest (defaults to ./cemit.toml)
    #[arg(short, long, default_value = "cemit.toml")]
    pub config: PathBuf,

    /// Output file (defaults to `header.name` next to the manifest)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the rendered file instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Leave the output untouched if it already exists
    #[arg(long)]
    pub if_missing: bool,
}

impl RenderCommand {
    /// Run the render command
    pub fn run(&self) -> Result<()> {
        let header_file = HeaderFile::open(&self.config).unwrap_or_exit();
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| header_file.output_path());

        let report = render(
            &header_file,
            RenderOptions {
                output: &output,
                dry_run: self.dry_run,
                if_missing: self.if_missing,
            },
        )?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
