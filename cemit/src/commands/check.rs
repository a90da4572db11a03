use std::path::PathBuf;

use cemit_manifest::HeaderFile;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::check,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the manifest (defaults to ./cemit.toml)
    #[arg(short, long, default_value = "cemit.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let header_file = HeaderFile::open(&self.config).unwrap_or_exit();
        let report = check(&header_file)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
