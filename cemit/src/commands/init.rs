use std::{path::PathBuf, str::FromStr};

use cemit_core::{File, FileRules, Overwrite, WriteResult};
use cemit_manifest::Manifest;
use clap::Args;
use eyre::{Context, Result, eyre};

#[derive(Args)]
pub struct InitCommand {
    /// Name of the C file the manifest describes
    #[arg(default_value = "bindings.h")]
    pub name: String,

    /// Directory to create cemit.toml in
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let content = starter_for(&self.name)?;
        let path = self.output.join("cemit.toml");
        let file = File::new(&path, content).rules(FileRules {
            overwrite: Overwrite::IfMissing,
            header: None,
        });

        match file
            .write()
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?
        {
            WriteResult::Written => {
                println!("Created {}", path.display());
                println!();
                println!("Next: edit it, then run `cemit render`");
            }
            WriteResult::Skipped => println!("{} already exists, leaving it alone", path.display()),
        }
        Ok(())
    }
}

/// Guard macro for a file name: `my-api.h` becomes `MY_API_H`, `1api.h` becomes `_1API_H`.
fn guard_for(name: &str) -> String {
    let guard: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if guard.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{guard}")
    } else {
        guard
    }
}

/// The starter manifest for `name`, refused unless it passes validation.
fn starter_for(name: &str) -> Result<String> {
    let content = starter_manifest(name);
    Manifest::from_str(&content)
        .map_err(|e| eyre!("cannot start a manifest for '{}': {}", name, e))?;
    Ok(content)
}

fn starter_manifest(name: &str) -> String {
    format!(
        r#"[header]
name = "{name}"
guard = "{guard}"
indent = 4

[[includes]]
file = "stdint.h"
system = true

[[structs]]
name = "Point"
fields = [
    {{ name = "x", type = "int32_t" }},
    {{ name = "y", type = "int32_t" }},
]

[[functions]]
name = "point_len"
returns = "int32_t"
params = [{{ name = "p", type = {{ struct = "Point", qualifiers = ["const"], declarators = ["pointer"] }} }}]
"#,
        name = name,
        guard = guard_for(name),
    )
}
