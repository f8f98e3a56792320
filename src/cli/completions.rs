//! `armory completions`: shell completion scripts.

use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::error::{ArmoryError, Result};
use crate::output::{display_path, Printer};

/// Generate shell completions
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script into this directory instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: CompletionsArgs, printer: &Printer) -> Result<()> {
    let mut cmd = super::Cli::command();
    match args.output {
        None => clap_complete::generate(args.shell, &mut cmd, "armory", &mut std::io::stdout()),
        Some(dir) => {
            let path = clap_complete::generate_to(args.shell, &mut cmd, "armory", &dir).map_err(|e| {
                ArmoryError::Io {
                    path: dir.clone(),
                    message: format!("Failed to write completions: {}", e),
                }
            })?;
            printer.success("Wrote", &display_path(&path));
        }
    }
    Ok(())
}
